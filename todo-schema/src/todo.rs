use serde::{Deserialize, Serialize};

/// A persisted Todo item as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub description: String,
    pub completed: bool,
}

/// Inbound Todo body for create and partial update.
///
/// Every field may be absent. `id` is accepted for shape compatibility with
/// [`Todo`] but never trusted: ids are assigned by storage on create and taken
/// from the path on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoPayload {
    pub id: Option<i64>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPayload {
    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// The description if present and non-empty.
    pub fn non_empty_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_accepts_explicit_nulls_and_missing_fields() {
        let raw = r#"{"id":null,"description":"buy milk","completed":null}"#;
        let parsed = serde_json::from_str::<TodoPayload>(raw).expect("parse payload");
        assert_eq!(parsed, TodoPayload::with_description("buy milk"));

        let parsed = serde_json::from_str::<TodoPayload>(r#"{"completed":true}"#)
            .expect("parse partial payload");
        assert_eq!(parsed.description, None);
        assert_eq!(parsed.completed, Some(true));
    }

    #[test]
    fn non_empty_description_filters_empty_string() {
        assert_eq!(TodoPayload::with_description("").non_empty_description(), None);
        assert_eq!(TodoPayload::default().non_empty_description(), None);
        assert_eq!(
            TodoPayload::with_description("walk dog").non_empty_description(),
            Some("walk dog")
        );
    }

    #[test]
    fn todo_serializes_with_flat_field_names() {
        let todo = Todo {
            id: 1,
            description: "buy milk".to_string(),
            completed: false,
        };
        let value = serde_json::to_value(&todo).expect("serialize todo");
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "description": "buy milk", "completed": false})
        );
    }
}

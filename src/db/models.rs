use sqlx::FromRow;
use todo_schema::Todo;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DbTodo {
    pub id: i64,
    pub description: String,
    pub completed: bool,
}

impl From<DbTodo> for Todo {
    fn from(row: DbTodo) -> Self {
        Todo {
            id: row.id,
            description: row.description,
            completed: row.completed,
        }
    }
}

/// A validated Todo that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub description: String,
    pub completed: bool,
}

impl NewTodo {
    pub fn into_todo(self, id: i64) -> Todo {
        Todo {
            id,
            description: self.description,
            completed: self.completed,
        }
    }
}

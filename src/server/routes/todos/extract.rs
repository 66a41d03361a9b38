use crate::error::TodoError;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use todo_schema::TodoPayload;

/// `{id}` path segment parsed as an `i64`; anything else is `InvalidInput`.
pub(crate) struct TodoId(pub(crate) i64);

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = TodoError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;
        Ok(TodoId(id))
    }
}

/// JSON Todo body. Syntax and shape errors become `InvalidInput` so they share
/// the `{errorMessage, errorTime}` response with every other failure.
pub(crate) struct TodoBody(pub(crate) TodoPayload);

impl<S> FromRequest<S> for TodoBody
where
    S: Send + Sync,
{
    type Rejection = TodoError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<TodoPayload>::from_request(req, state).await?;
        Ok(TodoBody(payload))
    }
}

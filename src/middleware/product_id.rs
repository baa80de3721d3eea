use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::error::AppError;

/// Product id taken from the `{id}` path segment.
///
/// A segment that is not a UUID is rejected with the JSON error body instead
/// of axum's plain-text rejection.
#[derive(Debug, Clone, Copy)]
pub struct ProductId(pub Uuid);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        let id = Uuid::parse_str(raw.trim())
            .map_err(|_| AppError::BadRequest(format!("invalid product id `{raw}`")))?;
        Ok(ProductId(id))
    }
}

//! Typed path parameter helpers.

use std::str::FromStr;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use showroom_core::error::AppError;

use crate::error::ApiError;

/// Parses an identifier from a path segment.
pub fn parse_id<T: FromStr>(s: &str) -> Result<T, AppError> {
    s.parse()
        .map_err(|_| AppError::invalid(format!("Invalid identifier: {s}")))
}

/// A single path segment parsed into a typed identifier. Malformed
/// segments are rejected through [`ApiError`].
#[derive(Debug, Clone, Copy)]
pub struct IdPath<T>(pub T);

impl<T, S> FromRequestParts<S> for IdPath<T>
where
    T: FromStr + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::invalid(rejection.body_text()))?;
        Ok(Self(parse_id(&raw)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showroom_core::error::ErrorKind;
    use showroom_core::types::LibraryId;

    #[test]
    fn test_parse_id() {
        let id = LibraryId::new();
        assert_eq!(parse_id::<LibraryId>(&id.to_string()).unwrap(), id);

        let err = parse_id::<LibraryId>("not-a-uuid").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Invalid);
        assert_eq!(err.message, "Invalid identifier: not-a-uuid");
    }
}

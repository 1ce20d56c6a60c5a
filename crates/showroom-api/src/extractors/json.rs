//! JSON body extractor that reports malformed bodies as `INVALID`.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use showroom_core::error::AppError;

use crate::error::ApiError;

/// A JSON request body. Syntax errors, unknown fields and a missing
/// content type all become a 400 with the standard error body.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::invalid(rejection.body_text()))?;
        Ok(Self(value))
    }
}

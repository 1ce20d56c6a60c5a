//! Identity provider trait.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::id::UserId;

/// Resolves a caller's bearer token into the authenticated user id.
#[async_trait]
pub trait IdentityProvider: Send + Sync + 'static {
    /// Resolve `token`. Fails with `Unauthorized` when it cannot be trusted.
    async fn resolve(&self, token: &str) -> AppResult<UserId>;
}

//! User repository implementation.

use std::sync::Arc;

use showroom_core::result::AppResult;
use showroom_core::traits::store::DataStore;
use showroom_core::types::UserId;
use showroom_core::types::filter::Filter;
use showroom_entity::user::User;

use super::collection::{Collection, ID_COLUMN};

/// Read access to user rows.
#[derive(Debug, Clone)]
pub struct UserRepository {
    users: Collection,
}

impl UserRepository {
    /// Create a new user repository over `collection`.
    pub fn new(store: Arc<dyn DataStore>, collection: impl Into<String>) -> Self {
        Self {
            users: Collection::new(store, collection),
        }
    }

    /// Find a user by ID.
    pub async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        self.users.first(&Filter::eq(ID_COLUMN, id)).await
    }
}

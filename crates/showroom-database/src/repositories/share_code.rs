//! Share code repository implementation.

use std::sync::Arc;

use showroom_core::result::AppResult;
use showroom_core::traits::store::DataStore;
use showroom_core::types::ShareCodeId;
use showroom_core::types::filter::Filter;
use showroom_entity::share_code::{CreateShareCode, ShareCode};

use super::collection::{Collection, new_record};

/// Repository for share code rows.
#[derive(Debug, Clone)]
pub struct ShareCodeRepository {
    codes: Collection,
}

impl ShareCodeRepository {
    /// Create a new share code repository over `collection`.
    pub fn new(store: Arc<dyn DataStore>, collection: impl Into<String>) -> Self {
        Self {
            codes: Collection::new(store, collection),
        }
    }

    /// Persist a new share code.
    pub async fn create(&self, data: &CreateShareCode) -> AppResult<ShareCode> {
        let record = new_record(data, ShareCodeId::new(), &["created_at"])?;
        self.codes.insert(record).await
    }

    /// Find a share code by its code string. When several rows carry the
    /// same code the first one in store order wins.
    pub async fn find_by_code(&self, code: &str) -> AppResult<Option<ShareCode>> {
        self.codes.first(&Filter::eq("code", code)).await
    }
}

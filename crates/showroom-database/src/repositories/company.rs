//! Company repository implementation.

use std::sync::Arc;

use showroom_core::result::AppResult;
use showroom_core::traits::store::DataStore;
use showroom_core::types::CompanyId;
use showroom_core::types::filter::Filter;
use showroom_entity::company::Company;

use super::collection::{Collection, ID_COLUMN};

/// Read access to company rows.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    companies: Collection,
}

impl CompanyRepository {
    /// Create a new company repository over `collection`.
    pub fn new(store: Arc<dyn DataStore>, collection: impl Into<String>) -> Self {
        Self {
            companies: Collection::new(store, collection),
        }
    }

    /// Find a company by ID.
    pub async fn find_by_id(&self, id: CompanyId) -> AppResult<Option<Company>> {
        self.companies.first(&Filter::eq(ID_COLUMN, id)).await
    }
}

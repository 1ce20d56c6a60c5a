//! Library repository implementation.

use std::sync::Arc;

use serde_json::json;

use showroom_core::result::AppResult;
use showroom_core::traits::store::DataStore;
use showroom_core::types::filter::Filter;
use showroom_core::types::{CompanyId, LibraryId};
use showroom_entity::library::{CreateLibrary, Library};

use super::collection::{Collection, ID_COLUMN, new_record, to_record};

/// Repository for library rows.
#[derive(Debug, Clone)]
pub struct LibraryRepository {
    libraries: Collection,
}

impl LibraryRepository {
    /// Create a new library repository over `collection`.
    pub fn new(store: Arc<dyn DataStore>, collection: impl Into<String>) -> Self {
        Self {
            libraries: Collection::new(store, collection),
        }
    }

    /// Find a library by ID.
    pub async fn find_by_id(&self, id: LibraryId) -> AppResult<Option<Library>> {
        self.libraries.first(&Filter::eq(ID_COLUMN, id)).await
    }

    /// Create a library with a fresh identity and timestamps.
    pub async fn create(&self, data: &CreateLibrary) -> AppResult<Library> {
        let record = new_record(data, LibraryId::new(), &["created_at", "updated_at"])?;
        self.libraries.insert(record).await
    }

    /// Overwrite the denormalized project counter.
    pub async fn set_project_count(
        &self,
        id: LibraryId,
        project_count: u64,
    ) -> AppResult<Option<Library>> {
        let patch = to_record(&json!({ "project_count": project_count }))?;
        let updated = self
            .libraries
            .update(&Filter::eq(ID_COLUMN, id), patch)
            .await?;
        Ok(updated.into_iter().next())
    }

    /// Delete a library row. Returns `None` when no row was affected.
    pub async fn delete(&self, id: LibraryId) -> AppResult<Option<Library>> {
        let deleted = self.libraries.delete(&Filter::eq(ID_COLUMN, id)).await?;
        Ok(deleted.into_iter().next())
    }

    /// Count libraries owned by a company.
    pub async fn count_by_company(&self, company_id: CompanyId) -> AppResult<u64> {
        self.libraries
            .count(&Filter::eq("core_company", company_id))
            .await
    }
}

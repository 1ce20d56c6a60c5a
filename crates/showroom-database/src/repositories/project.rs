//! Project repository implementation.

use std::sync::Arc;

use showroom_core::result::AppResult;
use showroom_core::traits::store::DataStore;
use showroom_core::types::filter::Filter;
use showroom_core::types::{CompanyId, LibraryId, ProjectId};
use showroom_entity::project::{CreateProject, Project};

use super::collection::{Collection, ID_COLUMN, new_record, to_record};

/// Repository for project rows.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    projects: Collection,
}

impl ProjectRepository {
    /// Create a new project repository over `collection`.
    pub fn new(store: Arc<dyn DataStore>, collection: impl Into<String>) -> Self {
        Self {
            projects: Collection::new(store, collection),
        }
    }

    /// All projects referencing a library, in store order.
    pub async fn find_by_library(&self, library_id: LibraryId) -> AppResult<Vec<Project>> {
        self.projects
            .query(&Filter::eq("core_library", library_id))
            .await
    }

    /// Create a project with a fresh identity and timestamps.
    pub async fn create(&self, data: &CreateProject) -> AppResult<Project> {
        let record = new_record(data, ProjectId::new(), &["created_at", "updated_at"])?;
        self.projects.insert(record).await
    }

    /// Re-insert a previously deleted row exactly as it was.
    pub async fn restore(&self, project: &Project) -> AppResult<Project> {
        self.projects.insert(to_record(project)?).await
    }

    /// Delete a project row. Returns `None` when no row was affected.
    pub async fn delete(&self, id: ProjectId) -> AppResult<Option<Project>> {
        let deleted = self.projects.delete(&Filter::eq(ID_COLUMN, id)).await?;
        Ok(deleted.into_iter().next())
    }

    /// Exact count of projects referencing a library.
    pub async fn count_by_library(&self, library_id: LibraryId) -> AppResult<u64> {
        self.projects
            .count(&Filter::eq("core_library", library_id))
            .await
    }

    /// Exact count of projects owned by a company.
    pub async fn count_by_company(&self, company_id: CompanyId) -> AppResult<u64> {
        self.projects
            .count(&Filter::eq("core_company", company_id))
            .await
    }
}

//! Library project counter synchronization.

use std::sync::Arc;

use tracing::{debug, warn};

use showroom_core::error::AppError;
use showroom_core::result::AppResult;
use showroom_core::types::LibraryId;
use showroom_database::repositories::{LibraryRepository, ProjectRepository};

/// Keeps `Library::project_count` in line with the project rows.
///
/// A recount reads the exact number of projects and then writes it; the
/// two calls are not atomic, so a project created or removed in between
/// leaves the counter stale until the next recount.
#[derive(Debug, Clone)]
pub struct CounterService {
    libraries: Arc<LibraryRepository>,
    projects: Arc<ProjectRepository>,
}

impl CounterService {
    /// Creates a new counter service.
    pub fn new(libraries: Arc<LibraryRepository>, projects: Arc<ProjectRepository>) -> Self {
        Self {
            libraries,
            projects,
        }
    }

    /// Counts the projects of `library_id` and persists the result on the
    /// library. Returns the new count.
    pub async fn recount_library_projects(&self, library_id: LibraryId) -> AppResult<u64> {
        let count = self.projects.count_by_library(library_id).await?;

        if self
            .libraries
            .set_project_count(library_id, count)
            .await?
            .is_none()
        {
            warn!(library_id = %library_id, "Recount target library not found");
            return Err(AppError::not_found("Library not found"));
        }

        debug!(library_id = %library_id, project_count = count, "Library project count updated");
        Ok(count)
    }
}

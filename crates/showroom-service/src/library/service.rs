//! Library deletion with its projects.

use std::sync::Arc;

use tracing::{info, warn};

use showroom_core::error::AppError;
use showroom_core::result::AppResult;
use showroom_core::types::LibraryId;
use showroom_database::repositories::{LibraryRepository, ProjectRepository};
use showroom_entity::library::Library;
use showroom_entity::project::Project;

use crate::context::RequestContext;
use crate::counter::CounterService;
use crate::saga::Saga;

/// Library lifecycle service.
#[derive(Debug, Clone)]
pub struct LibraryService {
    libraries: Arc<LibraryRepository>,
    projects: Arc<ProjectRepository>,
    counter: Arc<CounterService>,
}

impl LibraryService {
    /// Creates a new library service.
    pub fn new(
        libraries: Arc<LibraryRepository>,
        projects: Arc<ProjectRepository>,
        counter: Arc<CounterService>,
    ) -> Self {
        Self {
            libraries,
            projects,
            counter,
        }
    }

    /// Recounts the projects of a library on demand.
    pub async fn recount_projects(&self, library_id: LibraryId) -> AppResult<u64> {
        self.counter.recount_library_projects(library_id).await
    }

    /// Deletes every project of the library, then the library itself.
    ///
    /// Children are removed one at a time. The first failing delete stops
    /// the loop, the projects removed so far are re-inserted, and the
    /// library is recounted. If the library row is already gone once the
    /// children are removed, the result is `NotFound` and the removals
    /// stand.
    pub async fn delete_library(
        &self,
        ctx: &RequestContext,
        library_id: LibraryId,
    ) -> AppResult<Library> {
        let children = self.projects.find_by_library(library_id).await?;

        let mut saga = Saga::new("delete_library");

        let counter = Arc::clone(&self.counter);
        saga.on_rollback("recount restored library", async move {
            counter.recount_library_projects(library_id).await.map(|_| ())
        });

        for child in &children {
            let projects = Arc::clone(&self.projects);
            saga.step(
                "delete project",
                self.projects.delete(child.id),
                move |deleted: &Option<Project>| {
                    let row = deleted.clone();
                    async move {
                        if let Some(row) = row {
                            projects.restore(&row).await?;
                        }
                        Ok::<(), AppError>(())
                    }
                },
            )
            .await?;
        }

        let deleted = saga
            .run("delete library", self.libraries.delete(library_id))
            .await?;
        saga.commit();

        let Some(library) = deleted else {
            warn!(
                user_id = %ctx.user_id,
                library_id = %library_id,
                projects_removed = children.len(),
                "Library vanished before its delete"
            );
            return Err(AppError::not_found("Library not found"));
        };

        info!(
            user_id = %ctx.user_id,
            library_id = %library_id,
            projects_removed = children.len(),
            "Library deleted"
        );

        Ok(library)
    }
}

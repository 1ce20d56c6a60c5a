//! Project service.

use std::sync::Arc;

use tracing::{info, warn};

use showroom_core::error::{AppError, ErrorKind};
use showroom_core::result::AppResult;
use showroom_core::types::{LibraryId, ProjectId};
use showroom_database::repositories::{LibraryRepository, ProjectRepository};
use showroom_entity::project::{CreateProject, Project};

use crate::context::RequestContext;
use crate::counter::CounterService;

/// Creates and removes projects, keeping the parent library's counter in
/// step.
#[derive(Debug, Clone)]
pub struct ProjectService {
    projects: Arc<ProjectRepository>,
    libraries: Arc<LibraryRepository>,
    counter: Arc<CounterService>,
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(
        projects: Arc<ProjectRepository>,
        libraries: Arc<LibraryRepository>,
        counter: Arc<CounterService>,
    ) -> Self {
        Self {
            projects,
            libraries,
            counter,
        }
    }

    /// Lists the projects of a library in store order.
    pub async fn list_library_projects(&self, library_id: LibraryId) -> AppResult<Vec<Project>> {
        self.projects.find_by_library(library_id).await
    }

    /// Creates a project owned by the caller and recounts its library.
    pub async fn create_project(
        &self,
        ctx: &RequestContext,
        mut data: CreateProject,
    ) -> AppResult<Project> {
        if data.name.trim().is_empty() {
            return Err(AppError::invalid("Project name is required"));
        }

        self.libraries
            .find_by_id(data.core_library)
            .await?
            .ok_or_else(|| AppError::not_found("Library not found"))?;

        data.created_by = Some(ctx.user_id);
        let project = self.projects.create(&data).await?;
        self.counter
            .recount_library_projects(project.core_library)
            .await?;

        info!(
            user_id = %ctx.user_id,
            project_id = %project.id,
            library_id = %project.core_library,
            "Project created"
        );

        Ok(project)
    }

    /// Deletes a project and recounts its former library.
    ///
    /// A project whose library is already gone is still deleted; the
    /// recount is skipped in that case.
    pub async fn delete_project(
        &self,
        ctx: &RequestContext,
        project_id: ProjectId,
    ) -> AppResult<Project> {
        let project = self
            .projects
            .delete(project_id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))?;

        match self
            .counter
            .recount_library_projects(project.core_library)
            .await
        {
            Ok(_) => {}
            Err(e) if e.is(ErrorKind::NotFound) => {
                warn!(
                    project_id = %project_id,
                    library_id = %project.core_library,
                    "Deleted project referenced a missing library"
                );
            }
            Err(e) => return Err(e),
        }

        info!(
            user_id = %ctx.user_id,
            project_id = %project_id,
            library_id = %project.core_library,
            "Project deleted"
        );

        Ok(project)
    }
}

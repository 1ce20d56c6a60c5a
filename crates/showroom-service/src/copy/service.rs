//! Share code redemption: deep-clones a library and its projects.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use showroom_core::error::AppError;
use showroom_core::result::AppResult;
use showroom_core::types::{LibraryId, UserId};
use showroom_database::repositories::{
    LibraryRepository, ProjectRepository, ShareCodeRepository, UserRepository,
};
use showroom_entity::library::{CreateLibrary, Library};
use showroom_entity::project::{CreateProject, Project};

use crate::context::RequestContext;
use crate::counter::CounterService;
use crate::saga::Saga;

/// Redeems share codes into personal library copies.
///
/// A redemption runs as a saga: if any write fails part-way, the projects
/// and the library created so far are deleted again before the error is
/// returned.
#[derive(Debug, Clone)]
pub struct CopyService {
    share_codes: Arc<ShareCodeRepository>,
    libraries: Arc<LibraryRepository>,
    projects: Arc<ProjectRepository>,
    users: Arc<UserRepository>,
    counter: Arc<CounterService>,
}

impl CopyService {
    /// Creates a new copy service.
    pub fn new(
        share_codes: Arc<ShareCodeRepository>,
        libraries: Arc<LibraryRepository>,
        projects: Arc<ProjectRepository>,
        users: Arc<UserRepository>,
        counter: Arc<CounterService>,
    ) -> Self {
        Self {
            share_codes,
            libraries,
            projects,
            users,
            counter,
        }
    }

    /// Redeems `code` for the caller, returning the new library.
    ///
    /// Codes are not consumed: redeeming the same code twice yields two
    /// independent copies.
    pub async fn redeem_code(&self, ctx: &RequestContext, code: &str) -> AppResult<Library> {
        let share_code = self
            .share_codes
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Code not found"))?;

        if share_code.is_expired_at(Utc::now()) {
            warn!(
                user_id = %ctx.user_id,
                share_code_id = %share_code.id,
                ended_at = %share_code.ended_at,
                "Expired share code redeemed"
            );
            return Err(AppError::expired("Code expired"));
        }

        let source = self
            .libraries
            .find_by_id(share_code.core_library)
            .await?
            .ok_or_else(|| AppError::not_found("Library not found"))?;

        let owner = self
            .users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?
            .id;

        let mut saga = Saga::new("redeem_code");

        let libraries = Arc::clone(&self.libraries);
        let library_data = library_copy(&source, owner);
        let mut library = saga
            .step(
                "create library copy",
                self.libraries.create(&library_data),
                move |created: &Library| {
                    let id = created.id;
                    async move { libraries.delete(id).await.map(|_| ()) }
                },
            )
            .await?;

        let source_projects = saga
            .run("fetch source projects", self.projects.find_by_library(source.id))
            .await?;

        for source_project in &source_projects {
            let projects = Arc::clone(&self.projects);
            let project_data = project_copy(source_project, library.id, owner);
            saga.step(
                "create project copy",
                self.projects.create(&project_data),
                move |created: &Project| {
                    let id = created.id;
                    async move { projects.delete(id).await.map(|_| ()) }
                },
            )
            .await?;

            let count = saga
                .run(
                    "recount library projects",
                    self.counter.recount_library_projects(library.id),
                )
                .await?;
            library.project_count = count as i64;
        }

        let steps = saga.commit();

        info!(
            user_id = %owner,
            source_library_id = %source.id,
            library_id = %library.id,
            projects = source_projects.len(),
            steps,
            "Library copied from share code"
        );

        Ok(library)
    }
}

/// The personal copy of `source` owned by `owner`. The project counter is
/// carried over as-is.
fn library_copy(source: &Library, owner: UserId) -> CreateLibrary {
    CreateLibrary {
        name: source.name.clone(),
        description: source.description.clone(),
        core_company: None,
        belongs_to: Some(owner),
        is_personal: true,
        is_copy: true,
        project_count: source.project_count,
        logo_url: source.logo_url.clone(),
        banner_url: source.banner_url.clone(),
        created_by: Some(owner),
    }
}

/// A copy of `source` under `library_id`, without identity or company.
fn project_copy(source: &Project, library_id: LibraryId, owner: UserId) -> CreateProject {
    CreateProject {
        core_library: library_id,
        core_company: None,
        name: source.name.clone(),
        description: source.description.clone(),
        logo_url: source.logo_url.clone(),
        illustrations: source.illustrations.clone(),
        apk_url: source.apk_url.clone(),
        is_copy: true,
        is_personal: true,
        created_by: Some(owner),
        extra: source.extra.clone(),
    }
}

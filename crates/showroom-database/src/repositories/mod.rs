//! Repository implementations, one per record collection.

pub mod collection;
pub mod company;
pub mod library;
pub mod project;
pub mod share_code;
pub mod user;

use std::sync::Arc;

use showroom_core::config::CollectionsConfig;
use showroom_core::traits::store::DataStore;

pub use collection::Collection;
pub use company::CompanyRepository;
pub use library::LibraryRepository;
pub use project::ProjectRepository;
pub use share_code::ShareCodeRepository;
pub use user::UserRepository;

/// Every repository, built over one store with the configured collection names.
#[derive(Debug, Clone)]
pub struct Repositories {
    /// Users.
    pub users: Arc<UserRepository>,
    /// Companies.
    pub companies: Arc<CompanyRepository>,
    /// Libraries.
    pub libraries: Arc<LibraryRepository>,
    /// Projects.
    pub projects: Arc<ProjectRepository>,
    /// Share codes.
    pub share_codes: Arc<ShareCodeRepository>,
}

impl Repositories {
    /// Build all repositories over `store`.
    pub fn new(store: Arc<dyn DataStore>, collections: &CollectionsConfig) -> Self {
        Self {
            users: Arc::new(UserRepository::new(
                Arc::clone(&store),
                collections.users.clone(),
            )),
            companies: Arc::new(CompanyRepository::new(
                Arc::clone(&store),
                collections.companies.clone(),
            )),
            libraries: Arc::new(LibraryRepository::new(
                Arc::clone(&store),
                collections.libraries.clone(),
            )),
            projects: Arc::new(ProjectRepository::new(
                Arc::clone(&store),
                collections.projects.clone(),
            )),
            share_codes: Arc::new(ShareCodeRepository::new(
                store,
                collections.share_codes.clone(),
            )),
        }
    }
}

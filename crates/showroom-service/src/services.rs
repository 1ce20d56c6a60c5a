//! Service wiring.

use std::sync::Arc;

use showroom_database::Repositories;

use crate::company::CompanyService;
use crate::copy::CopyService;
use crate::counter::CounterService;
use crate::library::LibraryService;
use crate::project::ProjectService;
use crate::share::{CodeGenerator, ShareCodeService};

/// Every service of the application, built over one set of repositories.
#[derive(Debug, Clone)]
pub struct Services {
    /// Share code issuance.
    pub share_codes: Arc<ShareCodeService>,
    /// Share code redemption.
    pub copies: Arc<CopyService>,
    /// Project counter maintenance.
    pub counter: Arc<CounterService>,
    /// Library lifecycle.
    pub libraries: Arc<LibraryService>,
    /// Project lifecycle.
    pub projects: Arc<ProjectService>,
    /// Company reads and statistics.
    pub companies: Arc<CompanyService>,
}

impl Services {
    /// Build all services.
    pub fn new(repos: &Repositories) -> Self {
        let counter = Arc::new(CounterService::new(
            Arc::clone(&repos.libraries),
            Arc::clone(&repos.projects),
        ));

        Self {
            share_codes: Arc::new(ShareCodeService::new(
                Arc::clone(&repos.share_codes),
                Arc::new(CodeGenerator::new()),
            )),
            copies: Arc::new(CopyService::new(
                Arc::clone(&repos.share_codes),
                Arc::clone(&repos.libraries),
                Arc::clone(&repos.projects),
                Arc::clone(&repos.users),
                Arc::clone(&counter),
            )),
            libraries: Arc::new(LibraryService::new(
                Arc::clone(&repos.libraries),
                Arc::clone(&repos.projects),
                Arc::clone(&counter),
            )),
            projects: Arc::new(ProjectService::new(
                Arc::clone(&repos.projects),
                Arc::clone(&repos.libraries),
                Arc::clone(&counter),
            )),
            companies: Arc::new(CompanyService::new(
                Arc::clone(&repos.companies),
                Arc::clone(&repos.libraries),
                Arc::clone(&repos.projects),
            )),
            counter,
        }
    }
}

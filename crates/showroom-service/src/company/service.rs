//! Company service.

use std::sync::Arc;

use tracing::debug;

use showroom_core::error::AppError;
use showroom_core::result::AppResult;
use showroom_core::types::CompanyId;
use showroom_database::repositories::{CompanyRepository, LibraryRepository, ProjectRepository};
use showroom_entity::company::{CompanyStats, CompanyWithStats};

/// Reads companies together with their derived statistics.
#[derive(Debug, Clone)]
pub struct CompanyService {
    companies: Arc<CompanyRepository>,
    libraries: Arc<LibraryRepository>,
    projects: Arc<ProjectRepository>,
}

impl CompanyService {
    /// Creates a new company service.
    pub fn new(
        companies: Arc<CompanyRepository>,
        libraries: Arc<LibraryRepository>,
        projects: Arc<ProjectRepository>,
    ) -> Self {
        Self {
            companies,
            libraries,
            projects,
        }
    }

    /// Counts the company's projects and libraries concurrently.
    ///
    /// Both counts must succeed; there is no partial result.
    pub async fn statistics(&self, company_id: CompanyId) -> AppResult<CompanyStats> {
        let (project_count, library_count) = tokio::try_join!(
            self.projects.count_by_company(company_id),
            self.libraries.count_by_company(company_id),
        )?;

        debug!(
            company_id = %company_id,
            project_count,
            library_count,
            "Company statistics computed"
        );

        Ok(CompanyStats {
            project_count,
            library_count,
        })
    }

    /// Fetches a company with its statistics embedded.
    pub async fn get_company(&self, company_id: CompanyId) -> AppResult<CompanyWithStats> {
        let company = self
            .companies
            .find_by_id(company_id)
            .await?
            .ok_or_else(|| AppError::not_found("Company not found"))?;

        let stats = self.statistics(company_id).await?;
        Ok(CompanyWithStats { company, stats })
    }
}

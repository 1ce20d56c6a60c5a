//! Derived company aggregates.

use serde::{Deserialize, Serialize};

use super::model::Company;

/// Project and library counts for one company. Computed on demand, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyStats {
    /// Number of projects whose `core_company` is the company.
    #[serde(rename = "projectCpt")]
    pub project_count: u64,
    /// Number of libraries whose `core_company` is the company.
    #[serde(rename = "libraryCpt")]
    pub library_count: u64,
}

/// A company row with its statistics embedded under `stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyWithStats {
    /// The company row.
    #[serde(flatten)]
    pub company: Company,
    /// Live aggregates.
    pub stats: CompanyStats,
}

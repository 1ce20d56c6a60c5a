//! Collection (table) names consumed by the repositories.

use serde::{Deserialize, Serialize};

/// Names of every record collection the core reads or writes.
///
/// Injected into each repository at construction instead of being looked
/// up from module-level constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionsConfig {
    /// User records.
    #[serde(default = "default_users")]
    pub users: String,
    /// Company records.
    #[serde(default = "default_companies")]
    pub companies: String,
    /// Library records.
    #[serde(default = "default_libraries")]
    pub libraries: String,
    /// Project records.
    #[serde(default = "default_projects")]
    pub projects: String,
    /// Share code records.
    #[serde(default = "default_share_codes")]
    pub share_codes: String,
}

impl Default for CollectionsConfig {
    fn default() -> Self {
        Self {
            users: default_users(),
            companies: default_companies(),
            libraries: default_libraries(),
            projects: default_projects(),
            share_codes: default_share_codes(),
        }
    }
}

fn default_users() -> String {
    "core_user".to_string()
}

fn default_companies() -> String {
    "core_company".to_string()
}

fn default_libraries() -> String {
    "core_library".to_string()
}

fn default_projects() -> String {
    "core_project".to_string()
}

fn default_share_codes() -> String {
    "copy_library".to_string()
}

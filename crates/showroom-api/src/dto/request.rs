//! Request DTOs.

use serde::{Deserialize, Serialize};

use showroom_core::types::{CompanyId, LibraryId};
use showroom_entity::project::CreateProject;

/// Create project request body. Only the listed fields are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateProjectRequest {
    /// Owning library.
    pub core_library: LibraryId,
    /// Owning company.
    #[serde(default)]
    pub core_company: Option<CompanyId>,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Logo image URL.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Illustration image URLs.
    #[serde(default)]
    pub illustrations: Option<Vec<String>>,
    /// Downloadable package URL.
    #[serde(default)]
    pub apk_url: Option<String>,
    /// Whether the project belongs to a personal library.
    #[serde(default)]
    pub is_personal: bool,
}

impl From<CreateProjectRequest> for CreateProject {
    fn from(req: CreateProjectRequest) -> Self {
        CreateProject {
            core_library: req.core_library,
            core_company: req.core_company,
            name: req.name,
            description: req.description,
            logo_url: req.logo_url,
            illustrations: req.illustrations,
            apk_url: req.apk_url,
            is_copy: false,
            is_personal: req.is_personal,
            created_by: None,
            extra: serde_json::Map::new(),
        }
    }
}

//! Project entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use showroom_core::types::{CompanyId, LibraryId, ProjectId, UserId};

/// A unit of content belonging to exactly one library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier.
    #[serde(rename = "uuid")]
    pub id: ProjectId,
    /// Library this project belongs to.
    pub core_library: LibraryId,
    /// Owning company (None for personal copies).
    pub core_company: Option<CompanyId>,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Logo image URL.
    pub logo_url: Option<String>,
    /// Illustration image URLs.
    pub illustrations: Option<Vec<String>>,
    /// Downloadable package URL.
    pub apk_url: Option<String>,
    /// Whether the project was produced by cloning a library.
    #[serde(default)]
    pub is_copy: bool,
    /// Whether the project belongs to a personal library.
    #[serde(default)]
    pub is_personal: bool,
    /// User who created the project.
    pub created_by: Option<UserId>,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
    /// When the project was last updated.
    pub updated_at: DateTime<Utc>,
    /// Columns not modelled above, carried through verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Data required to create a new project.
///
/// Identity and timestamps are assigned by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProject {
    /// Owning library.
    pub core_library: LibraryId,
    /// Owning company.
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
    /// Copy flag.
    #[serde(default)]
    pub is_copy: bool,
    /// Personal flag.
    #[serde(default)]
    pub is_personal: bool,
    /// Creating user.
    #[serde(default)]
    pub created_by: Option<UserId>,
    /// Additional columns.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

//! Library entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use showroom_core::types::{CompanyId, LibraryId, UserId};

/// A named content container owned by a company or an individual user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Library {
    /// Unique library identifier.
    #[serde(rename = "uuid")]
    pub id: LibraryId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Owning company (None for personal libraries).
    pub core_company: Option<CompanyId>,
    /// Owning user.
    pub belongs_to: Option<UserId>,
    /// Whether the library belongs to an individual rather than a company.
    #[serde(default)]
    pub is_personal: bool,
    /// Whether the library was produced by redeeming a share code.
    #[serde(default)]
    pub is_copy: bool,
    /// Denormalized number of projects referencing this library.
    #[serde(default)]
    pub project_count: i64,
    /// Logo image URL.
    pub logo_url: Option<String>,
    /// Banner image URL.
    pub banner_url: Option<String>,
    /// User who created the library.
    pub created_by: Option<UserId>,
    /// When the library was created.
    pub created_at: DateTime<Utc>,
    /// When the library was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new library.
///
/// Identity and timestamps are assigned by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLibrary {
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Owning company.
    pub core_company: Option<CompanyId>,
    /// Owning user.
    pub belongs_to: Option<UserId>,
    /// Personal library flag.
    pub is_personal: bool,
    /// Copy flag.
    pub is_copy: bool,
    /// Initial project counter value.
    pub project_count: i64,
    /// Logo image URL.
    pub logo_url: Option<String>,
    /// Banner image URL.
    pub banner_url: Option<String>,
    /// Creating user.
    pub created_by: Option<UserId>,
}

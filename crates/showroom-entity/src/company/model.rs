//! Company entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use showroom_core::types::{CompanyId, UserId};

/// An organization owning libraries and projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Unique company identifier.
    #[serde(rename = "uuid")]
    pub id: CompanyId,
    /// Display name.
    pub name: String,
    /// Join code members enter to attach themselves to the company.
    pub code: Option<String>,
    /// Owning user.
    pub uuid_user: Option<UserId>,
    /// Logo image URL.
    pub logo_url: Option<String>,
    /// When the company was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the company was last updated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

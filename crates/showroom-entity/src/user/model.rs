//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use showroom_core::types::{CompanyId, UserId};

/// A registered user. The id matches the identity provider's subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    #[serde(rename = "uuid")]
    pub id: UserId,
    /// Given name.
    pub name: Option<String>,
    /// Family name.
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Company the user belongs to.
    pub core_company: Option<CompanyId>,
    /// When the user was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

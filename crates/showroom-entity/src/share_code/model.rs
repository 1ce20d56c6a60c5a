//! Share code entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use showroom_core::types::{LibraryId, ShareCodeId};

/// A short-lived, human-enterable code authorizing one library clone.
///
/// Rows are never mutated after creation; a code stops working only once
/// `ended_at` has passed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareCode {
    /// Unique row identifier.
    #[serde(rename = "uuid")]
    pub id: ShareCodeId,
    /// The library this code clones.
    pub core_library: LibraryId,
    /// The code users type in.
    pub code: String,
    /// Expiry instant.
    pub ended_at: DateTime<Utc>,
    /// When the code was issued.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ShareCode {
    /// Whether the code has expired at `now`. A code is still valid at the
    /// exact `ended_at` instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.ended_at < now
    }
}

/// Data required to create a new share code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateShareCode {
    /// The library the code clones.
    pub core_library: LibraryId,
    /// The generated code.
    pub code: String,
    /// Expiry instant.
    pub ended_at: DateTime<Utc>,
}

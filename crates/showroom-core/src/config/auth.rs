//! Bearer token validation configuration.

use serde::{Deserialize, Serialize};

/// Settings for validating identity-provider issued access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared HMAC-SHA256 secret the identity provider signs tokens with.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Expected `aud` claim. `None` disables the audience check.
    #[serde(default = "default_audience")]
    pub audience: Option<String>,
    /// Allowed clock skew in seconds.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            audience: default_audience(),
            leeway_seconds: default_leeway(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_audience() -> Option<String> {
    Some("authenticated".to_string())
}

fn default_leeway() -> u64 {
    5
}

//! Share code generation.

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Number of characters in a share code.
pub const SHARE_CODE_LENGTH: usize = 10;

/// Days a share code stays redeemable after issuance.
pub const SHARE_CODE_VALIDITY_DAYS: i64 = 2;

/// Generates human-enterable share codes.
///
/// Codes are drawn uniformly from `[A-Za-z0-9]`. They are not secrets and
/// collisions are not checked for.
#[derive(Debug, Clone)]
pub struct CodeGenerator;

impl CodeGenerator {
    /// Creates a new code generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates a fresh share code.
    pub fn generate(&self) -> String {
        rand::thread_rng()
            .sample_iter(Alphanumeric)
            .take(SHARE_CODE_LENGTH)
            .map(char::from)
            .collect()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

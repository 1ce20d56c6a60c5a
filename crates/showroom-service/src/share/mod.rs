//! Share code generation and issuance.

pub mod code;
pub mod service;

pub use code::{CodeGenerator, SHARE_CODE_LENGTH, SHARE_CODE_VALIDITY_DAYS};
pub use service::ShareCodeService;

//! # showroom-core
//!
//! Core crate for Showroom. Contains the configuration schema, typed
//! identifiers, equality filters, the data-store and identity seams, and
//! the unified error system.
//!
//! This crate has **no** internal dependencies on other Showroom crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;

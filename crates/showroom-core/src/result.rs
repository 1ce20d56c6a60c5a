//! Convenience result type alias for Showroom.

use crate::error::AppError;

/// A specialized `Result` type for Showroom operations.
///
/// Every operation of the duplication and counter subsystem returns this
/// type; there is no second error channel.
pub type AppResult<T> = Result<T, AppError>;

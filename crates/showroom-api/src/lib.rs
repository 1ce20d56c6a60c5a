//! # showroom-api
//!
//! HTTP API layer for Showroom built on Axum.
//!
//! Exposes the share code, library, project, and company endpoints under
//! `/api`, resolves bearer tokens into request contexts, and maps
//! [`showroom_core::AppError`] onto HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod identity;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use identity::JwtIdentityProvider;
pub use router::build_router;
pub use state::AppState;

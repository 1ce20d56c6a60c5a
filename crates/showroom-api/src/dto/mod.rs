//! Data transfer objects.

pub mod request;
pub mod response;

pub use request::CreateProjectRequest;
pub use response::{ApiResponse, HealthResponse, ProjectCountResponse};

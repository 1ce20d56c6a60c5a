//! Company domain entities.

pub mod model;
pub mod stats;

pub use model::Company;
pub use stats::{CompanyStats, CompanyWithStats};

//! Company lookups and aggregate statistics.

pub mod service;

pub use service::CompanyService;

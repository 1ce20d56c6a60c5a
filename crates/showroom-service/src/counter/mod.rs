//! Denormalized counter maintenance.

pub mod service;

pub use service::CounterService;

//! Library cloning through share codes.

pub mod service;

pub use service::CopyService;

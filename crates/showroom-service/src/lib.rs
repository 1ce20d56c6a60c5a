//! # showroom-service
//!
//! Business logic service layer for Showroom: issuing and redeeming
//! library share codes, keeping denormalized counters in sync, and
//! cascading library deletes.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references. Multi-step mutations run
//! through [`saga::Saga`] so a failure part-way undoes the steps already
//! applied.

pub mod company;
pub mod context;
pub mod copy;
pub mod counter;
pub mod library;
pub mod project;
pub mod saga;
pub mod services;
pub mod share;

pub use company::CompanyService;
pub use context::RequestContext;
pub use copy::CopyService;
pub use counter::CounterService;
pub use library::LibraryService;
pub use project::ProjectService;
pub use saga::Saga;
pub use services::Services;
pub use share::{CodeGenerator, ShareCodeService};

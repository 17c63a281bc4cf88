//! `solidshop-core` — shared building blocks for the SolidShop domain crates.
//!
//! This crate contains **pure domain** primitives plus the output collaborator
//! (`Reporter`) every reporting operation writes through.

pub mod entity;
pub mod error;
pub mod id;
pub mod report;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use report::{ConsoleReporter, RecordingReporter, Reporter, SharedReporter};
pub use value_object::ValueObject;

//! Invoicing domain module.
//!
//! Consumers that only need to print depend on [`Printable`] and nothing else
//! (interface segregation).

pub mod invoice;

pub use invoice::{Invoice, Printable};

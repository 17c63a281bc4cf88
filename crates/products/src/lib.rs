//! Products domain module.
//!
//! `Product` only describes a product; `ProductRepository` is the one place that
//! knows how a product gets "saved". Keeping the two apart is the single
//! responsibility half of the sample.

pub mod product;
pub mod repository;

pub use product::Product;
pub use repository::ProductRepository;

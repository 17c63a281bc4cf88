//! Sales module: order placement.
//!
//! An [`Order`] depends on the `NotificationService` abstraction, never on a
//! concrete channel; the caller decides which service it gets (dependency
//! inversion).

pub mod order;

pub use order::Order;

//! Payments domain module.
//!
//! Every payment method can stand in for [`Payment`]: callers holding a
//! `&dyn Payment` get the method-specific behavior without knowing which
//! method they hold (Liskov substitution).

pub mod payment;

pub use payment::{BasicPayment, CreditCardPayment, PayPalPayment, Payment};

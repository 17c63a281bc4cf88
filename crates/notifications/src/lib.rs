//! Notifications module.
//!
//! [`NotificationService`] is the abstraction order placement depends on;
//! email and SMS are interchangeable implementations of it.

pub mod email;
pub mod service;
pub mod sms;

pub use email::EmailNotificationService;
pub use service::NotificationService;
pub use sms::SmsNotificationService;

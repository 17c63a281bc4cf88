//! Email notifications (reported, never actually delivered).

use solidshop_core::SharedReporter;

use crate::service::NotificationService;

#[derive(Clone)]
pub struct EmailNotificationService {
    reporter: SharedReporter,
}

impl EmailNotificationService {
    pub fn new(reporter: SharedReporter) -> Self {
        Self { reporter }
    }
}

impl NotificationService for EmailNotificationService {
    fn send_notification(&self, message: &str) {
        tracing::debug!(channel = "email", "sending notification");
        self.reporter.report(&format!("Email sent: {message}"));
    }
}

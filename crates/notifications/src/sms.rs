//! SMS notifications (reported, never actually delivered).

use solidshop_core::SharedReporter;

use crate::service::NotificationService;

#[derive(Clone)]
pub struct SmsNotificationService {
    reporter: SharedReporter,
}

impl SmsNotificationService {
    pub fn new(reporter: SharedReporter) -> Self {
        Self { reporter }
    }
}

impl NotificationService for SmsNotificationService {
    fn send_notification(&self, message: &str) {
        tracing::debug!(channel = "sms", "sending notification");
        self.reporter.report(&format!("SMS sent: {message}"));
    }
}

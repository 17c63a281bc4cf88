/// Sends a notification message.
///
/// Fire-and-forget: there is no acknowledgement and no failure signaling.
pub trait NotificationService: Send + Sync {
    fn send_notification(&self, message: &str);
}

use solidshop_core::SharedReporter;
use solidshop_notifications::NotificationService;
use solidshop_products::Product;

/// Places orders and notifies through whatever service it was given.
///
/// The notification service is borrowed: the caller owns it and it must
/// outlive the order.
pub struct Order<'a> {
    notification_service: &'a dyn NotificationService,
    reporter: SharedReporter,
}

impl<'a> Order<'a> {
    pub fn new(notification_service: &'a dyn NotificationService, reporter: SharedReporter) -> Self {
        Self {
            notification_service,
            reporter,
        }
    }

    /// Report the order, then send the notification for it.
    pub fn place_order(&self, product: &Product) {
        tracing::debug!(product_id = %product.id_typed(), "placing order");
        self.reporter
            .report(&format!("Order placed for: {}", product.name()));
        self.notification_service
            .send_notification(&format!("Order placed for {}", product.name()));
    }
}

impl core::fmt::Debug for Order<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Order").finish_non_exhaustive()
    }
}

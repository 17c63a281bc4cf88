//! Fixed-sequence walkthrough of the SolidShop components.
//!
//! One step per principle, in order: save a product, price it with two
//! discounts, pay through two methods, print an invoice, place an order.

use solidshop_core::SharedReporter;
use solidshop_invoicing::{Invoice, Printable};
use solidshop_notifications::{EmailNotificationService, NotificationService};
use solidshop_payments::{CreditCardPayment, PayPalPayment, Payment};
use solidshop_pricing::{Discount, FixedAmountDiscount, PercentageDiscount};
use solidshop_products::{Product, ProductRepository};
use solidshop_sales::Order;

/// List price every discount in the walkthrough starts from.
pub const LIST_PRICE: f64 = 1000.0;

/// Run the whole walkthrough, writing every report line to `reporter`.
pub fn run(reporter: SharedReporter) {
    let product = Product::new(1, "Laptop");
    tracing::info!(product_id = %product.id_typed(), "starting walkthrough");

    ProductRepository::new(reporter.clone()).save(&product);

    let discounts: [&dyn Discount; 2] = [
        &PercentageDiscount::new(10.0),
        &FixedAmountDiscount::new(200.0),
    ];
    let mut price = LIST_PRICE;
    for discount in discounts {
        price = discount.apply(LIST_PRICE);
        reporter.report(&format!("Discounted Price: {price:?}"));
    }

    let payments: [Box<dyn Payment>; 2] = [
        Box::new(CreditCardPayment::new(reporter.clone())),
        Box::new(PayPalPayment::new(reporter.clone())),
    ];
    for payment in &payments {
        payment.pay(price);
    }

    let invoice: &dyn Printable = &Invoice::new(reporter.clone());
    invoice.print_invoice();

    let email = EmailNotificationService::new(reporter.clone());
    let notifications: &dyn NotificationService = &email;
    Order::new(notifications, reporter).place_order(&product);

    tracing::info!("walkthrough finished");
}

use solidshop_core::{Reporter, SharedReporter};

/// A way of paying an amount.
///
/// The provided `pay` reports a generic payment; methods override it with their
/// own wording. Paying never fails and returns nothing.
pub trait Payment: Send + Sync {
    /// Where this payment reports to.
    fn reporter(&self) -> &dyn Reporter;

    fn pay(&self, amount: f64) {
        tracing::debug!(amount, method = "generic", "payment");
        self.reporter().report(&format!("Paid: {amount:?}"));
    }
}

/// Payment with no particular method; uses the provided behavior as-is.
#[derive(Clone)]
pub struct BasicPayment {
    reporter: SharedReporter,
}

impl BasicPayment {
    pub fn new(reporter: SharedReporter) -> Self {
        Self { reporter }
    }
}

impl Payment for BasicPayment {
    fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }
}

#[derive(Clone)]
pub struct CreditCardPayment {
    reporter: SharedReporter,
}

impl CreditCardPayment {
    pub fn new(reporter: SharedReporter) -> Self {
        Self { reporter }
    }
}

impl Payment for CreditCardPayment {
    fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    fn pay(&self, amount: f64) {
        tracing::debug!(amount, method = "credit_card", "payment");
        self.reporter
            .report(&format!("Paid with Credit Card: {amount:?}"));
    }
}

#[derive(Clone)]
pub struct PayPalPayment {
    reporter: SharedReporter,
}

impl PayPalPayment {
    pub fn new(reporter: SharedReporter) -> Self {
        Self { reporter }
    }
}

impl Payment for PayPalPayment {
    fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    fn pay(&self, amount: f64) {
        tracing::debug!(amount, method = "paypal", "payment");
        self.reporter.report(&format!("Paid with PayPal: {amount:?}"));
    }
}

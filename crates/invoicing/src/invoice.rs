use solidshop_core::SharedReporter;

/// Something that can be printed as an invoice.
pub trait Printable: Send + Sync {
    fn print_invoice(&self);
}

#[derive(Clone)]
pub struct Invoice {
    reporter: SharedReporter,
}

impl Invoice {
    pub fn new(reporter: SharedReporter) -> Self {
        Self { reporter }
    }
}

impl Printable for Invoice {
    fn print_invoice(&self) {
        tracing::debug!("printing invoice");
        self.reporter.report("Invoice printed.");
    }
}

impl core::fmt::Debug for Invoice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Invoice").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solidshop_core::RecordingReporter;
    use std::sync::Arc;

    fn print_all(printables: &[&dyn Printable]) {
        for p in printables {
            p.print_invoice();
        }
    }

    #[test]
    fn print_invoice_reports_fixed_confirmation() {
        let reporter = Arc::new(RecordingReporter::new());
        Invoice::new(reporter.clone()).print_invoice();
        assert_eq!(reporter.lines(), vec!["Invoice printed."]);
    }

    #[test]
    fn consumers_only_need_the_printable_capability() {
        let reporter = Arc::new(RecordingReporter::new());
        let invoice = Invoice::new(reporter.clone());

        print_all(&[&invoice, &invoice]);

        assert_eq!(reporter.lines(), vec!["Invoice printed.", "Invoice printed."]);
    }
}

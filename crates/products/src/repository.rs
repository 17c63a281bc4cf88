use solidshop_core::SharedReporter;

use crate::product::Product;

/// Stand-in repository: "saving" always succeeds and is only reported.
///
/// There is no storage medium behind it.
#[derive(Clone)]
pub struct ProductRepository {
    reporter: SharedReporter,
}

impl ProductRepository {
    pub fn new(reporter: SharedReporter) -> Self {
        Self { reporter }
    }

    pub fn save(&self, product: &Product) {
        tracing::debug!(product_id = %product.id_typed(), "saving product");
        self.reporter
            .report(&format!("Product saved: {}", product.name()));
    }
}

impl core::fmt::Debug for ProductRepository {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProductRepository").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solidshop_core::RecordingReporter;
    use std::sync::Arc;

    #[test]
    fn save_reports_product_name() {
        let reporter = Arc::new(RecordingReporter::new());
        let repository = ProductRepository::new(reporter.clone());

        repository.save(&Product::new(1, "Laptop"));

        assert_eq!(reporter.lines(), vec!["Product saved: Laptop"]);
    }

    #[test]
    fn every_save_emits_exactly_one_line() {
        let reporter = Arc::new(RecordingReporter::new());
        let repository = ProductRepository::new(reporter.clone());

        repository.save(&Product::new(1, "Laptop"));
        repository.save(&Product::new(1, "Laptop"));
        repository.save(&Product::new(2, "Mouse"));

        assert_eq!(
            reporter.lines(),
            vec![
                "Product saved: Laptop",
                "Product saved: Laptop",
                "Product saved: Mouse",
            ]
        );
    }
}

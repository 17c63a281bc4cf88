use serde::{Deserialize, Serialize};

use solidshop_core::ValueObject;

/// Turns a price into a discounted price.
///
/// `apply` is pure and total over `f64`. Results are not clamped: a discount
/// larger than the price produces a negative price.
pub trait Discount: Send + Sync {
    fn apply(&self, price: f64) -> f64;
}

/// Takes a percentage off the price (`10.0` means 10%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageDiscount {
    percentage: f64,
}

impl PercentageDiscount {
    pub const fn new(percentage: f64) -> Self {
        Self { percentage }
    }

    pub const fn percentage(&self) -> f64 {
        self.percentage
    }
}

impl ValueObject for PercentageDiscount {}

impl Discount for PercentageDiscount {
    fn apply(&self, price: f64) -> f64 {
        price - price * (self.percentage / 100.0)
    }
}

/// Takes a fixed amount off the price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedAmountDiscount {
    amount: f64,
}

impl FixedAmountDiscount {
    pub const fn new(amount: f64) -> Self {
        Self { amount }
    }

    pub const fn amount(&self) -> f64 {
        self.amount
    }
}

impl ValueObject for FixedAmountDiscount {}

impl Discount for FixedAmountDiscount {
    fn apply(&self, price: f64) -> f64 {
        price - self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_discount_takes_ten_percent_off() {
        assert_eq!(PercentageDiscount::new(10.0).apply(1000.0), 900.0);
    }

    #[test]
    fn fixed_amount_discount_subtracts_amount() {
        assert_eq!(FixedAmountDiscount::new(200.0).apply(1000.0), 800.0);
    }

    #[test]
    fn zero_discounts_leave_price_unchanged() {
        assert_eq!(PercentageDiscount::new(0.0).apply(250.0), 250.0);
        assert_eq!(FixedAmountDiscount::new(0.0).apply(250.0), 250.0);
    }

    #[test]
    fn oversized_discounts_go_negative_without_clamping() {
        assert_eq!(FixedAmountDiscount::new(1500.0).apply(1000.0), -500.0);
        assert_eq!(PercentageDiscount::new(150.0).apply(1000.0), -500.0);
    }

    #[test]
    fn discounts_are_interchangeable_behind_the_trait() {
        let discounts: Vec<Box<dyn Discount>> = vec![
            Box::new(PercentageDiscount::new(10.0)),
            Box::new(FixedAmountDiscount::new(200.0)),
        ];

        let prices: Vec<f64> = discounts.iter().map(|d| d.apply(1000.0)).collect();
        assert_eq!(prices, vec![900.0, 800.0]);
    }

    #[test]
    fn discounts_compare_by_value() {
        assert_eq!(PercentageDiscount::new(10.0), PercentageDiscount::new(10.0));
        assert_ne!(FixedAmountDiscount::new(10.0), FixedAmountDiscount::new(20.0));
        assert_eq!(FixedAmountDiscount::new(5.0).amount(), 5.0);
        assert_eq!(PercentageDiscount::new(15.0).percentage(), 15.0);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn close(a: f64, b: f64) -> bool {
            (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: apply(x) == x * (1 - p / 100).
            #[test]
            fn percentage_matches_closed_form(
                p in -200.0f64..200.0,
                x in -1.0e6f64..1.0e6
            ) {
                let got = PercentageDiscount::new(p).apply(x);
                prop_assert!(close(got, x * (1.0 - p / 100.0)), "got {got}");
            }

            /// Property: apply(x) == x - a, exactly.
            #[test]
            fn fixed_amount_matches_subtraction(
                a in -1.0e6f64..1.0e6,
                x in -1.0e6f64..1.0e6
            ) {
                prop_assert_eq!(FixedAmountDiscount::new(a).apply(x), x - a);
            }

            /// Property: apply is a pure function of price and parameter.
            #[test]
            fn apply_is_deterministic(
                p in 0.0f64..100.0,
                x in 0.0f64..1.0e6
            ) {
                let discount = PercentageDiscount::new(p);
                prop_assert_eq!(discount.apply(x), discount.apply(x));
            }
        }
    }
}

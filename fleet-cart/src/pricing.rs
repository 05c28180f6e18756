use serde::{Deserialize, Serialize};

use crate::cart::CartLine;
use crate::promo;

/// Call-site pricing profile. The cart view and the checkout view carry
/// different rates; each caller picks its profile once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    pub tax_rate: f64,
    pub delivery_fee: f64,
}

impl PricingConfig {
    /// Cart view: 8% tax, delivery not yet charged
    pub fn cart() -> Self {
        Self {
            tax_rate: 0.08,
            delivery_fee: 0.0,
        }
    }

    /// Checkout: 7% tax plus the flat delivery fee
    pub fn checkout() -> Self {
        Self {
            tax_rate: 0.07,
            delivery_fee: 2.50,
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::cart()
    }
}

/// Derived price breakdown. Never stored; recomputed from the current
/// cart lines and promo state on every read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceSummary {
    pub subtotal: f64,
    pub discount: f64,
    pub tax: f64,
    pub delivery_fee: f64,
    pub total: f64,
}

/// Price computation over cart lines
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Sum of unit price times quantity. Unrounded; currency precision
    /// is applied only at presentation time.
    pub fn subtotal(&self, lines: &[CartLine]) -> f64 {
        lines.iter().map(|l| l.line_total()).sum()
    }

    /// Promo discount amount for a submitted code
    pub fn discount(&self, subtotal: f64, promo_code: &str) -> f64 {
        subtotal * promo::discount_rate(promo_code)
    }

    /// Tax applies to the post-discount amount, not the raw subtotal
    pub fn tax(&self, subtotal: f64, discount: f64) -> f64 {
        (subtotal - discount) * self.config.tax_rate
    }

    pub fn total(&self, subtotal: f64, discount: f64, tax: f64) -> f64 {
        subtotal - discount + tax + self.config.delivery_fee
    }

    /// Derive a fresh summary from the current lines and promo state
    pub fn summarize(&self, lines: &[CartLine], promo_code: &str) -> PriceSummary {
        let subtotal = self.subtotal(lines);
        let discount = self.discount(subtotal, promo_code);
        let tax = self.tax(subtotal, discount);
        let total = self.total(subtotal, discount, tax);

        PriceSummary {
            subtotal,
            discount,
            tax,
            delivery_fee: self.config.delivery_fee,
            total,
        }
    }
}

/// Presentation-time rounding boundary ("$12.99"). Computation upstream
/// stays unrounded.
pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_catalog::seed::{sample_menu, sample_restaurant};
    use crate::cart::Cart;
    use std::collections::BTreeMap;

    const EPSILON: f64 = 1e-9;

    fn engine() -> PricingEngine {
        PricingEngine::new(PricingConfig::cart())
    }

    #[test]
    fn test_discount_is_case_insensitive() {
        let engine = engine();
        assert!((engine.discount(100.0, "discount10") - 10.0).abs() < EPSILON);
        assert!((engine.discount(100.0, "DISCOUNT10") - 10.0).abs() < EPSILON);
        assert_eq!(engine.discount(100.0, "SAVE5"), 0.0);
        assert_eq!(engine.discount(100.0, ""), 0.0);
    }

    #[test]
    fn test_tax_is_post_discount() {
        let engine = engine();
        // (100 - 10) * 0.08, never 100 * 0.08
        assert!((engine.tax(100.0, 10.0) - 7.2).abs() < EPSILON);
    }

    #[test]
    fn test_total_includes_delivery_fee() {
        let engine = PricingEngine::new(PricingConfig {
            tax_rate: 0.08,
            delivery_fee: 2.5,
        });
        assert!((engine.total(100.0, 10.0, 7.2) - 99.7).abs() < EPSILON);
    }

    #[test]
    fn test_summary_invariant() {
        let restaurant = sample_restaurant();
        let menu = sample_menu(restaurant.id);
        let mut cart = Cart::new();
        for item in menu.items() {
            cart.add(item, 2, BTreeMap::new());
        }

        let engine = PricingEngine::new(PricingConfig::checkout());
        let summary = engine.summarize(cart.lines(), "DISCOUNT10");

        let expected_total =
            summary.subtotal - summary.discount + summary.tax + summary.delivery_fee;
        assert!((summary.total - expected_total).abs() < EPSILON);
        assert!(summary.discount > 0.0);
    }

    #[test]
    fn test_removed_line_leaves_subtotal() {
        let restaurant = sample_restaurant();
        let menu = sample_menu(restaurant.id);
        let pizza = menu
            .items()
            .iter()
            .find(|i| i.name == "Margherita Pizza")
            .unwrap();
        let pasta = menu
            .items()
            .iter()
            .find(|i| i.name == "Pasta Carbonara")
            .unwrap();

        let mut cart = Cart::new();
        let pizza_line = cart.add(pizza, 1, BTreeMap::new());
        cart.add(pasta, 1, BTreeMap::new());

        let engine = engine();
        assert!((engine.subtotal(cart.lines()) - (12.99 + 15.50)).abs() < EPSILON);

        cart.remove(&pizza_line).unwrap();
        assert!((engine.subtotal(cart.lines()) - 15.50).abs() < EPSILON);
    }

    #[test]
    fn test_format_usd_rounds_for_display() {
        assert_eq!(format_usd(7.2), "$7.20");
        assert_eq!(format_usd(99.7), "$99.70");
        assert_eq!(format_usd(12.99), "$12.99");
    }
}

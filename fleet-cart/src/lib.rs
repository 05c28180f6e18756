pub mod cart;
pub mod pricing;
pub mod promo;

pub use cart::{Cart, CartError, CartLine};
pub use pricing::{PriceSummary, PricingConfig, PricingEngine};

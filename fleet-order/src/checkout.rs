use chrono::Utc;
use fleet_cart::{Cart, PricingConfig, PricingEngine};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::order::Order;
use crate::status::OrderStatus;

/// A saved delivery address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub id: Uuid,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub kind: AddressKind,
    pub is_default: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressKind {
    Home,
    Work,
    Other(String),
}

/// Mock payment method. Card details are validated for presence only
/// and never charged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Card(CardDetails),
    Paypal,
    CashOnDelivery,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDetails {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub card_name: String,
}

impl CardDetails {
    fn is_complete(&self) -> bool {
        !self.card_number.is_empty()
            && !self.expiry_date.is_empty()
            && !self.cvv.is_empty()
            && !self.card_name.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    #[error("No delivery address selected")]
    MissingAddress,

    #[error("Card details are incomplete")]
    IncompleteCard,
}

/// The two addresses saved on the mock profile
pub fn default_addresses() -> Vec<DeliveryAddress> {
    vec![
        DeliveryAddress {
            id: Uuid::new_v4(),
            line1: "123 Main St".to_string(),
            line2: None,
            city: "Foodville".to_string(),
            state: "FS".to_string(),
            zip_code: "90210".to_string(),
            country: "USA".to_string(),
            kind: AddressKind::Home,
            is_default: true,
        },
        DeliveryAddress {
            id: Uuid::new_v4(),
            line1: "456 Corporate Ave".to_string(),
            line2: Some("Suite 500".to_string()),
            city: "Biztown".to_string(),
            state: "BS".to_string(),
            zip_code: "10001".to_string(),
            country: "USA".to_string(),
            kind: AddressKind::Work,
            is_default: false,
        },
    ]
}

/// Validate a checkout request and produce a confirmed order. The order
/// snapshots the cart lines and the checkout-profile price summary; the
/// cart itself is left untouched.
pub fn place_order(
    cart: &Cart,
    promo_code: &str,
    address: Option<DeliveryAddress>,
    payment: PaymentMethod,
    config: PricingConfig,
) -> Result<Order, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    let address = address.ok_or(CheckoutError::MissingAddress)?;
    if let PaymentMethod::Card(details) = &payment {
        if !details.is_complete() {
            return Err(CheckoutError::IncompleteCard);
        }
    }

    let engine = PricingEngine::new(config);
    let summary = engine.summarize(cart.lines(), promo_code);
    let now = Utc::now();

    Ok(Order {
        id: Uuid::new_v4(),
        lines: cart.lines().to_vec(),
        summary,
        address,
        payment,
        status: OrderStatus::Confirmed,
        created_at: now,
        updated_at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_catalog::seed::{sample_menu, sample_restaurant};
    use std::collections::BTreeMap;

    fn filled_cart() -> Cart {
        let restaurant = sample_restaurant();
        let menu = sample_menu(restaurant.id);
        let mut cart = Cart::new();
        for item in menu.items() {
            cart.add(item, 1, BTreeMap::new());
        }
        cart
    }

    fn card() -> PaymentMethod {
        PaymentMethod::Card(CardDetails {
            card_number: "4242 4242 4242 4242".to_string(),
            expiry_date: "12/27".to_string(),
            cvv: "123".to_string(),
            card_name: "Alex Doe".to_string(),
        })
    }

    #[test]
    fn test_place_order_snapshots_checkout_summary() {
        let cart = filled_cart();
        let address = default_addresses().into_iter().next();

        let order = place_order(&cart, "", address, card(), PricingConfig::checkout()).unwrap();

        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.lines.len(), cart.lines().len());
        assert_eq!(order.summary.delivery_fee, 2.50);
        // 12.99 + 15.50 + 7.00 + 9.25, taxed at the checkout rate
        let subtotal = 44.74;
        assert!((order.summary.subtotal - subtotal).abs() < 1e-9);
        assert!((order.summary.tax - subtotal * 0.07).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_empty_cart() {
        let cart = Cart::new();
        let address = default_addresses().into_iter().next();

        assert!(matches!(
            place_order(&cart, "", address, card(), PricingConfig::checkout()),
            Err(CheckoutError::EmptyCart)
        ));
    }

    #[test]
    fn test_rejects_missing_address() {
        let cart = filled_cart();

        assert!(matches!(
            place_order(&cart, "", None, card(), PricingConfig::checkout()),
            Err(CheckoutError::MissingAddress)
        ));
    }

    #[test]
    fn test_rejects_incomplete_card() {
        let cart = filled_cart();
        let address = default_addresses().into_iter().next();
        let payment = PaymentMethod::Card(CardDetails {
            card_number: "4242 4242 4242 4242".to_string(),
            expiry_date: String::new(),
            cvv: "123".to_string(),
            card_name: "Alex Doe".to_string(),
        });

        assert!(matches!(
            place_order(&cart, "", address, payment, PricingConfig::checkout()),
            Err(CheckoutError::IncompleteCard)
        ));
    }

    #[test]
    fn test_non_card_payment_skips_card_validation() {
        let cart = filled_cart();
        let address = default_addresses().into_iter().next();

        let order = place_order(
            &cart,
            "",
            address,
            PaymentMethod::CashOnDelivery,
            PricingConfig::checkout(),
        );
        assert!(order.is_ok());
    }
}

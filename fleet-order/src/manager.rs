use std::collections::HashMap;

use fleet_cart::{Cart, PricingConfig};
use uuid::Uuid;

use crate::checkout::{self, CheckoutError, DeliveryAddress, PaymentMethod};
use crate::order::Order;
use crate::status::OrderStatus;

/// Holds placed orders and enforces forward-only status transitions, so
/// tracker progress never regresses over an order's lifetime.
pub struct OrderManager {
    orders: HashMap<Uuid, Order>,
}

impl OrderManager {
    pub fn new() -> Self {
        Self {
            orders: HashMap::new(),
        }
    }

    /// Validate checkout and register the confirmed order
    pub fn place_order(
        &mut self,
        cart: &Cart,
        promo_code: &str,
        address: Option<DeliveryAddress>,
        payment: PaymentMethod,
        config: PricingConfig,
    ) -> Result<Order, OrderError> {
        let order = checkout::place_order(cart, promo_code, address, payment, config)?;
        self.orders.insert(order.id, order.clone());
        Ok(order)
    }

    /// Get an order by ID
    pub fn get_order(&self, order_id: &Uuid) -> Option<&Order> {
        self.orders.get(order_id)
    }

    /// Transition: Confirmed → Preparing
    pub fn mark_preparing(&mut self, order_id: &Uuid) -> Result<(), OrderError> {
        self.transition(order_id, OrderStatus::Confirmed, OrderStatus::Preparing)
    }

    /// Transition: Preparing → Delivery
    pub fn mark_out_for_delivery(&mut self, order_id: &Uuid) -> Result<(), OrderError> {
        self.transition(order_id, OrderStatus::Preparing, OrderStatus::Delivery)
    }

    /// Transition: Delivery → Delivered
    pub fn mark_delivered(&mut self, order_id: &Uuid) -> Result<(), OrderError> {
        self.transition(order_id, OrderStatus::Delivery, OrderStatus::Delivered)
    }

    fn transition(
        &mut self,
        order_id: &Uuid,
        expected: OrderStatus,
        to: OrderStatus,
    ) -> Result<(), OrderError> {
        let order = self
            .orders
            .get_mut(order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;

        if order.status != expected {
            return Err(OrderError::InvalidTransition {
                from: order.status,
                to,
            });
        }

        order.update_status(to);
        Ok(())
    }
}

impl Default for OrderManager {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::default_addresses;
    use fleet_catalog::seed::{sample_menu, sample_restaurant};
    use std::collections::BTreeMap;

    fn placed_order(manager: &mut OrderManager) -> Uuid {
        let restaurant = sample_restaurant();
        let menu = sample_menu(restaurant.id);
        let mut cart = Cart::new();
        cart.add(&menu.items()[0], 1, BTreeMap::new());

        let order = manager
            .place_order(
                &cart,
                "",
                default_addresses().into_iter().next(),
                PaymentMethod::CashOnDelivery,
                PricingConfig::checkout(),
            )
            .unwrap();
        order.id
    }

    #[test]
    fn test_order_lifecycle() {
        let mut manager = OrderManager::new();
        let order_id = placed_order(&mut manager);

        assert_eq!(
            manager.get_order(&order_id).unwrap().status,
            OrderStatus::Confirmed
        );

        manager.mark_preparing(&order_id).unwrap();
        assert_eq!(
            manager.get_order(&order_id).unwrap().status,
            OrderStatus::Preparing
        );

        manager.mark_out_for_delivery(&order_id).unwrap();
        assert_eq!(
            manager.get_order(&order_id).unwrap().status,
            OrderStatus::Delivery
        );

        manager.mark_delivered(&order_id).unwrap();
        assert_eq!(
            manager.get_order(&order_id).unwrap().status,
            OrderStatus::Delivered
        );
    }

    #[test]
    fn test_invalid_transition() {
        let mut manager = OrderManager::new();
        let order_id = placed_order(&mut manager);

        // cannot go directly from Confirmed to Delivery
        assert!(matches!(
            manager.mark_out_for_delivery(&order_id),
            Err(OrderError::InvalidTransition { .. })
        ));

        // and a completed chain cannot regress or repeat
        manager.mark_preparing(&order_id).unwrap();
        manager.mark_out_for_delivery(&order_id).unwrap();
        manager.mark_delivered(&order_id).unwrap();
        assert!(manager.mark_delivered(&order_id).is_err());
    }

    #[test]
    fn test_unknown_order() {
        let mut manager = OrderManager::new();
        assert!(matches!(
            manager.mark_preparing(&Uuid::new_v4()),
            Err(OrderError::NotFound(_))
        ));
    }
}

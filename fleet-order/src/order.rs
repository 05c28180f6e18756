use chrono::{DateTime, Utc};
use fleet_cart::{CartLine, PriceSummary};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::checkout::{DeliveryAddress, PaymentMethod};
use crate::status::OrderStatus;

/// A placed order: an immutable snapshot of the cart and its pricing at
/// checkout time, plus the evolving fulfillment status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub lines: Vec<CartLine>,
    pub summary: PriceSummary,
    pub address: DeliveryAddress,
    pub payment: PaymentMethod,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub(crate) fn update_status(&mut self, new_status: OrderStatus) {
        self.status = new_status;
        self.updated_at = Utc::now();
    }

    /// Total unit count across the order's lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

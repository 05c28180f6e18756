use chrono::{DateTime, Utc};
use fleet_catalog::{MenuItem, Selections};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the shopping cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub id: Uuid,
    pub item_id: Uuid,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub selections: Selections,
    pub image_url: Option<String>,
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Line total before any order-level adjustments
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("Cart line not found: {0}")]
    LineNotFound(Uuid),
}

/// The shopping cart of a single session. Mutated serially through
/// discrete UI events; every derived value is recomputed on read.
#[derive(Debug, Default, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add an item to the cart. A line matching on item identity and
    /// structural selection equality absorbs the added quantity;
    /// anything else appends a new row.
    pub fn add(&mut self, item: &MenuItem, quantity: u32, selections: Selections) -> Uuid {
        let quantity = quantity.max(1);

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.item_id == item.id && l.selections == selections)
        {
            line.quantity += quantity;
            return line.id;
        }

        let line = CartLine {
            id: Uuid::new_v4(),
            item_id: item.id,
            name: item.name.clone(),
            unit_price: item.price,
            quantity,
            selections,
            image_url: item.image_url.clone(),
            added_at: Utc::now(),
        };
        let line_id = line.id;
        self.lines.push(line);
        line_id
    }

    /// Increase a line's quantity by one. No upper bound.
    pub fn increment(&mut self, line_id: &Uuid) -> Result<u32, CartError> {
        let line = self.line_mut(line_id)?;
        line.quantity += 1;
        Ok(line.quantity)
    }

    /// Decrease a line's quantity by one, clamped at 1. Never removes
    /// the line; removal is a separate explicit action.
    pub fn decrement(&mut self, line_id: &Uuid) -> Result<u32, CartError> {
        let line = self.line_mut(line_id)?;
        if line.quantity > 1 {
            line.quantity -= 1;
        }
        Ok(line.quantity)
    }

    /// Set a line's quantity directly. Zero is coerced to 1.
    pub fn set_quantity(&mut self, line_id: &Uuid, quantity: u32) -> Result<u32, CartError> {
        let line = self.line_mut(line_id)?;
        line.quantity = quantity.max(1);
        Ok(line.quantity)
    }

    /// Set a line's quantity from raw text input (the numeric field in
    /// the cart table). Non-numeric or sub-minimum input is coerced to 1,
    /// never rejected.
    pub fn set_quantity_from_input(&mut self, line_id: &Uuid, raw: &str) -> Result<u32, CartError> {
        let quantity = match raw.trim().parse::<u32>() {
            Ok(n) if n >= 1 => n,
            _ => {
                tracing::warn!(input = raw, "quantity input coerced to 1");
                1
            }
        };
        self.set_quantity(line_id, quantity)
    }

    /// Remove a line from the cart; it no longer participates in any
    /// subsequent price computation.
    pub fn remove(&mut self, line_id: &Uuid) -> Result<CartLine, CartError> {
        let position = self
            .lines
            .iter()
            .position(|l| &l.id == line_id)
            .ok_or(CartError::LineNotFound(*line_id))?;
        Ok(self.lines.remove(position))
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total unit count across all lines (the header badge number)
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    fn line_mut(&mut self, line_id: &Uuid) -> Result<&mut CartLine, CartError> {
        self.lines
            .iter_mut()
            .find(|l| &l.id == line_id)
            .ok_or(CartError::LineNotFound(*line_id))
    }
}

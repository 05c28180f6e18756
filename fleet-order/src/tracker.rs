use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::status::OrderStatus;

/// One discrete phase of order fulfillment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub id: OrderStatus,
    pub title: String,
    pub description: String,
}

/// The standard four-stage fulfillment sequence, constructed once
pub fn standard_stages() -> Vec<Stage> {
    vec![
        Stage {
            id: OrderStatus::Confirmed,
            title: "Order Confirmed".to_string(),
            description: "Your order has been confirmed by the restaurant.".to_string(),
        },
        Stage {
            id: OrderStatus::Preparing,
            title: "Preparing Food".to_string(),
            description: "The restaurant is preparing your meal.".to_string(),
        },
        Stage {
            id: OrderStatus::Delivery,
            title: "Out for Delivery".to_string(),
            description: "Your order is on its way.".to_string(),
        },
        Stage {
            id: OrderStatus::Delivered,
            title: "Delivered".to_string(),
            description: "Enjoy your meal!".to_string(),
        },
    ]
}

/// Display classification of a stage relative to the current status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageState {
    Completed,
    Current,
    Pending,
}

/// Caller-supplied per-stage detail strings (timings, driver info, ...)
pub type StageAnnotations = HashMap<OrderStatus, String>;

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Order status {0} is not present in the configured stage sequence")]
    UnknownStatus(OrderStatus),
}

/// Per-stage projection for the order tracker view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageView {
    pub id: OrderStatus,
    pub title: String,
    pub state: StageState,
    pub detail: String,
}

/// Maps an order status onto the fixed stage sequence and derives
/// per-stage display state and overall completion. Pure with respect to
/// its inputs; nothing is cached between reads.
pub struct OrderTracker {
    stages: Vec<Stage>,
}

impl OrderTracker {
    pub fn new() -> Self {
        Self {
            stages: standard_stages(),
        }
    }

    /// Use a custom stage sequence. The sequence is fixed for the
    /// lifetime of the tracker.
    pub fn with_stages(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Index of the stage whose id equals the given status. A status
    /// absent from the sequence is a configuration error, flagged and
    /// logged rather than panicking.
    pub fn classify(&self, status: OrderStatus) -> Result<usize, TrackerError> {
        match self.stages.iter().position(|s| s.id == status) {
            Some(index) => Ok(index),
            None => {
                tracing::warn!(%status, "order status missing from stage sequence");
                Err(TrackerError::UnknownStatus(status))
            }
        }
    }

    /// Overall completion percentage: ((index + 1) / total) * 100.
    /// Returns 0 when the status is absent from the sequence.
    pub fn progress_percent(&self, status: OrderStatus) -> f64 {
        match self.classify(status) {
            Ok(index) => ((index + 1) as f64 / self.stages.len() as f64) * 100.0,
            Err(_) => 0.0,
        }
    }

    /// Display state of one stage relative to the current status. When
    /// the status is absent from the sequence, no stage is current and
    /// every stage reads as pending.
    pub fn stage_state(&self, status: OrderStatus, stage_id: OrderStatus) -> StageState {
        let target = match self.stages.iter().position(|s| s.id == stage_id) {
            Some(index) => index,
            None => return StageState::Pending,
        };

        match self.classify(status) {
            Ok(current) if target < current => StageState::Completed,
            Ok(current) if target == current => StageState::Current,
            _ => StageState::Pending,
        }
    }

    /// Detail text for one stage. Completed stages prefer the caller's
    /// annotation and fall back to "Completed"; the current stage prefers
    /// the annotation and falls back to its static description; pending
    /// stages always read "Pending" — future-stage detail is never
    /// revealed ahead of time.
    pub fn describe(
        &self,
        status: OrderStatus,
        stage_id: OrderStatus,
        annotations: &StageAnnotations,
    ) -> String {
        match self.stage_state(status, stage_id) {
            StageState::Completed => annotations
                .get(&stage_id)
                .cloned()
                .unwrap_or_else(|| "Completed".to_string()),
            StageState::Current => annotations.get(&stage_id).cloned().unwrap_or_else(|| {
                self.stages
                    .iter()
                    .find(|s| s.id == stage_id)
                    .map(|s| s.description.clone())
                    .unwrap_or_default()
            }),
            StageState::Pending => "Pending".to_string(),
        }
    }

    /// Project every stage in order for the tracker view
    pub fn stage_views(
        &self,
        status: OrderStatus,
        annotations: &StageAnnotations,
    ) -> Vec<StageView> {
        self.stages
            .iter()
            .map(|stage| StageView {
                id: stage.id,
                title: stage.title.clone(),
                state: self.stage_state(status, stage.id),
                detail: self.describe(status, stage.id, annotations),
            })
            .collect()
    }
}

impl Default for OrderTracker {
    fn default() -> Self {
        Self::new()
    }
}

//! Aggregate statistics over the collection

use serde::{Deserialize, Serialize};

use crate::store::Item;

/// Point-in-time aggregate of the collection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub total_items: u64,
    /// Mean price rounded to 2 decimals; 0.0 for an empty collection.
    /// Finite whenever every price is finite, even if their sum is not.
    pub average_price: f64,
}

impl StatsSnapshot {
    pub fn compute(items: &[Item]) -> Self {
        let total_items = items.len() as u64;
        if total_items == 0 {
            return Self {
                total_items,
                average_price: 0.0,
            };
        }

        let count = total_items as f64;
        let sum: f64 = items.iter().map(|item| item.price).sum();
        let mean = if sum.is_finite() {
            sum / count
        } else {
            items.iter().map(|item| item.price / count).sum()
        };
        Self {
            total_items,
            average_price: round_cents(mean),
        }
    }
}

/// Round to 2 decimals. Values too large to scale have no fractional part.
fn round_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

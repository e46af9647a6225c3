//! Optimization result record.

use serde::{Deserialize, Serialize};

/// Outcome of one optimization call.
///
/// Every field is always populated. Miles are rounded to one decimal,
/// minutes to whole numbers, and both savings fields are clamped at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    /// Stop ids in the order supplied by the caller.
    pub original_order: Vec<String>,
    /// Stop ids in the optimized visiting order.
    pub optimized_order: Vec<String>,
    pub original_miles: f64,
    pub optimized_miles: f64,
    pub original_minutes: u32,
    pub optimized_minutes: u32,
    pub savings_minutes: u32,
    pub savings_miles: f64,
    /// Human-readable order changes, one per differing slot.
    pub swaps: Vec<String>,
}

impl OptimizationResult {
    /// Result for inputs with nothing to reorder: the order is returned
    /// untouched and every metric is zero.
    pub fn trivial(ids: Vec<String>) -> Self {
        Self {
            original_order: ids.clone(),
            optimized_order: ids,
            original_miles: 0.0,
            optimized_miles: 0.0,
            original_minutes: 0,
            optimized_minutes: 0,
            savings_minutes: 0,
            savings_miles: 0.0,
            swaps: Vec::new(),
        }
    }

    /// Returns `true` if the optimized order differs from the original.
    pub fn is_reordered(&self) -> bool {
        self.original_order != self.optimized_order
    }

    /// Serializes to the camelCase wire format.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

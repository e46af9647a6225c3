//! Turning an accepted order into stored sequence numbers.

use serde::{Deserialize, Serialize};

/// The sequence position to persist for one stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceAssignment {
    pub id: String,
    /// 1-based position in the day's visiting order.
    pub sequence_order: u32,
}

/// Numbers an accepted order from 1 so callers can write it back.
///
/// # Examples
///
/// ```
/// use dayroute::schedule::sequence_assignments;
///
/// let order = vec!["b".to_string(), "a".to_string()];
/// let assignments = sequence_assignments(&order);
/// assert_eq!(assignments[0].id, "b");
/// assert_eq!(assignments[0].sequence_order, 1);
/// assert_eq!(assignments[1].sequence_order, 2);
/// ```
pub fn sequence_assignments(order: &[String]) -> Vec<SequenceAssignment> {
    order
        .iter()
        .zip(1u32..)
        .map(|(id, sequence_order)| SequenceAssignment {
            id: id.clone(),
            sequence_order,
        })
        .collect()
}

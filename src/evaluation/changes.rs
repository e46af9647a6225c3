//! Human-readable order changes.

use std::collections::HashMap;

use crate::models::Stop;

/// Lists the slots whose stop changed between the original and optimized
/// orders.
///
/// Positions are compared one by one; each differing slot yields
/// `"Move {new title} to slot {k} (was {old title})"` with 1-based `k`.
/// Ids not found among `stops` are skipped.
///
/// # Examples
///
/// ```
/// use dayroute::models::Stop;
/// use dayroute::evaluation::order_changes;
///
/// let stops = vec![
///     Stop::new("a", 0.0, 0.0, "Alice"),
///     Stop::new("b", 0.0, 0.0, "Bob"),
///     Stop::new("c", 0.0, 0.0, "Carol"),
/// ];
/// let optimized = vec!["b".to_string(), "a".to_string(), "c".to_string()];
/// let changes = order_changes(&stops, &optimized);
/// assert_eq!(changes, vec![
///     "Move Bob to slot 1 (was Alice)",
///     "Move Alice to slot 2 (was Bob)",
/// ]);
/// ```
pub fn order_changes(stops: &[Stop], optimized_ids: &[String]) -> Vec<String> {
    let titles: HashMap<&str, &str> = stops
        .iter()
        .map(|s| (s.id.as_str(), s.title.as_str()))
        .collect();

    optimized_ids
        .iter()
        .zip(stops)
        .enumerate()
        .filter(|(_, (new_id, old))| **new_id != old.id)
        .filter_map(|(slot, (new_id, old))| {
            let new_title = titles.get(new_id.as_str())?;
            Some(format!(
                "Move {new_title} to slot {} (was {})",
                slot + 1,
                old.title
            ))
        })
        .collect()
}

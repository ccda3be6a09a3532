//! # Statistics
//!
//! Count and total value of a snapshot of items.

use serde::{Deserialize, Serialize};

use crate::types::Item;

/// Aggregate figures served by `/stats`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemStats {
    /// Number of items in the snapshot.
    pub items_count: usize,

    /// Exact sum of all prices (not rounded).
    pub items_value: f64,
}

impl ItemStats {
    /// Computes statistics in one pass over `items`.
    ///
    /// Prices are summed in slice order, so the result is reproducible for
    /// a given snapshot.
    pub fn from_items(items: &[Item]) -> Self {
        ItemStats {
            items_count: items.len(),
            items_value: items.iter().map(|i| i.price).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot() {
        let stats = ItemStats::from_items(&[]);
        assert_eq!(stats.items_count, 0);
        assert_eq!(stats.items_value, 0.0);
    }

    #[test]
    fn test_count_and_value() {
        let items = vec![
            Item::new(0, "cheese", 2.63),
            Item::new(1, "milk", 1.25),
            Item::new(2, "chocolate", 3.41),
            Item::new(3, "mouse", 10.99),
        ];

        let stats = ItemStats::from_items(&items);

        assert_eq!(stats.items_count, 4);
        assert_eq!(stats.items_value, 2.63 + 1.25 + 3.41 + 10.99);
        assert!((stats.items_value - 18.28).abs() < 1e-9);
    }

    #[test]
    fn test_serialized_keys() {
        let stats = ItemStats {
            items_count: 2,
            items_value: 1.5,
        };
        assert_eq!(
            serde_json::to_value(stats).unwrap(),
            serde_json::json!({"items_count": 2, "items_value": 1.5})
        );
    }
}

//! # Seed Fixtures
//!
//! Items every shop starts with.

use crate::types::Item;

/// Returns the fixed seed set (ids 0, 1, 2).
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new(0, "cheese", 2.63).with_expire("201612011545"),
        Item::new(1, "milk", 1.25).with_expire("201712011545"),
        Item::new(2, "chocolate", 3.41).with_expire("201812011545"),
    ]
}

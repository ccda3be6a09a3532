//! # Domain Types
//!
//! The item record sold by the shop.
//!
//! ## Item Layout
//! ```text
//! ┌─────────────────────────────────────────┐
//! │                 Item                    │
//! │  ─────────────────────────────────────  │
//! │  id      i64      repository-assigned   │
//! │  name    String   non-empty             │
//! │  price   f64      never a string        │
//! │  expire  Option   YYYYMMDDHHMM          │
//! │  extra   Map      passed through as-is  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Items only hold data. Coercion of incoming JSON lives in
//! [`crate::validation`]; a stored `Item` has always been through it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON object submitted for validation (a new item or an update patch).
pub type Candidate = Map<String, Value>;

/// `chrono` format of the `expire` field.
pub const EXPIRE_FORMAT: &str = "%Y%m%d%H%M";

/// Field names with a canonical type. Everything else is an extra field.
pub const FIELD_ID: &str = "id";
pub const FIELD_NAME: &str = "name";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_EXPIRE: &str = "expire";

// =============================================================================
// Item
// =============================================================================

/// An item available in the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier within the repository.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: f64,

    /// Expiry timestamp in `YYYYMMDDHHMM` format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire: Option<String>,

    /// Unknown fields from the submitted candidate.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Creates an item without expiry or extra fields.
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Item {
            id,
            name: name.into(),
            price,
            expire: None,
            extra: Map::new(),
        }
    }

    /// Sets the expiry timestamp.
    pub fn with_expire(mut self, expire: impl Into<String>) -> Self {
        self.expire = Some(expire.into());
        self
    }

    /// Converts the item back into a candidate mapping.
    ///
    /// Used by the repository to overlay an update patch on the stored
    /// fields before re-validating the merged record.
    pub fn to_candidate(&self) -> Candidate {
        let mut candidate = self.extra.clone();
        candidate.insert(FIELD_ID.to_string(), Value::from(self.id));
        candidate.insert(FIELD_NAME.to_string(), Value::from(self.name.clone()));
        candidate.insert(FIELD_PRICE.to_string(), Value::from(self.price));
        if let Some(expire) = &self.expire {
            candidate.insert(FIELD_EXPIRE.to_string(), Value::from(expire.clone()));
        }
        candidate
    }

    /// Parses the expiry timestamp, if any.
    pub fn expire_at(&self) -> Option<NaiveDateTime> {
        self.expire
            .as_deref()
            .and_then(|raw| NaiveDateTime::parse_from_str(raw, EXPIRE_FORMAT).ok())
    }

    /// Checks whether the item is expired at `now`.
    ///
    /// Items without an expiry timestamp count as expired.
    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        match self.expire_at() {
            Some(expire) => now >= expire,
            None => true,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_to_candidate_contains_all_fields() {
        let mut item = Item::new(7, "pear", 0.5).with_expire("202001011200");
        item.extra.insert("color".to_string(), Value::from("green"));

        let candidate = item.to_candidate();

        assert_eq!(candidate["id"], Value::from(7));
        assert_eq!(candidate["name"], Value::from("pear"));
        assert_eq!(candidate["price"], Value::from(0.5));
        assert_eq!(candidate["expire"], Value::from("202001011200"));
        assert_eq!(candidate["color"], Value::from("green"));
    }

    #[test]
    fn test_to_candidate_omits_missing_expire() {
        let candidate = Item::new(1, "milk", 1.25).to_candidate();
        assert!(!candidate.contains_key("expire"));
        assert_eq!(candidate.len(), 3);
    }

    #[test]
    fn test_is_expired() {
        let item = Item::new(0, "cheese", 2.63).with_expire("201612011545");

        assert!(!item.is_expired(at(2016, 12, 1, 15, 44)));
        assert!(item.is_expired(at(2016, 12, 1, 15, 45)));
        assert!(item.is_expired(at(2020, 1, 1, 0, 0)));
    }

    #[test]
    fn test_missing_expire_counts_as_expired() {
        let item = Item::new(3, "banana", 0.29);
        assert!(item.is_expired(at(1970, 1, 1, 0, 0)));
    }

    #[test]
    fn test_serialize_flattens_extra_fields() {
        let mut item = Item::new(4, "mouse", 10.99);
        item.extra.insert("color".to_string(), Value::from("grey"));

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": 4, "name": "mouse", "price": 10.99, "color": "grey"})
        );
    }
}

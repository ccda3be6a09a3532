//! # Validation Module
//!
//! Normalizes and checks a candidate item before it reaches the repository.
//!
//! ## Rule Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      validate(candidate)                                │
//! │                                                                         │
//! │  1. id      present? ── no ──► MissingField("id")                      │
//! │             integer / numeric string? ── no ──► InvalidType("id")      │
//! │  2. name    present? ── no ──► MissingField("name")                    │
//! │             string / number / bool / null? ── no ──► InvalidType       │
//! │             empty string? ── yes ──► MissingField("name")              │
//! │  3. price   present? ── no ──► MissingField("price")                   │
//! │             float / numeric string? ── no ──► InvalidType("price")     │
//! │  4. expire  absent, or YYYYMMDDHHMM string? ── no ──► InvalidType      │
//! │  5. OK ──► Item { id: i64, name: String, price: f64, .. }              │
//! │                                                                         │
//! │  First failure wins. No I/O, no side effects.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mmshop_core::validation::validate;
//! use serde_json::json;
//!
//! let candidate = json!({"id": "3", "name": "banana", "price": "0.29"});
//! let item = validate(candidate.as_object().unwrap().clone()).unwrap();
//!
//! assert_eq!(item.id, 3);
//! assert_eq!(item.price, 0.29);
//! ```

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::error::{ValidationError, ValidationResult};
use crate::types::{Candidate, Item, EXPIRE_FORMAT, FIELD_EXPIRE, FIELD_ID, FIELD_NAME, FIELD_PRICE};

/// Validates a candidate and returns the canonical item.
///
/// Unknown fields are kept in [`Item::extra`] unchanged.
pub fn validate(mut candidate: Candidate) -> ValidationResult<Item> {
    let id = candidate
        .remove(FIELD_ID)
        .ok_or_else(|| ValidationError::missing(FIELD_ID))
        .and_then(|value| coerce_id(&value))?;

    let name = candidate
        .remove(FIELD_NAME)
        .ok_or_else(|| ValidationError::missing(FIELD_NAME))
        .and_then(|value| coerce_name(&value))?;

    let price = candidate
        .remove(FIELD_PRICE)
        .ok_or_else(|| ValidationError::missing(FIELD_PRICE))
        .and_then(|value| coerce_price(&value))?;

    let expire = candidate
        .remove(FIELD_EXPIRE)
        .map(|value| check_expire(&value))
        .transpose()?;

    Ok(Item {
        id,
        name,
        price,
        expire,
        extra: candidate,
    })
}

// =============================================================================
// Field Coercion
// =============================================================================

/// Coerces an `id` value to an integer.
///
/// ## Accepted Shapes
/// - JSON integer representable as `i64`
/// - String holding an integer (surrounding whitespace ignored)
pub fn coerce_id(value: &Value) -> ValidationResult<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| ValidationError::invalid(FIELD_ID, "integer")),
        Value::String(s) => parse_id(s),
        _ => Err(ValidationError::invalid(FIELD_ID, "integer")),
    }
}

/// Parses an integer id from text, e.g. a path segment.
pub fn parse_id(raw: &str) -> ValidationResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::invalid(FIELD_ID, "integer"))
}

/// Coerces a `name` value to a non-empty string.
///
/// Every JSON primitive takes its text form (`null` becomes `"null"`).
/// Arrays and objects are rejected. Whitespace is kept as given.
pub fn coerce_name(value: &Value) -> ValidationResult<String> {
    let name = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => Value::Null.to_string(),
        Value::Array(_) | Value::Object(_) => {
            return Err(ValidationError::invalid(FIELD_NAME, "string"));
        }
    };

    if name.is_empty() {
        return Err(ValidationError::missing(FIELD_NAME));
    }

    Ok(name)
}

/// Coerces a `price` value to a finite float.
///
/// ## Accepted Shapes
/// - JSON float (`3.0`, not `3`)
/// - String holding a float (surrounding whitespace ignored)
pub fn coerce_price(value: &Value) -> ValidationResult<f64> {
    let price = match value {
        Value::Number(n) if n.is_f64() => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    price
        .filter(|p| p.is_finite())
        .ok_or_else(|| ValidationError::invalid(FIELD_PRICE, "float"))
}

/// Checks that an `expire` value is a `YYYYMMDDHHMM` string.
pub fn check_expire(value: &Value) -> ValidationResult<String> {
    let raw = value
        .as_str()
        .ok_or_else(|| ValidationError::invalid(FIELD_EXPIRE, "timestamp string"))?;

    NaiveDateTime::parse_from_str(raw, EXPIRE_FORMAT)
        .map_err(|_| ValidationError::invalid(FIELD_EXPIRE, "timestamp in YYYYMMDDHHMM format"))?;

    Ok(raw.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Item Handlers
//!
//! `GET/POST /item` and `GET/PUT /item/{id}`.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /item  {"name": "banana", "price": 0.29}                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse body as JSON object ── fails ──► 404 UNREADABLE_BODY            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ItemRepository::create ── Conflict ──► 409                            │
//! │       │                  └─ other ────► 404                            │
//! │       ▼                                                                 │
//! │  201 {"id": 3, "name": "banana", "price": 0.29}                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::SharedState;
use crate::error::ApiError;
use mmshop_core::{Candidate, Item, ValidationError};
use mmshop_store::StoreError;

/// Item representation on the wire.
///
/// `expire` is internal to the index page and never leaves through `/item`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        ItemDto {
            id: item.id,
            name: item.name,
            price: item.price,
            extra: item.extra,
        }
    }
}

/// Parses a request body as a JSON object.
fn parse_candidate(body: &[u8]) -> Result<Candidate, String> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(candidate)) => Ok(candidate),
        Ok(other) => Err(format!("expected a JSON object, got {}", json_kind(&other))),
        Err(e) => Err(e.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Lists all items.
pub async fn list_items(State(state): State<SharedState>) -> Json<Vec<ItemDto>> {
    let items: Vec<ItemDto> = state
        .items
        .list_all()
        .into_iter()
        .map(ItemDto::from)
        .collect();

    debug!(count = items.len(), "GET item list");
    Json(items)
}

/// Gets a single item by the id in the path.
pub async fn get_item(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ItemDto>, ApiError> {
    debug!(id = %raw_id, "GET item");
    let item = state.items.get_by_text(&raw_id)?;
    Ok(Json(ItemDto::from(item)))
}

/// Adds a new item.
///
/// ## Returns
/// * `201` with the stored item (id assigned when absent)
/// * `404` for an unreadable body or a failed validation
/// * `409` when the id is taken
pub async fn create_item(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ItemDto>), ApiError> {
    let candidate =
        parse_candidate(&body).map_err(|e| ApiError::unreadable_body(StatusCode::NOT_FOUND, e))?;

    debug!(fields = candidate.len(), "POST item");
    let item = state.items.create(candidate)?;

    Ok((StatusCode::CREATED, Json(ItemDto::from(item))))
}

/// Updates the item with the id in the path.
///
/// ## Returns
/// * `200` with the updated item
/// * `204` for an unreadable or empty patch
/// * `404` for an invalid id, a missing item or a failed validation
pub async fn update_item(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<ItemDto>, ApiError> {
    let patch =
        parse_candidate(&body).map_err(|e| ApiError::unreadable_body(StatusCode::NO_CONTENT, e))?;

    // The body is judged before the path id
    if patch.is_empty() {
        return Err(StoreError::from(ValidationError::EmptyPatch).into());
    }

    let id = mmshop_core::validation::parse_id(&raw_id)
        .map_err(|_| StoreError::invalid_id(raw_id.as_str()))?;

    debug!(id, fields = patch.len(), "PUT item");
    let item = state.items.update(id, patch)?;

    Ok(Json(ItemDto::from(item)))
}

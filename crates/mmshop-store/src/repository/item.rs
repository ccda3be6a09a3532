//! # Item Repository
//!
//! The in-memory item collection and the operations that read or mutate it.
//!
//! ## Critical Section
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Lock Per Operation                               │
//! │                                                                         │
//! │  handler A ──► create() ──┐                                            │
//! │                           ├──► Mutex<Vec<Item>> ──► lookup / validate  │
//! │  handler B ──► update() ──┘         (held for the       / append       │
//! │                                      whole call)                        │
//! │                                                                         │
//! │  Two creates never see the same max id; an update never interleaves    │
//! │  with another update of the same item.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Create Conflict Probe
//! ```text
//! candidate has id?
//!      │
//!      ├── no ──► id = max(ids) + 1 (0 when empty, IdsExhausted at i64::MAX)
//!      │
//!      └── yes ──► lookup(id)
//!                    ├── Found     ──► Conflict
//!                    ├── NotFound  ──► continue
//!                    └── Error(e)  ──► return e (never "safe to insert")
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use mmshop_core::validation::{self, validate};
use mmshop_core::{Candidate, Item, ItemStats, ValidationError, FIELD_ID};

// =============================================================================
// Lookup
// =============================================================================

/// Outcome of probing the repository for an id of unknown shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// An item with this id exists.
    Found(Item),
    /// The id is well-formed and free.
    NotFound,
    /// The probe itself failed (e.g. the id is not an integer).
    Error(StoreError),
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for items.
///
/// ## Usage
/// ```rust
/// use mmshop_store::ItemRepository;
/// use serde_json::json;
///
/// let repo = ItemRepository::seeded();
///
/// let banana = json!({"name": "banana", "price": 0.29});
/// let created = repo.create(banana.as_object().unwrap().clone()).unwrap();
/// assert_eq!(created.id, 3);
///
/// assert_eq!(repo.stats().items_count, 4);
/// ```
#[derive(Debug, Default)]
pub struct ItemRepository {
    items: Mutex<Vec<Item>>,
}

impl ItemRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        ItemRepository::default()
    }

    /// Creates a repository holding the seed fixtures.
    pub fn seeded() -> Self {
        ItemRepository {
            items: Mutex::new(mmshop_core::fixtures::seed_items()),
        }
    }

    /// Creates a repository from existing items.
    ///
    /// ## Returns
    /// * `Err(StoreError::Conflict)` - two items share an id
    pub fn from_items(items: Vec<Item>) -> StoreResult<Self> {
        for (index, item) in items.iter().enumerate() {
            if items[..index].iter().any(|other| other.id == item.id) {
                return Err(StoreError::conflict(item.id));
            }
        }

        Ok(ItemRepository {
            items: Mutex::new(items),
        })
    }

    /// Acquires the repository lock.
    ///
    /// Every mutation is a single push or slot assignment made after
    /// validation, so a guard recovered from a poisoned lock still holds a
    /// consistent list.
    fn lock(&self) -> MutexGuard<'_, Vec<Item>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a snapshot of all items in insertion order.
    pub fn list_all(&self) -> Vec<Item> {
        let items = self.lock();
        debug!(count = items.len(), "Listing items");
        items.clone()
    }

    /// Gets an item by its id.
    ///
    /// ## Returns
    /// * `Ok(Item)` - first item with this id
    /// * `Err(StoreError::NotFound)` - no such item
    pub fn get(&self, id: i64) -> StoreResult<Item> {
        let items = self.lock();
        find(&items, id).cloned().ok_or_else(|| StoreError::not_found(id))
    }

    /// Gets an item by an id given as text (e.g. a URL path segment).
    ///
    /// ## Returns
    /// * `Err(StoreError::InvalidId)` - text is not an integer
    /// * `Err(StoreError::NotFound)` - no such item
    pub fn get_by_text(&self, raw: &str) -> StoreResult<Item> {
        let id = validation::parse_id(raw).map_err(|_| StoreError::invalid_id(raw))?;
        self.get(id)
    }

    /// Probes for an id taken from a JSON payload.
    pub fn lookup(&self, id: &Value) -> Lookup {
        let items = self.lock();
        probe(&items, id)
    }

    /// Adds a new item.
    ///
    /// ## Behavior
    /// - Candidate carries an `id` already in use: `Conflict`
    /// - Candidate carries an `id` that is not an integer: `InvalidId`
    /// - Candidate has no `id`: assigned `max + 1` (`0` when empty,
    ///   `IdsExhausted` when the maximum is `i64::MAX`)
    /// - Otherwise the candidate is validated and appended
    pub fn create(&self, mut candidate: Candidate) -> StoreResult<Item> {
        let mut items = self.lock();

        match candidate.get(FIELD_ID) {
            Some(id) => match probe(&items, id) {
                Lookup::Found(existing) => {
                    warn!(id = existing.id, "Rejecting create: id exists already");
                    return Err(StoreError::conflict(existing.id));
                }
                Lookup::Error(err) => return Err(err),
                Lookup::NotFound => {}
            },
            None => {
                let id = next_id(&items)?;
                debug!(id, "Assigned next item id");
                candidate.insert(FIELD_ID.to_string(), Value::from(id));
            }
        }

        let item = validate(candidate)?;
        items.push(item.clone());

        debug!(id = item.id, count = items.len(), "Item created");
        Ok(item)
    }

    /// Merges `patch` into an existing item.
    ///
    /// ## Behavior
    /// 1. Empty patch → `EmptyPatch`, before any lookup
    /// 2. Missing item → `NotFound`
    /// 3. Stored fields overlaid with the patch are re-validated as a whole
    /// 4. Only a valid merge replaces the stored item; its `id` never changes
    pub fn update(&self, id: i64, patch: Candidate) -> StoreResult<Item> {
        if patch.is_empty() {
            return Err(ValidationError::EmptyPatch.into());
        }

        let mut items = self.lock();
        let slot = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;

        let mut merged = slot.to_candidate();
        merged.extend(patch);

        let mut updated = validate(merged)?;
        updated.id = slot.id;
        *slot = updated.clone();

        debug!(id, "Item updated");
        Ok(updated)
    }

    /// Computes statistics over one consistent snapshot.
    pub fn stats(&self) -> ItemStats {
        let items = self.lock();
        ItemStats::from_items(&items)
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Checks if the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

// =============================================================================
// Helpers (caller holds the lock)
// =============================================================================

fn find(items: &[Item], id: i64) -> Option<&Item> {
    items.iter().find(|item| item.id == id)
}

fn probe(items: &[Item], id: &Value) -> Lookup {
    let id = match validation::coerce_id(id) {
        Ok(id) => id,
        Err(_) => return Lookup::Error(StoreError::invalid_id(id_text(id))),
    };

    match find(items, id) {
        Some(item) => Lookup::Found(item.clone()),
        None => Lookup::NotFound,
    }
}

fn next_id(items: &[Item]) -> StoreResult<i64> {
    match items.iter().map(|item| item.id).max() {
        None => Ok(0),
        Some(max) => max
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted { max }),
    }
}

fn id_text(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

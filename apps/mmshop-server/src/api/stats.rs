//! # Statistics Handler

use axum::extract::State;
use axum::Json;
use tracing::debug;

use super::SharedState;
use mmshop_core::ItemStats;

/// Returns the item count and total value.
pub async fn get_stats(State(state): State<SharedState>) -> Json<ItemStats> {
    let stats = state.items.stats();
    debug!(
        items_count = stats.items_count,
        items_value = stats.items_value,
        "GET stats"
    );
    Json(stats)
}

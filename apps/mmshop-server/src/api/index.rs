//! # Index Page
//!
//! HTML overview of all items at the API root, enabled by `with_index`.

use axum::extract::State;
use axum::response::Html;
use chrono::{Local, NaiveDateTime};

use super::SharedState;
use crate::config::API_URL;
use crate::error::ApiError;
use mmshop_core::Item;

/// Page title.
const TITLE: &str = "Welcome to Mickey Mouse shop";

/// Renders the overview, or 404 when the index is disabled.
pub async fn index(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    if !state.config.with_index {
        return Err(ApiError::not_found(format!(
            "The path \"{}\" was not found.",
            API_URL
        )));
    }

    let items = state.items.list_all();
    Ok(Html(render_index(&items, Local::now().naive_local())))
}

/// Renders the overview page for `items` as seen at `now`.
pub fn render_index(items: &[Item], now: NaiveDateTime) -> String {
    let mut rows = String::new();
    for item in items {
        let expired = item.is_expired(now);
        rows.push_str(&format!(
            "      <tr class=\"{}\"><td>{}</td><td>{}</td><td>{:.2}</td><td>{}</td></tr>\n",
            if expired { "expired" } else { "fresh" },
            item.id,
            escape_html(&item.name),
            item.price,
            if expired { "yes" } else { "no" },
        ));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n\
         \x20 <h1>{title}</h1>\n\
         \x20 <table>\n\
         \x20   <thead><tr><th>id</th><th>name</th><th>price</th><th>expired</th></tr></thead>\n\
         \x20   <tbody>\n{rows}\x20   </tbody>\n\
         \x20 </table>\n\
         \x20 <footer>REST API version {version}</footer>\n\
         </body>\n\
         </html>\n",
        title = TITLE,
        rows = rows,
        version = env!("CARGO_PKG_VERSION"),
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

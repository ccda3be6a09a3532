//! Tracing setup shared by the server and the demo client.
//!
//! ## Log Levels
//! - `RUST_LOG` wins when set, e.g. `RUST_LOG=mmshop_store=debug`
//! - otherwise the `-v` count picks the default level:
//!   none = warn, `-v` = info, `-vv` = debug

use tracing_subscriber::EnvFilter;

/// Default filter directive for a verbosity count.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info,tower_http=info",
        _ => "debug,tower_http=debug",
    }
}

/// Installs the global tracing subscriber.
///
/// Calling it twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

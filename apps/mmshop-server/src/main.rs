//! # mmshop
//!
//! Runs the Mickey Mouse shop web API.
//!
//! ```text
//! mmshop [-v...] [--host HOST] [--port PORT] [--with-index]
//! ```
//! Exit code 0 on a clean shutdown, 2 on any error.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use mmshop_server::api::AppState;
use mmshop_server::config::ServerConfig;
use mmshop_server::{logging, server};
use mmshop_store::ItemRepository;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "mmshop", version, about = "Mickey Mouse shop web API")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Host to bind (overrides MMSHOP_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides MMSHOP_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Serve the HTML overview at the API root
    #[arg(long)]
    with_index: bool,
}

impl Cli {
    fn apply(&self, mut config: ServerConfig) -> ServerConfig {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.with_index {
            config.with_index = true;
        }
        config
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mmshop: error {:#}", e);
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.apply(ServerConfig::load().context("loading configuration")?);
    info!(
        host = %config.host,
        port = config.port,
        with_index = config.with_index,
        "Configuration loaded"
    );

    let state = Arc::new(AppState::new(ItemRepository::seeded(), config.clone()));
    server::serve(&config, state)
        .await
        .context("running HTTP server")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from(["mmshop", "-vv", "--port", "8080", "--with-index"]);
        assert_eq!(cli.verbose, 2);

        let config = cli.apply(ServerConfig::default());
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.with_index);
    }

    #[test]
    fn test_cli_keeps_config_without_flags() {
        let cli = Cli::parse_from(["mmshop"]);
        let base = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
            with_index: true,
        };

        assert_eq!(cli.apply(base.clone()), base);
    }

    #[test]
    fn test_cli_rejects_bad_port() {
        assert!(Cli::try_parse_from(["mmshop", "--port", "mouse"]).is_err());
    }
}

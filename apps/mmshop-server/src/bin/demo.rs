//! # mmshop-demo
//!
//! Exercises a running `mmshop` server through the demo scenario.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use mmshop_server::{demo, logging};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "mmshop-demo", version, about = "Demo requests against the mmshop API")]
struct Cli {
    /// API base URL
    #[arg(long, default_value_t = demo::default_base_url())]
    url: String,

    /// Log response details
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(if cli.debug { 2 } else { 1 });

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mmshop-demo: error {:#}", e);
            ExitCode::from(2)
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let responses = demo::run(&cli.url)
        .await
        .with_context(|| format!("demo against {}", cli.url))?;

    tracing::info!(requests = responses.len(), "Demo finished");
    Ok(())
}

//! Binary crate for the `weatherview` terminal app.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive lookup loop and its rendering
//! - Interactive credential configuration

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod configure;
mod render;
mod theme;
mod view_loop;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics are opt-in via RUST_LOG; the UI is the only default output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}

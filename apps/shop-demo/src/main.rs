//! # Storefront Demo
//!
//! Seeds an in-memory shop, logs the sample user in, lists a category and
//! places an order for the first match.
//!
//! ## Usage
//! ```bash
//! cargo run -p shop-demo
//!
//! # Log in with a wrong password
//! SHOP_DEMO_PASSWORD=nope cargo run -p shop-demo
//!
//! # Show what the shop is doing
//! RUST_LOG=debug cargo run -p shop-demo
//! ```

mod config;
mod demo;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the transcript
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let config = DemoConfig::load()?;
    info!(config = %serde_json::to_string(&config)?, "Configuration loaded");

    let mut shop = demo::seed_shop()?;
    let stdout = io::stdout();
    demo::run(&mut shop, &config, &mut stdout.lock())?;

    Ok(())
}

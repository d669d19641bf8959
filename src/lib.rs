// Course catalog: mock signup and login in front of a fixture-backed
// course listing, served as plain HTML.

// Declare modules
pub mod catalog;
pub mod config;
pub mod error;
pub mod forms;
pub mod session;
pub mod views;
pub mod web_server;

use anyhow::Context;
use clap::Parser;

use crate::config::ServerConfig;

/// Parse flags, start logging and serve until interrupted
pub fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::parse();
    log::debug!("Starting with {:?}", config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    runtime
        .block_on(web_server::run_server(config))
        .context("course catalog server failed")
}

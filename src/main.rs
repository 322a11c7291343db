//! src/main.rs
//!
//! Entrypoint: install error reporting and logging, then delegate to `app::run()`.

mod app;
mod chart;
mod config;
mod panels;
mod source;
mod ui;

use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = config::AppConfig::parse();
    app::init_tracing(&config)?;
    app::run(&config)
}

//! src/config.rs
//!
//! Command-line configuration for the monitor.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ratatui::style::Color;

/// Where samples come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Random walk with occasional spikes.
    Random,
    /// Telemetry lines from a serial receiver.
    Serial,
}

#[derive(Parser, Debug)]
#[command(name = "sparkchart-monitor", version, about)]
pub struct AppConfig {
    /// Sample source.
    #[arg(long, value_enum, default_value = "random", env = "SPARKCHART_SOURCE")]
    pub source: SourceKind,

    /// Serial device used by the serial source.
    #[arg(long, default_value = "/dev/ttyACM0", env = "SPARKCHART_PORT")]
    pub port: String,

    /// Serial baud rate.
    #[arg(long, default_value_t = 115_200)]
    pub baud: u32,

    /// Width of the value axis; 0 hides it.
    #[arg(long, default_value_t = 8, allow_negative_numbers = true)]
    pub axis_width: i32,

    /// Fixed top value used when autoscale is off; 0 leaves it unset.
    #[arg(long, default_value_t = 0.0)]
    pub top: f64,

    /// Scale to the top value instead of the window maximum.
    #[arg(long)]
    pub fixed_scale: bool,

    /// Do not highlight peak samples.
    #[arg(long)]
    pub no_peaks: bool,

    /// Bar and label color (name like `cyan` or `#00ff88`); theme color when absent.
    #[arg(long)]
    pub bar_color: Option<Color>,

    /// Chart background color; theme color when absent.
    #[arg(long)]
    pub back_color: Option<Color>,

    /// Peak bar color; theme color when absent.
    #[arg(long)]
    pub peak_color: Option<Color>,

    /// Seed for the random source, for repeatable runs.
    #[arg(long, env = "SPARKCHART_SEED")]
    pub seed: Option<u64>,

    /// Frame time in milliseconds.
    #[arg(long, default_value_t = 100, env = "SPARKCHART_TICK_MS")]
    pub tick_ms: u64,

    /// Write logs to this file (filtered by `RUST_LOG`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

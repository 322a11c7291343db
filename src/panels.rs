//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod chart;
pub mod info;
pub mod paragraph;

pub use chart::ChartPanel;
pub use info::InfoPanel;
pub use paragraph::ParagraphPanel;

//! src/chart.rs
//!
//! Top-level `chart` module: the sliding-window spark chart widget and the
//! pure calculators it is assembled from.

use std::cell::RefCell;
use std::rc::Rc;

pub mod config;
pub mod data;
pub mod layout;
pub mod scale;
pub mod spark;

/// Re-exports
pub use spark::SparkChart;

/// A chart shared between the event loop (which feeds it) and its panels.
pub type SharedChart = Rc<RefCell<SparkChart>>;

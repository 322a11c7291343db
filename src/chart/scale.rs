//! src/chart/scale.rs
//!
//! Vertical scale: how many cells one unit of sample value is worth.

use super::config::ChartConfig;
use super::data::DataWindow;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleResult {
    /// Cells per unit of value. 0 means nothing is drawn this frame.
    pub coefficient: f64,

    /// Largest sample in the window.
    pub max: f64,
}

impl ScaleResult {
    pub const DEGENERATE: Self = Self {
        coefficient: 0.0,
        max: 0.0,
    };

    pub fn is_degenerate(&self) -> bool {
        self.coefficient == 0.0
    }

    /// Compute the scale for `window` drawn into `height` rows.
    ///
    /// Autoscale (or an unset top value) maps the window maximum to the full
    /// height. Otherwise `top_value` does, and taller bars are clipped later.
    pub fn calculate(window: &DataWindow, height: i32, config: &ChartConfig) -> Self {
        if height <= 1 {
            return Self::DEGENERATE;
        }
        let Some(max) = window.max() else {
            return Self::DEGENERATE;
        };
        if max == 0.0 {
            return Self::DEGENERATE;
        }

        let h = f64::from(height);
        let coefficient = if config.auto_scale || config.top_value == 0.0 {
            h / max
        } else {
            h / config.top_value
        };

        Self { coefficient, max }
    }
}

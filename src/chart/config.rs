//! src/chart/config.rs
//!
//! Externally configurable knobs read by the chart on every render.

use ratatui::style::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Width of the value axis on the left. 0 (or less) turns the axis off.
    pub value_width: i32,

    /// Theoretical maximum used for scaling when autoscale is off. 0 means unset.
    pub top_value: f64,

    /// Scale to the window maximum instead of `top_value`.
    pub auto_scale: bool,

    /// Paint samples equal to the window maximum with the peak colors.
    pub hilite_peaks: bool,

    /// Peak color overrides; `None` falls back to the theme.
    pub peak_fg: Option<Color>,
    pub peak_bg: Option<Color>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            value_width: 0,
            top_value: 0.0,
            auto_scale: true,
            hilite_peaks: true,
            peak_fg: None,
            peak_bg: None,
        }
    }
}

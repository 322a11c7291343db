//! src/chart/layout.rs
//!
//! Split of the control width between the value axis and the bars.

/// Horizontal layout of one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderRegion {
    /// Column where the bar area starts; 0 when the axis is suppressed.
    pub axis_offset: i32,
    pub bar_width: i32,
}

impl RenderRegion {
    /// The axis is shown only while it takes less than half of the width.
    /// A suppressed axis keeps its configured width; it is re-evaluated on every call.
    pub fn calculate(total_width: i32, value_width: i32) -> Self {
        if value_width < total_width / 2 {
            Self {
                axis_offset: value_width,
                bar_width: total_width.saturating_sub(value_width),
            }
        } else {
            Self {
                axis_offset: 0,
                bar_width: total_width,
            }
        }
    }

    /// Number of samples the bar area can show.
    pub fn capacity(&self) -> usize {
        usize::try_from(self.bar_width).unwrap_or(0)
    }
}

//! src/chart/spark.rs
//!
//! `SparkChart`: a trailing window of samples drawn as one-column bars, with
//! an optional value axis on the left and highlighted peaks.
//!
//! The chart owns its samples and configuration and borrows everything else:
//! geometry and color overrides come from the embedded `ControlBase`, colors
//! and the bar glyph from the `Theme` given to `repaint`, and cells go to the
//! `Canvas` given to `repaint`. Rendering never mutates the chart.

use ratatui::style::Color;
use tracing::{debug, trace};

use super::config::ChartConfig;
use super::data::DataWindow;
use super::layout::RenderRegion;
use super::scale::ScaleResult;
use crate::ui::{Canvas, Cell, ColorRole, ControlBase, Theme, ThemeObject, real_color};

/// Pass as width or height to get the default 10x5 chart.
pub const AUTO_SIZE: i32 = 0;

const DEFAULT_WIDTH: i32 = 10;
const DEFAULT_HEIGHT: i32 = 5;

/// Used when the theme has no glyph for spark charts.
const FALLBACK_BAR_GLYPH: char = '█';

#[derive(Clone, Debug)]
pub struct SparkChart {
    control: ControlBase,
    data: DataWindow,
    config: ChartConfig,
}

impl SparkChart {
    /// Create a chart; the requested size also becomes its minimum size.
    pub fn new(title: &str, width: i32, height: i32) -> Self {
        let width = if width == AUTO_SIZE { DEFAULT_WIDTH } else { width };
        let height = if height == AUTO_SIZE { DEFAULT_HEIGHT } else { height };

        let mut control = ControlBase::new(title);
        control.set_size(width, height);
        control.set_constraints(width, height);

        Self {
            control,
            data: DataWindow::new(),
            config: ChartConfig::default(),
        }
    }

    pub fn control(&self) -> &ControlBase {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut ControlBase {
        &mut self.control
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn data(&self) -> &DataWindow {
        &self.data
    }

    /// Layout for the control's current width.
    pub fn region(&self) -> RenderRegion {
        let (width, _) = self.control.size();
        RenderRegion::calculate(width, self.config.value_width)
    }

    /// Scale for the current window and the control's current height.
    pub fn scale(&self) -> ScaleResult {
        let (_, height) = self.control.size();
        ScaleResult::calculate(&self.data, height, &self.config)
    }

    /// Append a sample, keeping at most one sample per bar column.
    pub fn add_data(&mut self, value: f64) {
        let region = self.region();
        self.data.push(value, region.capacity());
        trace!(
            control = self.control.title(),
            width = self.control.size().0,
            bar_width = region.bar_width,
            len = self.data.len(),
            "sample appended"
        );
    }

    /// Replace all samples with a copy of `values`, keeping the newest that fit.
    pub fn set_data(&mut self, values: &[f64]) {
        let region = self.region();
        self.data.replace(values, region.capacity());
        trace!(
            control = self.control.title(),
            given = values.len(),
            len = self.data.len(),
            "samples replaced"
        );
    }

    pub fn clear_data(&mut self) {
        self.data.clear();
    }

    /// Width of the value panel on the left; 0 turns it off.
    pub fn value_width(&self) -> i32 {
        self.config.value_width
    }

    pub fn set_value_width(&mut self, width: i32) {
        debug!(control = self.control.title(), width, "value width changed");
        self.config.value_width = width;
    }

    /// Theoretical highest value, used for scaling only when autoscale is off.
    pub fn top(&self) -> f64 {
        self.config.top_value
    }

    pub fn set_top(&mut self, top: f64) {
        debug!(control = self.control.title(), top, "top value changed");
        self.config.top_value = top;
    }

    pub fn auto_scale(&self) -> bool {
        self.config.auto_scale
    }

    pub fn set_auto_scale(&mut self, auto: bool) {
        debug!(control = self.control.title(), auto, "autoscale changed");
        self.config.auto_scale = auto;
    }

    pub fn hilite_peaks(&self) -> bool {
        self.config.hilite_peaks
    }

    pub fn set_hilite_peaks(&mut self, hilite: bool) {
        debug!(control = self.control.title(), hilite, "peak highlight changed");
        self.config.hilite_peaks = hilite;
    }

    pub fn peak_colors(&self) -> (Option<Color>, Option<Color>) {
        (self.config.peak_fg, self.config.peak_bg)
    }

    pub fn set_peak_colors(&mut self, fg: Option<Color>, bg: Option<Color>) {
        self.config.peak_fg = fg;
        self.config.peak_bg = bg;
    }

    /// Paint the whole control: background, value axis, then bars.
    pub fn repaint(&self, canvas: &mut dyn Canvas, theme: &dyn Theme) {
        let (x, y) = self.control.pos();
        let (width, height) = self.control.size();

        let fg = real_color(theme, self.control.text_color(), ColorRole::SparkChartText);
        let bg = real_color(theme, self.control.back_color(), ColorRole::SparkChartBack);
        canvas.fill_rect(x, y, width, height, Cell::new(' ', fg, bg));

        if self.data.is_empty() {
            return;
        }

        self.draw_values(canvas, fg, bg);
        self.draw_bars(canvas, theme);
    }

    fn draw_values(&self, canvas: &mut dyn Canvas, fg: Color, bg: Color) {
        let value_width = self.config.value_width;
        if value_width <= 0 {
            return;
        }
        if self.region().axis_offset == 0 {
            return;
        }
        let scale = self.scale();
        if scale.is_degenerate() {
            return;
        }

        let max = if !self.config.auto_scale && self.config.top_value != 0.0 {
            self.config.top_value
        } else {
            scale.max
        };

        let (x, y) = self.control.pos();
        let (_, height) = self.control.size();
        let h = f64::from(height);
        let mut dy = 0;
        while dy < height - 1 {
            let value = f64::from(height - dy) / h * max;
            canvas.put_text(x, y + dy, &axis_label(value, value_width), fg, bg);
            dy += 2;
        }
    }

    fn draw_bars(&self, canvas: &mut dyn Canvas, theme: &dyn Theme) {
        let region = self.region();
        if region.bar_width < 2 {
            return;
        }
        let scale = self.scale();
        if scale.is_degenerate() {
            return;
        }

        let (x, y) = self.control.pos();
        let (_, height) = self.control.size();

        let peak = (
            real_color(theme, self.config.peak_fg, ColorRole::SparkChartMaxText),
            real_color(theme, self.config.peak_bg, ColorRole::SparkChartMaxBack),
        );
        let bar = (
            real_color(theme, self.control.text_color(), ColorRole::SparkChartBarText),
            real_color(theme, self.control.back_color(), ColorRole::SparkChartBarBack),
        );
        let glyph = theme
            .sys_object(ThemeObject::SparkChart)
            .chars()
            .next()
            .unwrap_or(FALLBACK_BAR_GLYPH);

        let columns = x.saturating_add(region.axis_offset)..;
        for (col, value) in columns.zip(self.data.latest(region.capacity())) {
            let bar_height = bar_height(value, scale.coefficient, height);
            if bar_height <= 0 {
                continue;
            }

            let (fg, bg) = if self.config.hilite_peaks && value == scale.max {
                peak
            } else {
                bar
            };
            canvas.fill_rect(col, y + height - bar_height, 1, bar_height, Cell::new(glyph, fg, bg));
        }
    }
}

/// Rows covered by a sample, clipped to the control height.
fn bar_height(value: f64, coefficient: f64, height: i32) -> i32 {
    ((value * coefficient).floor() as i32).min(height)
}

/// Right-aligned, two decimals, cut or padded to exactly `width` characters.
fn axis_label(value: f64, width: i32) -> String {
    let width = usize::try_from(width).unwrap_or(0);
    format!("{value:>width$.2}").chars().take(width).collect()
}

//! src/panels/info.rs
//!
//! Chart info panel: configuration knobs plus the scale of the last layout.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::chart::SharedChart;
use crate::ui::Panel;

/// Read-only; `highlighted` marks the chart the keyboard acts on.
pub struct InfoPanel {
    pub shared: SharedChart,
    pub highlighted: bool,
}

impl InfoPanel {
    pub fn new(shared: SharedChart) -> Self {
        Self {
            shared,
            highlighted: false,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let chart = self.shared.borrow();
        let config = chart.config();
        let region = chart.region();
        let scale = chart.scale();

        let axis = if chart.value_width() <= 0 {
            "off".to_string()
        } else if region.axis_offset == 0 {
            format!("{} (hidden)", chart.value_width())
        } else {
            chart.value_width().to_string()
        };
        let top = if chart.top() == 0.0 {
            "unset".to_string()
        } else {
            format!("{:.2}", chart.top())
        };

        vec![
            Line::from(vec![
                Span::styled(
                    chart.control().title().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    "  autoscale={}  peaks={}",
                    config.auto_scale, config.hilite_peaks
                )),
            ]),
            Line::from(format!("axis={axis}  top={top}")),
            Line::from(format!(
                "samples={}/{}  max={:.2}  coeff={:.3}",
                chart.data().len(),
                region.capacity(),
                scale.max,
                scale.coefficient
            )),
            Line::from(format!(
                "bar={}  peak={}",
                color_name(chart.control().text_color()),
                color_name(chart.peak_colors().0)
            )),
        ]
    }
}

/// Override color, or `theme` when the theme decides.
fn color_name(color: Option<Color>) -> String {
    color.map_or_else(|| "theme".to_string(), |c| c.to_string())
}

impl Panel for InfoPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let mut block = Block::default().title("Info").borders(Borders::ALL);
        if self.highlighted {
            block = block.style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        }

        f.render_widget(Paragraph::new(self.lines()).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::SparkChart;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn text(panel: &InfoPanel) -> Vec<String> {
        panel.lines().iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn reports_configuration() {
        let mut chart = SparkChart::new("Load", 10, 5);
        chart.set_value_width(6);
        chart.set_top(50.0);
        chart.set_data(&[1.0, 2.0]);
        let panel = InfoPanel::new(Rc::new(RefCell::new(chart)));

        let lines = text(&panel);
        assert_eq!(lines[0], "Load  autoscale=true  peaks=true");
        assert_eq!(lines[1], "axis=6 (hidden)  top=50.00");
        assert_eq!(lines[2], "samples=2/10  max=2.00  coeff=2.500");
        assert_eq!(lines[3], "bar=theme  peak=theme");
    }

    #[test]
    fn reports_color_overrides() {
        let mut chart = SparkChart::new("x", 20, 5);
        chart.control_mut().set_text_color(Some(Color::Green));
        chart.set_peak_colors(Some(Color::Red), None);
        let panel = InfoPanel::new(Rc::new(RefCell::new(chart)));
        assert_eq!(text(&panel)[3], "bar=Green  peak=Red");
    }

    #[test]
    fn reports_disabled_axis() {
        let panel = InfoPanel::new(Rc::new(RefCell::new(SparkChart::new("x", 20, 5))));
        let lines = text(&panel);
        assert_eq!(lines[1], "axis=off  top=unset");
        assert_eq!(lines[2], "samples=0/20  max=0.00  coeff=0.000");
    }
}

//! src/panels/chart.rs
//!
//! Chart panel: frames a spark chart in a bordered block, moves the chart's
//! control onto the block's inner area and repaints it there.

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

use crate::chart::SharedChart;
use crate::ui::{DefaultTheme, Panel};

pub struct ChartPanel {
    pub shared: SharedChart,
    pub theme: Rc<DefaultTheme>,
    pub highlighted: bool,
}

impl ChartPanel {
    pub fn new(shared: SharedChart, theme: Rc<DefaultTheme>) -> Self {
        Self {
            shared,
            theme,
            highlighted: false,
        }
    }
}

impl Panel for ChartPanel {
    /// The host owns geometry: the chart is re-placed every frame, so a
    /// terminal resize shows up on the next draw.
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let title = self.shared.borrow().control().title().to_string();
        let mut block = Block::default().title(title).borders(Borders::ALL);
        if self.highlighted {
            block = block.border_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        }
        let inner = block.inner(area);
        f.render_widget(block, area);

        // a chart never shrinks below its constraints, so it would spill over the border
        let (min_width, min_height) = self.shared.borrow().control().constraints();
        if i32::from(inner.width) < min_width.max(1)
            || i32::from(inner.height) < min_height.max(1)
        {
            return;
        }

        self.shared.borrow_mut().control_mut().place(inner);
        self.shared
            .borrow()
            .repaint(f.buffer_mut(), self.theme.as_ref());
    }
}

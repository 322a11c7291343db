//! src/panels/paragraph.rs
//!
//! Static text panel used for the header and the key help.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::Panel;

pub struct ParagraphPanel {
    pub lines: Vec<Line<'static>>,
    pub title: String,
}

impl ParagraphPanel {
    pub fn new(text: &str, title: &str) -> Self {
        Self {
            lines: vec![Line::from(text.to_string())],
            title: title.to_string(),
        }
    }

    /// One `key=action` hint per pair, keys highlighted.
    pub fn key_help(bindings: &[(&str, &str)], title: &str) -> Self {
        let key_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let mut spans = Vec::with_capacity(bindings.len() * 2);
        for (key, action) in bindings {
            spans.push(Span::styled(key.to_string(), key_style));
            spans.push(Span::raw(format!("={action}  ")));
        }
        Self {
            lines: vec![Line::from(spans)],
            title: title.to_string(),
        }
    }
}

impl Panel for ParagraphPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let p = Paragraph::new(self.lines.clone())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(self.title.clone())
                    .borders(Borders::ALL),
            );
        f.render_widget(p, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_help_formats_pairs() {
        let p = ParagraphPanel::key_help(&[("q", "Quit"), ("a", "Autoscale")], "Keys");
        assert_eq!(p.lines[0].to_string(), "q=Quit  a=Autoscale  ");
        assert_eq!(p.lines[0].spans[0].style.fg, Some(Color::Yellow));
    }
}

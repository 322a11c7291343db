//! src/ui/control.rs
//!
//! Generic control state shared by widgets: geometry, size constraints
//! and color overrides.
//!
//! Widgets embed a `ControlBase` and delegate to it instead of re-declaring
//! these fields.

use ratatui::layout::Rect;
use ratatui::style::Color;

#[derive(Clone, Debug)]
pub struct ControlBase {
    title: String,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    min_width: i32,
    min_height: i32,
    fg: Option<Color>,
    bg: Option<Color>,
}

impl ControlBase {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            min_width: 0,
            min_height: 0,
            fg: None,
            bg: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pos(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn set_pos(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Change the size; each dimension is raised to its minimum constraint.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width.max(self.min_width);
        self.height = height.max(self.min_height);
    }

    pub fn constraints(&self) -> (i32, i32) {
        (self.min_width, self.min_height)
    }

    pub fn set_constraints(&mut self, min_width: i32, min_height: i32) {
        self.min_width = min_width;
        self.min_height = min_height;
    }

    /// Move and resize the control to cover `area`.
    pub fn place(&mut self, area: Rect) {
        self.set_pos(i32::from(area.x), i32::from(area.y));
        self.set_size(i32::from(area.width), i32::from(area.height));
    }

    pub fn text_color(&self) -> Option<Color> {
        self.fg
    }

    pub fn set_text_color(&mut self, fg: Option<Color>) {
        self.fg = fg;
    }

    pub fn back_color(&self) -> Option<Color> {
        self.bg
    }

    pub fn set_back_color(&mut self, bg: Option<Color>) {
        self.bg = bg;
    }
}

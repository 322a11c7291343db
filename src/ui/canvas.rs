//! src/ui/canvas.rs
//!
//! Character-cell painting surface consumed by widgets.
//!
//! Widgets address cells with signed coordinates so that rectangles hanging
//! off any edge are clipped instead of wrapping. The only implementation is
//! `ratatui::buffer::Buffer`, which makes every widget drawable both into a
//! live `Frame` and into a bare buffer in tests.

use ratatui::buffer::Buffer;
use ratatui::style::Color;

/// A single painted cell: glyph plus foreground and background colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    pub fn new(ch: char, fg: Color, bg: Color) -> Self {
        Self { ch, fg, bg }
    }
}

/// Paint-only surface.
pub trait Canvas {
    /// Fill a `width` x `height` rectangle whose top-left corner is `(x, y)`.
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, cell: Cell);

    /// Write `text` one character per cell starting at `(x, y)`.
    fn put_text(&mut self, x: i32, y: i32, text: &str, fg: Color, bg: Color);
}

impl Canvas for Buffer {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, cell: Cell) {
        if width <= 0 || height <= 0 {
            return;
        }
        let area = self.area;
        let left = x.max(i32::from(area.x));
        let top = y.max(i32::from(area.y));
        let right = x.saturating_add(width).min(i32::from(area.right()));
        let bottom = y.saturating_add(height).min(i32::from(area.bottom()));

        for row in top..bottom {
            for col in left..right {
                // both ranges are inside the u16 buffer area
                if let Some(c) = self.cell_mut((col as u16, row as u16)) {
                    c.set_char(cell.ch).set_fg(cell.fg).set_bg(cell.bg);
                }
            }
        }
    }

    fn put_text(&mut self, x: i32, y: i32, text: &str, fg: Color, bg: Color) {
        let area = self.area;
        if y < i32::from(area.y) || y >= i32::from(area.bottom()) {
            return;
        }
        for (col, ch) in (x..).zip(text.chars()) {
            if col >= i32::from(area.right()) {
                break;
            }
            if col < i32::from(area.x) {
                continue;
            }
            if let Some(c) = self.cell_mut((col as u16, y as u16)) {
                c.set_char(ch).set_fg(fg).set_bg(bg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn symbol(buf: &Buffer, x: u16, y: u16) -> &str {
        buf[(x, y)].symbol()
    }

    #[test]
    fn fill_rect_paints_inside_area() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 3));
        buf.fill_rect(1, 1, 2, 2, Cell::new('#', Color::Red, Color::Blue));

        assert_eq!(symbol(&buf, 0, 0), " ");
        assert_eq!(symbol(&buf, 1, 1), "#");
        assert_eq!(symbol(&buf, 2, 2), "#");
        assert_eq!(symbol(&buf, 3, 2), " ");
        assert_eq!(buf[(1, 1)].fg, Color::Red);
        assert_eq!(buf[(1, 1)].bg, Color::Blue);
    }

    #[test]
    fn fill_rect_clips_negative_origin() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 3));
        buf.fill_rect(-2, -2, 3, 3, Cell::new('x', Color::White, Color::Black));

        assert_eq!(symbol(&buf, 0, 0), "x");
        assert_eq!(symbol(&buf, 1, 0), " ");
        assert_eq!(symbol(&buf, 0, 1), " ");
    }

    #[test]
    fn fill_rect_ignores_empty_sizes() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 3));
        buf.fill_rect(0, 0, 0, 3, Cell::new('x', Color::White, Color::Black));
        buf.fill_rect(0, 0, 3, -1, Cell::new('x', Color::White, Color::Black));
        assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 3, 3)));
    }

    #[test]
    fn fill_rect_respects_offset_buffer_area() {
        let mut buf = Buffer::empty(Rect::new(5, 5, 2, 2));
        buf.fill_rect(0, 0, 10, 10, Cell::new('o', Color::White, Color::Black));
        assert_eq!(symbol(&buf, 5, 5), "o");
        assert_eq!(symbol(&buf, 6, 6), "o");
    }

    #[test]
    fn put_text_clips_both_edges() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        buf.put_text(-1, 0, "abcdef", Color::Green, Color::Black);
        let row: String = (0..4).map(|x| symbol(&buf, x, 0)).collect();
        assert_eq!(row, "bcde");
        assert_eq!(buf[(0, 0)].fg, Color::Green);
    }

    #[test]
    fn put_text_outside_rows_is_ignored() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        buf.put_text(0, 1, "abcd", Color::Green, Color::Black);
        buf.put_text(0, -1, "abcd", Color::Green, Color::Black);
        assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 4, 1)));
    }
}

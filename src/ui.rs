//! src/ui.rs
//!
//! Host-side UI capabilities: the panel tree, the character-cell canvas,
//! color themes and the generic control base widgets are built on.

pub mod canvas;
pub mod control;
pub mod node;
pub mod theme;

pub use canvas::{Canvas, Cell};
pub use control::ControlBase;
pub use node::{Node, Panel};
pub use theme::{ColorRole, DefaultTheme, Theme, ThemeObject, real_color};

//! src/ui/node.rs
//!
//! Recursive layout tree rebuilt each frame from panels and splits.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Any renderable surface the tree can hold.
pub trait Panel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect);
}

pub enum Node {
    Split {
        direction: Direction,
        constraints: Vec<Constraint>,
        children: Vec<Node>,
    },
    Leaf(Box<dyn Panel>),
}

impl Node {
    /// Split the area along `direction`; children beyond the constraint count are not drawn.
    pub fn split(
        direction: Direction,
        constraints: impl Into<Vec<Constraint>>,
        children: Vec<Node>,
    ) -> Self {
        Node::Split {
            direction,
            constraints: constraints.into(),
            children,
        }
    }

    pub fn panel(panel: impl Panel + 'static) -> Self {
        Node::Leaf(Box::new(panel))
    }

    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        match self {
            Node::Split {
                direction,
                constraints,
                children,
            } => {
                let chunks = Layout::default()
                    .direction(*direction)
                    .constraints(constraints.clone())
                    .split(area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    child.draw(f, *chunk);
                }
            }
            Node::Leaf(panel) => panel.draw(f, area),
        }
    }
}

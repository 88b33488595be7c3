//! Document-space position component.
//!
//! Content placed on the scrollable page carries a [`PagePosition`]; the
//! render pass subtracts the current scroll offset to find where (and
//! whether) it appears in the viewport.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Position of page content in document space.
#[derive(Component, Clone, Copy, Debug)]
pub struct PagePosition {
    pub pos: Vector2,
}

impl PagePosition {
    /// Create a PagePosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}

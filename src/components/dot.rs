//! Page dot component.
//!
//! A filled circle scattered across the document so scrolling has something
//! visible to move. Paired with
//! [`PagePosition`](super::pageposition::PagePosition).

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Drawable dot on the page.
#[derive(Component, Clone, Copy, Debug)]
pub struct Dot {
    /// Radius in pixels.
    pub radius: f32,
    /// Fill color.
    pub color: Color,
}

impl Dot {
    pub fn new(radius: f32, color: Color) -> Self {
        Self { radius, color }
    }
}

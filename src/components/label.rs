//! HUD label components.
//!
//! [`Label`] renders a string at a fixed viewport position. The `family`
//! field names a font-family token in the
//! [`ThemeStore`](crate::resources::themestore::ThemeStore); unknown tokens
//! fall back to the default font with a warning at spawn time.
//!
//! [`Readout`] marks the label whose content mirrors the pointer record; see
//! [`update_readout_label`](crate::systems::readout::update_readout_label).

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

/// Viewport-anchored text.
#[derive(Component, Clone, Debug)]
pub struct Label {
    /// The text content to render.
    pub content: String,
    /// Font-family token name.
    pub family: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Text color.
    pub color: Color,
    /// Top-left corner in viewport space.
    pub pos: Vector2,
}

impl Label {
    /// Creates a new Label.
    pub fn new(
        content: impl Into<String>,
        family: impl Into<String>,
        font_size: f32,
        color: Color,
        pos: Vector2,
    ) -> Self {
        Self {
            content: content.into(),
            family: family.into(),
            font_size,
            color,
            pos,
        }
    }

    /// Updates the text content.
    pub fn set_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }
}

/// Marker for the label that displays the live pointer record.
#[derive(Component, Clone, Copy, Debug)]
pub struct Readout;

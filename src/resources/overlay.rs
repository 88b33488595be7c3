//! Overlay toggle resource.
//!
//! The mere presence of this resource indicates that the diagnostic overlay
//! (raw record fields, scroll offset, breakpoint) should be drawn. Remove it
//! to disable the overlay.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render pass draws the diagnostic
/// overlay.
#[derive(Resource, Clone, Copy)]
pub struct OverlayMode {}

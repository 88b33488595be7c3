//! Tracked region bounds component.
//!
//! [`RegionBounds`] describes the rectangle the pointer can be tracked
//! against. The rectangle is anchored in viewport space (it does not move
//! when the page scrolls); its document-space origin is derived by adding
//! the current scroll offset. The pointer observer queries these bounds
//! fresh on every signal, so moving or resizing the region takes effect on
//! the next observation.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Viewport-anchored rectangle of a trackable region.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct RegionBounds {
    /// Top-left corner in viewport space.
    pub pos: Vector2,
    /// Width and height in pixels.
    pub size: Vector2,
}

impl RegionBounds {
    /// Create bounds from a viewport-space top-left corner and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
            size: Vector2 {
                x: width,
                y: height,
            },
        }
    }

    /// Builder-style: return a copy moved to a different corner.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_pos(mut self, x: f32, y: f32) -> Self {
        self.pos = Vector2 { x, y };
        self
    }

    /// The region's top-left corner in document space: the viewport-space
    /// corner plus the current scroll offset.
    pub fn document_origin(&self, scroll: Vector2) -> Vector2 {
        Vector2 {
            x: self.pos.x + scroll.x,
            y: self.pos.y + scroll.y,
        }
    }

    /// Point containment in viewport space.
    pub fn contains_viewport_point(&self, point: Vector2) -> bool {
        point.x >= self.pos.x
            && point.x <= self.pos.x + self.size.x
            && point.y >= self.pos.y
            && point.y <= self.pos.y + self.size.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_corner_and_size() {
        let bounds = RegionBounds::new(50.0, 50.0, 200.0, 120.0);
        assert_eq!(bounds.pos.x, 50.0);
        assert_eq!(bounds.pos.y, 50.0);
        assert_eq!(bounds.size.x, 200.0);
        assert_eq!(bounds.size.y, 120.0);
    }

    #[test]
    fn test_document_origin_without_scroll() {
        let bounds = RegionBounds::new(50.0, 50.0, 200.0, 120.0);
        let origin = bounds.document_origin(Vector2 { x: 0.0, y: 0.0 });
        assert_eq!(origin.x, 50.0);
        assert_eq!(origin.y, 50.0);
    }

    #[test]
    fn test_document_origin_adds_scroll() {
        let bounds = RegionBounds::new(50.0, 50.0, 200.0, 120.0);
        let origin = bounds.document_origin(Vector2 { x: 0.0, y: 200.0 });
        assert_eq!(origin.x, 50.0);
        assert_eq!(origin.y, 250.0);
    }

    #[test]
    fn test_contains_viewport_point() {
        let bounds = RegionBounds::new(10.0, 10.0, 100.0, 50.0);
        assert!(bounds.contains_viewport_point(Vector2 { x: 10.0, y: 10.0 }));
        assert!(bounds.contains_viewport_point(Vector2 { x: 110.0, y: 60.0 }));
        assert!(bounds.contains_viewport_point(Vector2 { x: 60.0, y: 35.0 }));
        assert!(!bounds.contains_viewport_point(Vector2 { x: 9.9, y: 35.0 }));
        assert!(!bounds.contains_viewport_point(Vector2 { x: 60.0, y: 60.1 }));
    }

    #[test]
    fn test_with_pos_builder() {
        let bounds = RegionBounds::new(0.0, 0.0, 10.0, 10.0).with_pos(5.0, 6.0);
        assert_eq!(bounds.pos.x, 5.0);
        assert_eq!(bounds.pos.y, 6.0);
        assert_eq!(bounds.size.x, 10.0);
    }
}

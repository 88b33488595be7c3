//! Page scroll resource.
//!
//! The demo renders a document larger than the window. [`PageScroll`] holds
//! the current scroll offset of that document within the viewport, clamped
//! so the view never leaves the document. Document-space coordinates are
//! `viewport + offset`.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Current scroll offset of the document within the viewport.
///
/// `extent` is the full document size; `viewport` is the window size and is
/// refreshed each frame from the actual window dimensions.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PageScroll {
    /// Scroll offset in pixels. Document space = viewport space + offset.
    pub offset: Vector2,
    /// Full document dimensions in pixels.
    pub extent: Vector2,
    /// Current viewport (window) dimensions in pixels.
    pub viewport: Vector2,
}

impl Default for PageScroll {
    fn default() -> Self {
        Self {
            offset: Vector2 { x: 0.0, y: 0.0 },
            extent: Vector2 { x: 0.0, y: 0.0 },
            viewport: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl PageScroll {
    /// Create a scroll state for a document of `extent` seen through
    /// `viewport`, starting at the top-left corner.
    pub fn new(extent: Vector2, viewport: Vector2) -> Self {
        Self {
            offset: Vector2 { x: 0.0, y: 0.0 },
            extent,
            viewport,
        }
    }

    /// Largest valid offset on each axis.
    pub fn max_offset(&self) -> Vector2 {
        Vector2 {
            x: (self.extent.x - self.viewport.x).max(0.0),
            y: (self.extent.y - self.viewport.y).max(0.0),
        }
    }

    /// Scroll by a delta, clamping to the document bounds.
    pub fn scroll_by(&mut self, delta: Vector2) {
        self.scroll_to(Vector2 {
            x: self.offset.x + delta.x,
            y: self.offset.y + delta.y,
        });
    }

    /// Scroll to an absolute offset, clamping to the document bounds.
    pub fn scroll_to(&mut self, offset: Vector2) {
        let max = self.max_offset();
        self.offset = Vector2 {
            x: offset.x.clamp(0.0, max.x),
            y: offset.y.clamp(0.0, max.y),
        };
    }

    /// Update the viewport dimensions (window resize). Re-clamps the offset
    /// so a larger window never reveals space past the document edge.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vector2 {
            x: width,
            y: height,
        };
        self.scroll_to(self.offset);
    }

    /// Convert a viewport-space position to document space.
    pub fn to_document(&self, viewport_pos: Vector2) -> Vector2 {
        Vector2 {
            x: viewport_pos.x + self.offset.x,
            y: viewport_pos.y + self.offset.y,
        }
    }

    /// Convert a document-space position to viewport space.
    pub fn to_viewport(&self, document_pos: Vector2) -> Vector2 {
        Vector2 {
            x: document_pos.x - self.offset.x,
            y: document_pos.y - self.offset.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll() -> PageScroll {
        PageScroll::new(
            Vector2 {
                x: 2000.0,
                y: 4000.0,
            },
            Vector2 {
                x: 1280.0,
                y: 720.0,
            },
        )
    }

    #[test]
    fn test_starts_at_origin() {
        let s = scroll();
        assert_eq!(s.offset.x, 0.0);
        assert_eq!(s.offset.y, 0.0);
    }

    #[test]
    fn test_scroll_by_accumulates() {
        let mut s = scroll();
        s.scroll_by(Vector2 { x: 10.0, y: 200.0 });
        s.scroll_by(Vector2 { x: 0.0, y: 50.0 });
        assert_eq!(s.offset.x, 10.0);
        assert_eq!(s.offset.y, 250.0);
    }

    #[test]
    fn test_clamps_to_document_end() {
        let mut s = scroll();
        s.scroll_by(Vector2 {
            x: 99999.0,
            y: 99999.0,
        });
        assert_eq!(s.offset.x, 2000.0 - 1280.0);
        assert_eq!(s.offset.y, 4000.0 - 720.0);
    }

    #[test]
    fn test_clamps_to_origin() {
        let mut s = scroll();
        s.scroll_by(Vector2 { x: -5.0, y: -5.0 });
        assert_eq!(s.offset.x, 0.0);
        assert_eq!(s.offset.y, 0.0);
    }

    #[test]
    fn test_viewport_larger_than_document_pins_to_zero() {
        let mut s = PageScroll::new(
            Vector2 { x: 100.0, y: 100.0 },
            Vector2 { x: 640.0, y: 480.0 },
        );
        s.scroll_by(Vector2 { x: 50.0, y: 50.0 });
        assert_eq!(s.offset.x, 0.0);
        assert_eq!(s.offset.y, 0.0);
    }

    #[test]
    fn test_set_viewport_reclamps() {
        let mut s = scroll();
        s.scroll_to(Vector2 { x: 720.0, y: 3280.0 });
        s.set_viewport(2000.0, 4000.0);
        assert_eq!(s.offset.x, 0.0);
        assert_eq!(s.offset.y, 0.0);
    }

    #[test]
    fn test_document_viewport_round_trip() {
        let mut s = scroll();
        s.scroll_to(Vector2 { x: 100.0, y: 200.0 });
        let doc = s.to_document(Vector2 { x: 20.0, y: 130.0 });
        assert_eq!(doc.x, 120.0);
        assert_eq!(doc.y, 330.0);
        let back = s.to_viewport(doc);
        assert_eq!(back.x, 20.0);
        assert_eq!(back.y, 130.0);
    }
}

//! Pointer observation record resource.
//!
//! [`PointerState`] holds the most recent pointer observation: absolute
//! coordinates in document (page) space, and, while a region is bound,
//! coordinates relative to that region's document-space origin. All fields
//! start as `None` and stay `None` until the corresponding observation
//! happens, so readers can distinguish "never observed" from "at (0, 0)".
//!
//! The record is inserted by
//! [`PointerTracker::start`](crate::tracker::PointerTracker::start) and
//! discarded on `stop`; a restarted tracker begins with a fresh, empty
//! record.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Latest pointer observation in document space.
///
/// Updated synchronously by the pointer observer on every
/// [`PointerMovedEvent`](crate::events::pointer::PointerMovedEvent). The
/// element-relative fields are populated iff a tracked region is currently
/// bound; the region's origin is recomputed on every signal, never cached.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Absolute X in document space.
    pub x: Option<f32>,
    /// Absolute Y in document space.
    pub y: Option<f32>,
    /// X relative to the bound region's document-space origin.
    pub element_x: Option<f32>,
    /// Y relative to the bound region's document-space origin.
    pub element_y: Option<f32>,
    /// Bound region's top-left X in document space.
    pub element_position_x: Option<f32>,
    /// Bound region's top-left Y in document space.
    pub element_position_y: Option<f32>,
}

impl PointerState {
    /// Record an absolute observation in document space.
    pub fn observe(&mut self, page: Vector2) {
        self.x = Some(page.x);
        self.y = Some(page.y);
    }

    /// Record the bound region's document-space origin and derive the
    /// element-relative coordinates from the absolute observation.
    ///
    /// Call after [`observe`](Self::observe) with the same `page` value.
    pub fn observe_relative(&mut self, page: Vector2, origin: Vector2) {
        self.element_position_x = Some(origin.x);
        self.element_position_y = Some(origin.y);
        self.element_x = Some(page.x - origin.x);
        self.element_y = Some(page.y - origin.y);
    }

    /// Clear the element-relative fields (no region bound).
    pub fn clear_relative(&mut self) {
        self.element_x = None;
        self.element_y = None;
        self.element_position_x = None;
        self.element_position_y = None;
    }

    /// Whether at least one pointer signal has been observed.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn has_observation(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }

    /// Absolute document-space position, if observed.
    pub fn page(&self) -> Option<Vector2> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some(Vector2 { x, y }),
            _ => None,
        }
    }

    /// Element-relative position, if a region is bound and observed.
    pub fn element(&self) -> Option<Vector2> {
        match (self.element_x, self.element_y) {
            (Some(x), Some(y)) => Some(Vector2 { x, y }),
            _ => None,
        }
    }
}

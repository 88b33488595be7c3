//! Tracked region binding resource.
//!
//! [`RegionBinding`] holds the optional reference to the region entity the
//! pointer observer derives element-relative coordinates from. An unbound
//! binding is a valid, expected state, not an error: the observer simply
//! skips the relative fields. A binding that points at a despawned entity
//! (or one without [`RegionBounds`](crate::components::regionbounds::RegionBounds))
//! degrades to unbound behavior on the next signal.

use bevy_ecs::prelude::{Entity, Resource};

/// Optional reference to the entity whose bounds the pointer is tracked
/// against.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct RegionBinding {
    target: Option<Entity>,
}

impl RegionBinding {
    /// Bind to a region entity. Replaces any previous binding.
    pub fn bind(&mut self, entity: Entity) {
        self.target = Some(entity);
    }

    /// Remove the binding.
    pub fn unbind(&mut self) {
        self.target = None;
    }

    /// The bound entity, if any.
    pub fn target(&self) -> Option<Entity> {
        self.target
    }

    /// Whether a region is currently bound.
    pub fn is_bound(&self) -> bool {
        self.target.is_some()
    }
}

//! Pointer tracker lifecycle.
//!
//! [`PointerTracker`] owns the subscription to the pointer-movement signal:
//! `start` spawns the observer entity and inserts a fresh (empty)
//! [`PointerState`] record; `stop` despawns the observer and discards the
//! record. Because the subscription is an ordinary entity, the page-reload
//! sweep ([`despawn_page_entities`]) removes it too, so teardown happens on
//! every path and a dangling observer can never outlive its owner.
//!
//! Restarting after a stop yields a new record with no memory of the
//! previous activation.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::persistent::Persistent;
use crate::events::pointer::observe_pointer_moved;
use crate::resources::pointerstate::PointerState;

/// Handle owning one activation of the pointer-tracking subscription.
pub struct PointerTracker {
    observer: Entity,
}

impl PointerTracker {
    /// Activate tracking: insert an empty [`PointerState`] and subscribe to
    /// [`PointerMovedEvent`](crate::events::pointer::PointerMovedEvent).
    ///
    /// Any record left over from a previous activation is replaced.
    pub fn start(world: &mut World) -> Self {
        world.insert_resource(PointerState::default());
        let observer = world.spawn(Observer::new(observe_pointer_moved)).id();
        // Make sure the observer is registered before any signal can fire.
        world.flush();
        debug!("Pointer tracker started (observer {:?})", observer);
        Self { observer }
    }

    /// Deactivate tracking: remove the subscription and discard the record.
    ///
    /// Safe to call after the observer was already despawned by a sweep; the
    /// record is discarded either way.
    pub fn stop(self, world: &mut World) {
        if world.get_entity(self.observer).is_ok() {
            world.despawn(self.observer);
        } else {
            debug!("Pointer observer {:?} already despawned", self.observer);
        }
        world.remove_resource::<PointerState>();
        world.flush();
        debug!("Pointer tracker stopped");
    }

    /// Whether the subscription entity still exists.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_active(&self, world: &World) -> bool {
        world.get_entity(self.observer).is_ok()
    }

    /// The observer entity carrying the subscription.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn observer(&self) -> Entity {
        self.observer
    }
}

/// Despawn every entity not marked [`Persistent`].
///
/// This is the page-reload/teardown sweep: page content, the tracked
/// region, HUD labels, and any tracker observer all go. Callers normally
/// respawn content and restart the tracker afterwards.
pub fn despawn_page_entities(world: &mut World) {
    let mut query = world.query_filtered::<Entity, Without<Persistent>>();
    let doomed: Vec<Entity> = query.iter(&*world).collect();
    let count = doomed.len();
    for entity in doomed {
        world.despawn(entity);
    }
    world.flush();
    debug!("Page sweep despawned {} entities", count);
}

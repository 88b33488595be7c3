//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component survive the page-reload sweep
//! that despawns all page content (and, with it, the pointer observer). Use
//! it for observers and utilities that must outlive a reload.

use bevy_ecs::prelude::Component;

/// Tag component excluding an entity from page-reload sweeps.
#[derive(Component, Clone, Debug)]
pub struct Persistent;

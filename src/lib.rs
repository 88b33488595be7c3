//! Cursor Trace library.
//!
//! This module exposes the tracker's ECS components, resources, systems,
//! events, and lifecycle handle for use in integration tests and as a
//! reusable library.

pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
pub mod tracker;

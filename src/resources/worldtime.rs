//! Simulation time resource.
//!
//! Holds elapsed and per-frame delta seconds, updated once per frame by
//! [`update_world_time`](crate::systems::time::update_world_time). The orbit
//! animation reads `delta` to advance its phase.

use bevy_ecs::prelude::Resource;

/// Elapsed and delta time in seconds, with an optional scale factor.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Total scaled seconds since startup.
    pub elapsed: f32,
    /// Scaled seconds of the last frame.
    pub delta: f32,
    /// Multiplier applied to incoming frame deltas.
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    /// Builder-style: return a copy with a different time scale.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}

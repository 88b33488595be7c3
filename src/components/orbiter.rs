//! Orbiter component.
//!
//! Playback state for the marker that revolves around the pointer. The
//! sweep, radius, duration, and easing come from the named animation in the
//! [`ThemeStore`](crate::resources::themestore::ThemeStore); the component
//! only holds where in the animation this entity currently is. See
//! [`crate::systems::orbit`] for the update system.

use bevy_ecs::prelude::Component;

/// Orbit-animation playback state.
#[derive(Component, Clone, Debug)]
pub struct Orbiter {
    /// Animation token name in the theme store.
    pub animation: String,
    /// Current time within the animation, in seconds.
    pub time: f32,
    /// Whether playback is advancing.
    pub playing: bool,
    /// Current angle in degrees, recomputed each frame.
    pub angle: f32,
}

impl Orbiter {
    pub fn new(animation: impl Into<String>) -> Self {
        Orbiter {
            animation: animation.into(),
            time: 0.0,
            playing: true,
            angle: 0.0,
        }
    }
}

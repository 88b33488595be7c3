//! Orbit animation system.
//!
//! Advances each [`Orbiter`](crate::components::orbiter::Orbiter) through
//! the animation named by its token, using the timing and keyframe tables in
//! the [`ThemeStore`](crate::resources::themestore::ThemeStore). The system
//! only computes the current angle; the render pass places the marker
//! around the pointer's viewport position.

use bevy_ecs::prelude::*;

use crate::components::orbiter::Orbiter;
use crate::resources::themestore::{Easing, ThemeStore};
use crate::resources::worldtime::WorldTime;

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => t * (2.0 - t),
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
        Easing::CubicIn => t * t * t,
        Easing::CubicOut => {
            let p = t - 1.0;
            p * p * p + 1.0
        }
        Easing::CubicInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                let p = 2.0 * t - 2.0;
                0.5 * p * p * p + 1.0
            }
        }
    }
}

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Advance orbiter playback and recompute the current angle.
///
/// Orbiters whose animation token does not resolve in the theme store are
/// left untouched.
pub fn orbit_system(
    world_time: Res<WorldTime>,
    theme: Res<ThemeStore>,
    mut query: Query<&mut Orbiter>,
) {
    let dt = world_time.delta.max(0.0);
    for mut orbiter in query.iter_mut() {
        if !orbiter.playing {
            continue;
        }
        let Some((spec, track)) = theme.animation(&orbiter.animation) else {
            continue;
        };

        let mut time = orbiter.time + dt;
        if spec.duration > 0.0 && time >= spec.duration {
            if spec.looped {
                time %= spec.duration;
            } else {
                time = spec.duration;
                orbiter.playing = false;
            }
        }

        let t = if spec.duration > 0.0 {
            time / spec.duration
        } else {
            1.0
        };
        orbiter.time = time;
        orbiter.angle = lerp_f32(track.from_angle, track.to_angle, ease(spec.easing, t));
    }
}

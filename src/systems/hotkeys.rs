//! Hotkey system.
//!
//! - `B` toggles the region binding on/off, demonstrating that the
//!   element-relative fields only exist while bound.
//! - `F1` toggles the diagnostic overlay via
//!   [`ToggleOverlayEvent`](crate::events::overlay::ToggleOverlayEvent).
//!
//! Page reload (`R`) is handled in the main loop because it needs exclusive
//! world access.

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::KeyboardKey;

use crate::components::regionbounds::RegionBounds;
use crate::events::overlay::ToggleOverlayEvent;
use crate::resources::binding::RegionBinding;

/// React to bind/overlay hotkeys.
pub fn update_hotkeys(
    rl: NonSend<raylib::RaylibHandle>,
    mut binding: ResMut<RegionBinding>,
    regions: Query<Entity, With<RegionBounds>>,
    mut commands: Commands,
) {
    if rl.is_key_pressed(KeyboardKey::KEY_B) {
        if binding.is_bound() {
            binding.unbind();
            info!("Region unbound");
        } else if let Some(region) = regions.iter().next() {
            binding.bind(region);
            info!("Region bound");
        }
    }

    if rl.is_key_pressed(KeyboardKey::KEY_F1) {
        commands.trigger(ToggleOverlayEvent {});
    }
}

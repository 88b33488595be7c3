//! Event and observer to toggle the diagnostic overlay.
//!
//! Emitting a [`ToggleOverlayEvent`] flips the presence of the
//! [`OverlayMode`] resource. The render pass gates the overlay drawing on
//! that resource.

use crate::resources::overlay::OverlayMode;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

/// Event used to toggle the [`OverlayMode`] resource on/off.
///
/// Carries no data; the observer simply switches the presence of the
/// resource.
#[derive(Event, Debug, Clone, Copy)]
pub struct ToggleOverlayEvent {}

/// Observer that toggles the [`OverlayMode`] resource.
///
/// - If `OverlayMode` is present, it is removed (overlay hidden).
/// - If absent, it is inserted (overlay shown).
pub fn toggle_overlay_observer(
    _trigger: On<ToggleOverlayEvent>,
    mut commands: Commands,
    overlay: Option<Res<OverlayMode>>,
) {
    if overlay.is_some() {
        commands.remove_resource::<OverlayMode>();
        debug!("Overlay hidden");
    } else {
        commands.insert_resource(OverlayMode {});
        debug!("Overlay shown");
    }
}

//! Pointer polling system.
//!
//! [`poll_pointer`] reads the hardware mouse position from Raylib each frame
//! and triggers a [`PointerMovedEvent`] when it differs from the previous
//! frame's position. The event carries document-space coordinates (viewport
//! position plus the current scroll offset).
//!
//! Scrolling alone does not synthesize a signal: the comparison is made on
//! the viewport-space position, matching native pointer-movement semantics.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::events::pointer::PointerMovedEvent;
use crate::resources::pagescroll::PageScroll;

/// Poll Raylib for the mouse position and trigger [`PointerMovedEvent`] on
/// change.
///
/// The first polled frame establishes the baseline and produces no signal,
/// so a stationary pointer is never observed; the record stays empty until
/// real movement happens.
pub fn poll_pointer(
    rl: NonSend<raylib::RaylibHandle>,
    scroll: Res<PageScroll>,
    mut previous: Local<Option<Vector2>>,
    mut commands: Commands,
) {
    let viewport = rl.get_mouse_position();

    let moved = match *previous {
        Some(last) => last != viewport,
        None => false,
    };
    *previous = Some(viewport);

    if moved {
        commands.trigger(PointerMovedEvent {
            page: scroll.to_document(viewport),
        });
    }
}

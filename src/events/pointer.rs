//! Pointer-movement event and observer.
//!
//! [`PointerMovedEvent`] is the crate's pointer-movement signal: it fires
//! whenever the polled mouse position changes between frames (see
//! [`poll_pointer`](crate::systems::pointer::poll_pointer)) and carries the
//! new position in document space.
//!
//! [`observe_pointer_moved`] is the subscription itself. It lives on an
//! observer entity spawned by
//! [`PointerTracker::start`](crate::tracker::PointerTracker::start);
//! despawning that entity removes the subscription, so a torn-down tracker
//! can never receive another signal.

use crate::components::regionbounds::RegionBounds;
use crate::resources::binding::RegionBinding;
use crate::resources::bridge::{TraceBridge, TraceCmd, TraceSample};
use crate::resources::pagescroll::PageScroll;
use crate::resources::pointerstate::PointerState;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

/// Signal fired when the pointer's position changes.
///
/// `page` is the new absolute position in document space.
#[derive(Event, Debug, Clone, Copy)]
pub struct PointerMovedEvent {
    /// New pointer position in document space.
    pub page: Vector2,
}

/// Observer that applies a pointer signal to the [`PointerState`] record.
///
/// Contract
/// - Updates the absolute fields unconditionally.
/// - If a region is bound and its entity still has [`RegionBounds`], queries
///   the rectangle fresh, adds the current scroll offset to obtain the
///   document-space origin, and derives the element-relative fields.
/// - A missing/unbound/despawned region clears the relative fields; this is
///   a valid state, not an error.
/// - Forwards the applied observation to the trace bridge when present.
///
/// Every signal produces exactly one synchronous state update; there is no
/// throttling or smoothing.
pub fn observe_pointer_moved(
    trigger: On<PointerMovedEvent>,
    mut state: Option<ResMut<PointerState>>,
    binding: Option<Res<RegionBinding>>,
    scroll: Option<Res<PageScroll>>,
    regions: Query<&RegionBounds>,
    bridge: Option<Res<TraceBridge>>,
) {
    let Some(state) = state.as_deref_mut() else {
        // No record to update; the tracker owning this observer is gone.
        debug!("PointerMovedEvent with no PointerState present");
        return;
    };

    let page = trigger.event().page;
    state.observe(page);

    let offset = scroll.map(|s| s.offset).unwrap_or(Vector2 { x: 0.0, y: 0.0 });
    let origin = binding
        .and_then(|b| b.target())
        .and_then(|entity| regions.get(entity).ok())
        .map(|bounds| bounds.document_origin(offset));

    match origin {
        Some(origin) => state.observe_relative(page, origin),
        None => state.clear_relative(),
    }

    if let Some(bridge) = bridge {
        let _ = bridge.tx.send(TraceCmd::Sample(TraceSample {
            page,
            element: state.element(),
        }));
    }
}

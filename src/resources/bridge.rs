//! ECS resource that bridges the world with the background trace thread.
//!
//! Use [`setup_trace`] once during initialization to spawn the trace-logger
//! thread and insert the [`TraceBridge`] resource. Call [`shutdown_trace`]
//! during teardown to gracefully stop the thread.
//!
//! The pointer observer forwards each applied observation as a
//! [`TraceSample`]; external consumers register by channel rather than by
//! callback, so the observer never blocks on them.

use crate::systems::trace::trace_thread;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Sender, unbounded};
use raylib::prelude::Vector2;

/// One applied pointer observation, as forwarded to the trace thread.
#[derive(Debug, Clone, Copy)]
pub struct TraceSample {
    /// Absolute position in document space.
    pub page: Vector2,
    /// Element-relative position, when a region was bound.
    pub element: Option<Vector2>,
}

/// Commands accepted by the trace thread.
#[derive(Debug, Clone, Copy)]
pub enum TraceCmd {
    /// A pointer observation to record.
    Sample(TraceSample),
    /// Stop the thread.
    Shutdown,
}

/// Shared bridge between the ECS world and the trace thread.
///
/// Created by [`setup_trace`]. The pointer observer sends samples via
/// [`TraceBridge::tx`]; sends are fire-and-forget.
#[derive(Resource)]
pub struct TraceBridge {
    /// Sender for [`TraceCmd`] messages (ECS -> trace thread).
    pub tx: Sender<TraceCmd>,
    /// Join handle for the background trace thread.
    pub handle: std::thread::JoinHandle<()>,
}

/// Spawn the trace thread and register the bridge resource.
pub fn setup_trace(world: &mut World) {
    let (tx, rx) = unbounded::<TraceCmd>();

    let handle = std::thread::spawn(move || trace_thread(rx));

    world.insert_resource(TraceBridge { tx, handle });
}

/// Gracefully request shutdown of the trace thread and join it.
///
/// If the bridge resource exists, sends [`TraceCmd::Shutdown`], waits for
/// the thread to exit, and removes the resource from the world.
pub fn shutdown_trace(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<TraceBridge>() {
        let _ = bridge.tx.send(TraceCmd::Shutdown);
        let _ = bridge.handle.join();
    }
}

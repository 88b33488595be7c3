//! Pointer tracker integration tests.
//!
//! These tests drive the tracking subsystem against a headless `World`: no
//! window is opened, the pointer-movement signal is triggered directly. They
//! cover the observable contract of the tracker:
//!
//! 1. **Absolute tracking** – signals update document-space coordinates
//! 2. **Relative tracking** – bound regions produce element-relative fields
//! 3. **Scroll handling** – the region origin is offset by the page scroll
//! 4. **Lifecycle** – stop removes the subscription and the record; restart
//!    yields a fresh record; the page sweep tears the observer down too

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use cursortrace::components::persistent::Persistent;
use cursortrace::components::regionbounds::RegionBounds;
use cursortrace::events::pointer::PointerMovedEvent;
use cursortrace::resources::binding::RegionBinding;
use cursortrace::resources::pagescroll::PageScroll;
use cursortrace::resources::pointerstate::PointerState;
use cursortrace::tracker::{PointerTracker, despawn_page_entities};

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(PageScroll::new(
        Vector2 {
            x: 2000.0,
            y: 4000.0,
        },
        Vector2 {
            x: 1280.0,
            y: 720.0,
        },
    ));
    world.insert_resource(RegionBinding::default());
    world
}

fn signal(world: &mut World, x: f32, y: f32) {
    world.trigger(PointerMovedEvent {
        page: Vector2 { x, y },
    });
    world.flush();
}

fn state(world: &World) -> PointerState {
    *world
        .get_resource::<PointerState>()
        .expect("PointerState should be present while the tracker is active")
}

// =============================================================================
// Absolute tracking
// =============================================================================

#[test]
fn record_starts_empty() {
    let mut world = make_world();
    let _tracker = PointerTracker::start(&mut world);

    let s = state(&world);
    assert_eq!(s, PointerState::default());
    assert!(!s.has_observation());
}

#[test]
fn signal_without_binding_updates_absolute_only() {
    let mut world = make_world();
    let _tracker = PointerTracker::start(&mut world);

    signal(&mut world, 100.0, 200.0);

    let s = state(&world);
    assert_eq!(s.x, Some(100.0));
    assert_eq!(s.y, Some(200.0));
    assert!(s.element_x.is_none());
    assert!(s.element_y.is_none());
    assert!(s.element_position_x.is_none());
    assert!(s.element_position_y.is_none());
}

#[test]
fn every_signal_produces_an_update() {
    let mut world = make_world();
    let _tracker = PointerTracker::start(&mut world);

    for (x, y) in [(1.0, 2.0), (3.0, 4.0), (3.0, 900.0), (0.0, 0.0)] {
        signal(&mut world, x, y);
        let s = state(&world);
        assert_eq!(s.x, Some(x));
        assert_eq!(s.y, Some(y));
    }
}

// =============================================================================
// Relative tracking
// =============================================================================

#[test]
fn bound_region_produces_relative_fields() {
    let mut world = make_world();
    let region = world.spawn(RegionBounds::new(50.0, 50.0, 200.0, 100.0)).id();
    world.resource_mut::<RegionBinding>().bind(region);
    let _tracker = PointerTracker::start(&mut world);

    signal(&mut world, 120.0, 130.0);

    let s = state(&world);
    assert_eq!(s.element_position_x, Some(50.0));
    assert_eq!(s.element_position_y, Some(50.0));
    assert_eq!(s.element_x, Some(70.0));
    assert_eq!(s.element_y, Some(80.0));
}

#[test]
fn scrolled_page_offsets_region_origin() {
    let mut world = make_world();
    let region = world.spawn(RegionBounds::new(50.0, 50.0, 200.0, 100.0)).id();
    world.resource_mut::<RegionBinding>().bind(region);
    let _tracker = PointerTracker::start(&mut world);

    world
        .resource_mut::<PageScroll>()
        .scroll_to(Vector2 { x: 0.0, y: 200.0 });
    signal(&mut world, 120.0, 330.0);

    let s = state(&world);
    assert_eq!(s.element_position_x, Some(50.0));
    assert_eq!(s.element_position_y, Some(250.0));
    assert_eq!(s.element_x, Some(70.0));
    assert_eq!(s.element_y, Some(80.0));
}

#[test]
fn relative_identity_holds_for_every_signal() {
    let mut world = make_world();
    let region = world.spawn(RegionBounds::new(30.0, 40.0, 50.0, 60.0)).id();
    world.resource_mut::<RegionBinding>().bind(region);
    let _tracker = PointerTracker::start(&mut world);

    for (x, y, sy) in [(0.0, 0.0, 0.0), (640.0, 360.0, 120.0), (15.0, 999.0, 500.0)] {
        world
            .resource_mut::<PageScroll>()
            .scroll_to(Vector2 { x: 0.0, y: sy });
        signal(&mut world, x, y);
        let s = state(&world);
        assert_eq!(
            s.element_x.unwrap(),
            s.x.unwrap() - s.element_position_x.unwrap()
        );
        assert_eq!(
            s.element_y.unwrap(),
            s.y.unwrap() - s.element_position_y.unwrap()
        );
    }
}

#[test]
fn region_origin_is_recomputed_each_signal() {
    let mut world = make_world();
    let region = world.spawn(RegionBounds::new(50.0, 50.0, 10.0, 10.0)).id();
    world.resource_mut::<RegionBinding>().bind(region);
    let _tracker = PointerTracker::start(&mut world);

    signal(&mut world, 100.0, 100.0);
    assert_eq!(state(&world).element_position_x, Some(50.0));

    // Move the region; the next signal must see the new rectangle.
    world.entity_mut(region).insert(RegionBounds::new(
        80.0, 90.0, 10.0, 10.0,
    ));
    signal(&mut world, 100.0, 100.0);

    let s = state(&world);
    assert_eq!(s.element_position_x, Some(80.0));
    assert_eq!(s.element_position_y, Some(90.0));
    assert_eq!(s.element_x, Some(20.0));
    assert_eq!(s.element_y, Some(10.0));
}

#[test]
fn unbinding_clears_relative_fields() {
    let mut world = make_world();
    let region = world.spawn(RegionBounds::new(50.0, 50.0, 10.0, 10.0)).id();
    world.resource_mut::<RegionBinding>().bind(region);
    let _tracker = PointerTracker::start(&mut world);

    signal(&mut world, 60.0, 60.0);
    assert!(state(&world).element_x.is_some());

    world.resource_mut::<RegionBinding>().unbind();
    signal(&mut world, 61.0, 61.0);

    let s = state(&world);
    assert_eq!(s.x, Some(61.0));
    assert!(s.element_x.is_none());
    assert!(s.element_position_y.is_none());
}

#[test]
fn despawned_region_degrades_to_unbound() {
    let mut world = make_world();
    let region = world.spawn(RegionBounds::new(50.0, 50.0, 10.0, 10.0)).id();
    world.resource_mut::<RegionBinding>().bind(region);
    let _tracker = PointerTracker::start(&mut world);

    signal(&mut world, 60.0, 60.0);
    assert!(state(&world).element_x.is_some());

    world.despawn(region);
    signal(&mut world, 70.0, 70.0);

    let s = state(&world);
    assert_eq!(s.x, Some(70.0));
    assert!(s.element_x.is_none());
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn stop_removes_subscription_and_record() {
    let mut world = make_world();
    let tracker = PointerTracker::start(&mut world);

    signal(&mut world, 10.0, 10.0);
    assert!(tracker.is_active(&world));

    tracker.stop(&mut world);
    assert!(world.get_resource::<PointerState>().is_none());

    // A signal after teardown must not recreate or mutate anything.
    signal(&mut world, 999.0, 999.0);
    assert!(world.get_resource::<PointerState>().is_none());
}

#[test]
fn restart_yields_a_fresh_record() {
    let mut world = make_world();
    let tracker = PointerTracker::start(&mut world);
    signal(&mut world, 123.0, 456.0);
    tracker.stop(&mut world);

    let _tracker = PointerTracker::start(&mut world);
    let s = state(&world);
    assert_eq!(s, PointerState::default());

    signal(&mut world, 5.0, 6.0);
    assert_eq!(state(&world).x, Some(5.0));
}

#[test]
fn page_sweep_removes_the_observer() {
    let mut world = make_world();
    let tracker = PointerTracker::start(&mut world);
    signal(&mut world, 10.0, 20.0);

    despawn_page_entities(&mut world);
    assert!(!tracker.is_active(&world));

    // The record is still present until stop, but no longer updates.
    let before = state(&world);
    signal(&mut world, 500.0, 500.0);
    assert_eq!(state(&world), before);

    // stop() after the sweep is a clean no-op on the entity side.
    tracker.stop(&mut world);
    assert!(world.get_resource::<PointerState>().is_none());
}

#[test]
fn page_sweep_spares_persistent_entities() {
    let mut world = make_world();
    let kept = world.spawn((RegionBounds::new(0.0, 0.0, 1.0, 1.0), Persistent)).id();
    let gone = world.spawn(RegionBounds::new(0.0, 0.0, 1.0, 1.0)).id();

    despawn_page_entities(&mut world);

    assert!(world.get_entity(kept).is_ok());
    assert!(world.get_entity(gone).is_err());
}

#[test]
fn two_activations_do_not_share_state() {
    let mut world = make_world();
    let first = PointerTracker::start(&mut world);
    first.stop(&mut world);

    let second = PointerTracker::start(&mut world);
    signal(&mut world, 42.0, 43.0);

    // Only the live observer applied the signal; exactly one update.
    let s = state(&world);
    assert_eq!(s.x, Some(42.0));
    assert_eq!(s.y, Some(43.0));
    assert!(second.is_active(&world));
}

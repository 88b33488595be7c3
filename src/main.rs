//! Cursor Trace main entry point.
//!
//! A pointer-tracking demo written in Rust using:
//! - **raylib** for windowing, input, and drawing
//! - **bevy_ecs** for the world, systems, and observers
//!
//! The window shows a document larger than the viewport. Scroll with the
//! wheel or arrow keys; the HUD readout mirrors the live pointer record:
//! absolute document-space coordinates plus coordinates relative to the
//! bound region.
//!
//! # Project Structure
//!
//! - [`components`] – region bounds, page content, labels, markers
//! - [`events`] – the pointer-movement signal and overlay toggle
//! - [`resources`] – pointer record, scroll state, theme tokens, config
//! - [`systems`] – polling, scrolling, animation, rendering, tracing
//! - [`tracker`] – start/stop lifecycle of the tracking subscription
//!
//! # Main Loop
//!
//! 1. Load `config.ini` and the theme document, open the window
//! 2. Spawn the page (dots, tracked region, HUD, orbiter), bind the region,
//!    start the tracker
//! 3. Each frame: update time, run the schedule (scroll, poll, animate,
//!    readout), handle reload, draw
//! 4. On exit: stop the tracker, shut down the trace thread
//!
//! # Keys
//!
//! `B` bind/unbind the region · `R` reload the page · `F1` overlay ·
//! `Home` scroll to top
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod resources;
mod systems;
mod tracker;

use crate::components::dot::Dot;
use crate::components::label::{Label, Readout};
use crate::components::orbiter::Orbiter;
use crate::components::pageposition::PagePosition;
use crate::components::persistent::Persistent;
use crate::components::regionbounds::RegionBounds;
use crate::events::overlay::toggle_overlay_observer;
use crate::resources::binding::RegionBinding;
use crate::resources::bridge::{setup_trace, shutdown_trace};
use crate::resources::pagescroll::PageScroll;
use crate::resources::themestore::ThemeStore;
use crate::resources::trackerconfig::TrackerConfig;
use crate::resources::worldtime::WorldTime;
use crate::systems::hotkeys::update_hotkeys;
use crate::systems::orbit::orbit_system;
use crate::systems::pointer::poll_pointer;
use crate::systems::readout::update_readout_label;
use crate::systems::render::render_frame;
use crate::systems::scrolling::update_page_scroll;
use crate::systems::time::update_world_time;
use crate::tracker::{PointerTracker, despawn_page_entities};
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::*;
use std::path::PathBuf;

/// Cursor Trace
#[derive(Parser)]
#[command(
    version,
    about = "Cursor Trace: live pointer tracking over a scrollable page"
)]
struct Cli {
    /// Path to the configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to the theme document, overriding the configured one.
    #[arg(long, value_name = "PATH")]
    theme: Option<PathBuf>,

    /// Print the resolved theme document as JSON and exit.
    #[arg(long)]
    dump_theme: bool,
}

const DOT_COUNT: usize = 140;

/// Spawn the page content: scattered dots, the tracked region, the HUD
/// readout, and the orbit marker. Returns the region entity for binding.
fn spawn_page(world: &mut World) -> Entity {
    let (page_w, page_h) = {
        let config = world.resource::<TrackerConfig>();
        let (w, h) = config.page_size();
        (w as f32, h as f32)
    };

    let palette = [
        Color::LIGHTGRAY,
        Color::SKYBLUE,
        Color::new(200, 180, 220, 255),
        Color::new(170, 210, 180, 255),
    ];
    for _ in 0..DOT_COUNT {
        let x = fastrand::f32() * page_w;
        let y = fastrand::f32() * page_h;
        let radius = 2.0 + fastrand::f32() * 4.0;
        let color = palette[fastrand::usize(..palette.len())];
        world.spawn((PagePosition::new(x, y), Dot::new(radius, color)));
    }

    let region = world.spawn(RegionBounds::new(60.0, 120.0, 260.0, 160.0)).id();

    for family in ["primary", "secondary"] {
        if world.resource::<ThemeStore>().font_family(family).is_none() {
            log::warn!("Theme has no '{}' font family; using default font", family);
        }
    }
    world.spawn((
        Label::new(
            "",
            "primary",
            18.0,
            Color::DARKBLUE,
            Vector2 { x: 10.0, y: 10.0 },
        ),
        Readout,
    ));
    world.spawn(Label::new(
        "move the pointer; the panel tracks it",
        "secondary",
        12.0,
        Color::GRAY,
        Vector2 { x: 10.0, y: 32.0 },
    ));

    world.spawn(Orbiter::new("orbit"));

    world.flush();
    region
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => TrackerConfig::with_path(path),
        None => TrackerConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults

    let theme_path = cli.theme.unwrap_or_else(|| config.theme_path.clone());

    // Early-exit: print the resolved theme and quit (no window needed)
    if cli.dump_theme {
        match ThemeStore::load_from_file(&theme_path) {
            Ok(theme) => match theme.to_pretty_json() {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    log::info!("Cursor Trace starting");

    let theme = ThemeStore::load_from_file(&theme_path).unwrap_or_else(|e| {
        log::warn!("{e}; using built-in theme");
        ThemeStore::default()
    });

    let (window_width, window_height) = config.window_size();
    let (page_width, page_height) = config.page_size();

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Cursor Trace")
        .build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(PageScroll::new(
        Vector2 {
            x: page_width as f32,
            y: page_height as f32,
        },
        Vector2 {
            x: rl.get_screen_width() as f32,
            y: rl.get_screen_height() as f32,
        },
    ));
    world.insert_resource(RegionBinding::default());
    world.insert_resource(theme);
    world.insert_resource(config);

    setup_trace(&mut world);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    // The overlay observer survives page reloads.
    world.spawn((Observer::new(toggle_overlay_observer), Persistent));
    world.flush();

    // --------------- Page content + tracker ---------------
    let region = spawn_page(&mut world);
    world.resource_mut::<RegionBinding>().bind(region);
    let mut pointer_tracker = Some(PointerTracker::start(&mut world));

    let mut update = Schedule::default();
    update.add_systems(update_page_scroll);
    update.add_systems(update_hotkeys);
    update.add_systems(poll_pointer.after(update_page_scroll));
    update.add_systems(orbit_system);
    update.add_systems(update_readout_label.after(poll_pointer));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Track window resizes so scroll clamping and culling stay correct.
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        world
            .resource_mut::<PageScroll>()
            .set_viewport(new_w as f32, new_h as f32);

        // Page reload: sweep everything non-persistent (including the
        // tracker observer), then rebuild with a fresh record.
        let reload = world
            .non_send_resource::<raylib::RaylibHandle>()
            .is_key_pressed(KeyboardKey::KEY_R);
        if reload {
            log::info!("Reloading page");
            despawn_page_entities(&mut world);
            if let Some(tracker) = pointer_tracker.take() {
                tracker.stop(&mut world);
            }
            let region = spawn_page(&mut world);
            world.resource_mut::<RegionBinding>().bind(region);
            pointer_tracker = Some(PointerTracker::start(&mut world));
        }

        render_frame(&mut world);
    }

    // --------------- Teardown ---------------
    if let Some(tracker) = pointer_tracker.take() {
        tracker.stop(&mut world);
    }
    shutdown_trace(&mut world);
}

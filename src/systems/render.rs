//! Frame rendering.
//!
//! [`render_frame`] is called from the main loop with exclusive world
//! access. Draw data is collected from the ECS first, then the Raylib
//! handle is taken out of the world for the drawing scope, so the two
//! borrows never overlap.
//!
//! Draw order: page content (offset by the scroll), the tracked region,
//! the orbit marker and crosshair at the pointer, HUD labels, and finally
//! the diagnostic overlay when
//! [`OverlayMode`](crate::resources::overlay::OverlayMode) is present.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::dot::Dot;
use crate::components::label::Label;
use crate::components::orbiter::Orbiter;
use crate::components::pageposition::PagePosition;
use crate::components::regionbounds::RegionBounds;
use crate::resources::binding::RegionBinding;
use crate::resources::overlay::OverlayMode;
use crate::resources::pagescroll::PageScroll;
use crate::resources::pointerstate::PointerState;
use crate::resources::themestore::ThemeStore;

/// Draw one frame from the current world state.
pub fn render_frame(world: &mut World) {
    let scroll = *world.resource::<PageScroll>();
    let overlay = world.get_resource::<OverlayMode>().is_some();
    let state = world.get_resource::<PointerState>().copied();
    let bound_target = world.resource::<RegionBinding>().target();
    let pointer_viewport = state
        .and_then(|s| s.page())
        .map(|page| scroll.to_viewport(page));

    // Page dots, culled to the viewport.
    let dots: Vec<(Vector2, f32, Color)> = {
        let mut q = world.query::<(&PagePosition, &Dot)>();
        q.iter(world)
            .filter_map(|(page_pos, dot)| {
                let vp = scroll.to_viewport(page_pos.pos);
                let visible = vp.x >= -dot.radius
                    && vp.x <= scroll.viewport.x + dot.radius
                    && vp.y >= -dot.radius
                    && vp.y <= scroll.viewport.y + dot.radius;
                if visible {
                    Some((vp, dot.radius, dot.color))
                } else {
                    None
                }
            })
            .collect()
    };

    let regions: Vec<(Entity, RegionBounds)> = {
        let mut q = world.query::<(Entity, &RegionBounds)>();
        q.iter(world).map(|(e, b)| (e, *b)).collect()
    };

    // Orbit marker positions around the pointer, radius from the theme.
    let orbit_markers: Vec<Vector2> = match pointer_viewport {
        Some(center) => {
            let mut q = world.query::<&Orbiter>();
            let theme = world.resource::<ThemeStore>();
            q.iter(world)
                .filter_map(|orbiter| {
                    let (_, track) = theme.animation(&orbiter.animation)?;
                    let rad = orbiter.angle.to_radians();
                    Some(Vector2 {
                        x: center.x + rad.cos() * track.radius,
                        y: center.y + rad.sin() * track.radius,
                    })
                })
                .collect()
        }
        None => Vec::new(),
    };

    let labels: Vec<Label> = {
        let mut q = world.query::<&Label>();
        q.iter(world).cloned().collect()
    };

    let breakpoint = {
        let theme = world.resource::<ThemeStore>();
        theme
            .breakpoint_for(scroll.viewport.x as u32)
            .map(|s| s.to_string())
    };

    let thread = world
        .remove_non_send_resource::<raylib::RaylibThread>()
        .expect("RaylibThread missing from world");
    let mut rl = world
        .remove_non_send_resource::<raylib::RaylibHandle>()
        .expect("RaylibHandle missing from world");

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::RAYWHITE);

        for (pos, radius, color) in dots.iter() {
            d.draw_circle_v(*pos, *radius, *color);
        }

        for (entity, bounds) in regions.iter() {
            let hovered = pointer_viewport
                .map(|p| bounds.contains_viewport_point(p))
                .unwrap_or(false);
            let fill = if hovered {
                Color::new(102, 191, 255, 90)
            } else {
                Color::new(102, 191, 255, 40)
            };
            d.draw_rectangle(
                bounds.pos.x as i32,
                bounds.pos.y as i32,
                bounds.size.x as i32,
                bounds.size.y as i32,
                fill,
            );
            let outline = if bound_target == Some(*entity) {
                Color::BLUE
            } else {
                Color::GRAY
            };
            d.draw_rectangle_lines(
                bounds.pos.x as i32,
                bounds.pos.y as i32,
                bounds.size.x as i32,
                bounds.size.y as i32,
                outline,
            );
        }

        if let Some(center) = pointer_viewport {
            d.draw_line_v(
                Vector2 {
                    x: center.x - 8.0,
                    y: center.y,
                },
                Vector2 {
                    x: center.x + 8.0,
                    y: center.y,
                },
                Color::MAROON,
            );
            d.draw_line_v(
                Vector2 {
                    x: center.x,
                    y: center.y - 8.0,
                },
                Vector2 {
                    x: center.x,
                    y: center.y + 8.0,
                },
                Color::MAROON,
            );
        }

        for pos in orbit_markers.iter() {
            d.draw_circle_v(*pos, 4.0, Color::ORANGE);
        }

        for label in labels.iter() {
            d.draw_text(
                &label.content,
                label.pos.x as i32,
                label.pos.y as i32,
                label.font_size as i32,
                label.color,
            );
        }

        if overlay {
            let base = scroll.viewport.y as i32 - 70;
            let record = match state {
                Some(s) => format!(
                    "record: x={:?} y={:?} ex={:?} ey={:?} ox={:?} oy={:?}",
                    s.x, s.y, s.element_x, s.element_y, s.element_position_x, s.element_position_y
                ),
                None => "record: <none>".to_string(),
            };
            d.draw_text(&record, 10, base, 10, Color::DARKGRAY);
            d.draw_text(
                &format!(
                    "scroll: ({:.0}, {:.0}) / ({:.0}, {:.0})",
                    scroll.offset.x,
                    scroll.offset.y,
                    scroll.max_offset().x,
                    scroll.max_offset().y
                ),
                10,
                base + 15,
                10,
                Color::DARKGRAY,
            );
            d.draw_text(
                &format!(
                    "breakpoint: {}",
                    breakpoint.as_deref().unwrap_or("<none>")
                ),
                10,
                base + 30,
                10,
                Color::DARKGRAY,
            );
            d.draw_text(
                "B: bind/unbind  R: reload  F1: overlay  Home: top",
                10,
                base + 45,
                10,
                Color::DARKGRAY,
            );
        }

        d.draw_fps(scroll.viewport.x as i32 - 90, 10);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}

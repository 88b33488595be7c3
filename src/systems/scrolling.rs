//! Page scrolling system.
//!
//! Translates mouse-wheel and arrow-key input into changes of the
//! [`PageScroll`](crate::resources::pagescroll::PageScroll) offset. Wheel
//! notches jump by the configured step; held keys scroll continuously at the
//! configured speed.

use bevy_ecs::prelude::*;
use raylib::prelude::{KeyboardKey, Vector2};

use crate::resources::pagescroll::PageScroll;
use crate::resources::trackerconfig::TrackerConfig;
use crate::resources::worldtime::WorldTime;

/// Apply wheel and key input to the scroll offset.
pub fn update_page_scroll(
    rl: NonSend<raylib::RaylibHandle>,
    mut scroll: ResMut<PageScroll>,
    config: Res<TrackerConfig>,
    time: Res<WorldTime>,
) {
    let mut delta = Vector2 { x: 0.0, y: 0.0 };

    let wheel = rl.get_mouse_wheel_move();
    if wheel != 0.0 {
        // Wheel up moves the view toward the top of the document.
        delta.y -= wheel * config.scroll_step;
    }

    let keyed = config.scroll_speed * time.delta;
    if rl.is_key_down(KeyboardKey::KEY_DOWN) {
        delta.y += keyed;
    }
    if rl.is_key_down(KeyboardKey::KEY_UP) {
        delta.y -= keyed;
    }
    if rl.is_key_down(KeyboardKey::KEY_RIGHT) {
        delta.x += keyed;
    }
    if rl.is_key_down(KeyboardKey::KEY_LEFT) {
        delta.x -= keyed;
    }

    if rl.is_key_pressed(KeyboardKey::KEY_HOME) {
        scroll.scroll_to(Vector2 { x: 0.0, y: 0.0 });
        return;
    }

    if delta.x != 0.0 || delta.y != 0.0 {
        scroll.scroll_by(delta);
    }
}

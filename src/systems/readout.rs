//! Readout label system.
//!
//! Synchronizes the HUD [`Label`](crate::components::label::Label) marked
//! with [`Readout`](crate::components::label::Readout) with the current
//! [`PointerState`](crate::resources::pointerstate::PointerState), so the
//! record is visible without the overlay.

use bevy_ecs::prelude::*;

use crate::components::label::{Label, Readout};
use crate::resources::binding::RegionBinding;
use crate::resources::pointerstate::PointerState;

fn fmt_field(value: Option<f32>) -> String {
    match value {
        Some(v) => format!("{:.0}", v),
        None => "-".to_string(),
    }
}

/// Render the pointer record into the readout label's content.
pub fn update_readout_label(
    state: Option<Res<PointerState>>,
    binding: Option<Res<RegionBinding>>,
    mut query: Query<&mut Label, With<Readout>>,
) {
    let bound = binding.map(|b| b.is_bound()).unwrap_or(false);
    let content = match state.as_deref() {
        Some(state) => format!(
            "page ({}, {})  element ({}, {})  origin ({}, {})  [{}]",
            fmt_field(state.x),
            fmt_field(state.y),
            fmt_field(state.element_x),
            fmt_field(state.element_y),
            fmt_field(state.element_position_x),
            fmt_field(state.element_position_y),
            if bound { "bound" } else { "unbound" },
        ),
        None => "tracker stopped".to_string(),
    };

    for mut label in query.iter_mut() {
        if label.content != content {
            label.set_content(content.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_field() {
        assert_eq!(fmt_field(Some(120.0)), "120");
        assert_eq!(fmt_field(None), "-");
    }
}

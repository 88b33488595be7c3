//! ECS components for entities.
//!
//! This module groups the component types that can be attached to entities:
//! the tracked region's bounds, page content, HUD text, and lifecycle
//! markers.
//!
//! Submodules overview:
//! - [`dot`] – filled circle scattered across the scrollable page
//! - [`label`] – viewport-anchored text, including the live readout
//! - [`orbiter`] – playback state for the pointer-orbiting marker
//! - [`pageposition`] – document-space position of page content
//! - [`persistent`] – marker for entities that survive page reloads
//! - [`regionbounds`] – viewport-anchored rectangle of the tracked region

pub mod dot;
pub mod label;
pub mod orbiter;
pub mod pageposition;
pub mod persistent;
pub mod regionbounds;

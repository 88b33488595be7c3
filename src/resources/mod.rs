//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `binding` – optional reference to the tracked region entity
//! - `bridge` – channel bridge to the background trace thread
//! - `overlay` – presence toggles the diagnostic overlay
//! - `pagescroll` – scroll offset of the document within the viewport
//! - `pointerstate` – the latest pointer observation record
//! - `themestore` – static design-token tables loaded from JSON
//! - `trackerconfig` – INI-backed demo configuration
//! - `worldtime` – simulation time and delta

pub mod binding;
pub mod bridge;
pub mod overlay;
pub mod pagescroll;
pub mod pointerstate;
pub mod themestore;
pub mod trackerconfig;
pub mod worldtime;

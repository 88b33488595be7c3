//! Event types and observers.
//!
//! This module groups the events exchanged across systems and the observers
//! that react to them. Observers are entities, so a subscription lives
//! exactly as long as its observer entity does.
//!
//! Submodules:
//! - [`overlay`] – toggle the diagnostic overlay on/off
//! - [`pointer`] – the pointer-movement signal and the tracking observer

pub mod overlay;
pub mod pointer;

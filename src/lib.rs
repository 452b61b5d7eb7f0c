//! Ambient particle orb, floating destination labels and transcript reveal
//! for the Voyage voice assistant.
//!
//! The simulation, painter and loop drivers are platform-neutral and run on
//! the host in tests; the browser glue (`requestAnimationFrame`, Canvas 2D,
//! DOM overlays and the `#[wasm_bindgen]` exports) only builds for wasm32.

pub mod constants;
pub mod core;
pub mod error;
pub mod frame;
pub mod render;
pub mod schedule;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod timers;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{LocationOverlay, ParticleCanvas, TranscriptView};

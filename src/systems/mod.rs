//! Application systems
//!
//! The loop pieces main.rs wires together: tick execution, pacing, the
//! window, and GPU presentation.

mod pacing;
mod render;
mod simulation;
mod window;

pub use pacing::FramePacer;
pub use render::RenderSystem;
pub use simulation::{pixel_to_cell, RenderTarget, SimulationSystem, TickOutcome};
pub use window::{WindowError, WindowSystem};

//! Sandfall - falling-sand cellular automaton
//!
//! A grid of cells updated each tick under simple gravity rules, drawn to a
//! window, with mouse clicks depositing sand.
//!
//! The grid model lives in [`sandfall_grid`]; this crate wires it to
//! configuration, input, pacing, and rendering.

pub mod config;
pub mod input;
pub mod systems;

pub use sandfall_grid::{Cell, Grid, Palette};
pub use sandfall_input::{PointerButton, SimEvent};

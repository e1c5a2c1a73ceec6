//! Grid model for the sandfall cellular automaton
//!
//! This crate owns the simulation state and knows nothing about windows,
//! input or rendering:
//!
//! - [`Cell`] - The state of a single grid cell
//! - [`Grid`] - Fixed-size row-major cell buffer with the falling-sand update rule
//! - [`Palette`] - Direct cell-to-colour mapping used by renderers

mod cell;
mod grid;
mod palette;

pub use cell::Cell;
pub use grid::Grid;
pub use palette::{Palette, Rgba};

//! Input handling for sandfall
//!
//! Turns platform pointer input into the discrete per-tick events the
//! simulation loop consumes.

mod event;
mod pointer;

pub use event::{PointerButton, SimEvent};
pub use pointer::PointerTracker;

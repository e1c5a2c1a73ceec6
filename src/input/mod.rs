//! Input handling module
//!
//! Provides input mapping from raw window events to simulation events.

mod input_mapper;

pub use input_mapper::InputMapper;

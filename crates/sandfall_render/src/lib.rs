//! Grid rendering for sandfall
//!
//! The grid is rasterised on the CPU into a [`FrameBuffer`], one filled
//! `cell_size × cell_size` square per cell, then uploaded to a texture and
//! blitted to the window surface.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`framebuffer::FrameBuffer`] - CPU-side RGBA pixels for one frame
//! - [`pipeline::BlitPipeline`] - Texture upload and full-screen draw

pub mod context;
pub mod error;
pub mod framebuffer;
pub mod pipeline;

pub use error::RenderError;
pub use framebuffer::FrameBuffer;

// Re-export grid types used in the rendering API
pub use sandfall_grid::{Cell, Grid, Palette, Rgba};

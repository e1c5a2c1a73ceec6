//! GPU pipelines
//!
//! - [`BlitPipeline`] - Uploads a [`FrameBuffer`](crate::FrameBuffer) and draws it to the surface

mod blit_pipeline;

pub use blit_pipeline::BlitPipeline;

//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - CPU frame rasterisation
//! - Frame upload and presentation

use std::sync::Arc;
use winit::window::Window;
use sandfall_grid::{Grid, Palette};
use sandfall_render::{
    context::RenderContext,
    pipeline::BlitPipeline,
    FrameBuffer, RenderError,
};

use super::RenderTarget;

/// Draws the grid to the window surface
pub struct RenderSystem {
    context: RenderContext,
    blit_pipeline: BlitPipeline,
    frame: FrameBuffer,
    palette: Palette,
}

impl RenderSystem {
    /// Create render system for a window showing `grid`
    pub fn new(
        window: Arc<Window>,
        grid: &Grid,
        cell_size: u32,
        palette: Palette,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::new(window, vsync))?;
        let frame = FrameBuffer::for_grid(grid, cell_size);
        let blit_pipeline = BlitPipeline::new(
            &context.device,
            context.config.format,
            frame.width(),
            frame.height(),
        );

        log::info!(
            "Frame {}x{} px on {:?} surface",
            frame.width(),
            frame.height(),
            context.config.format
        );

        Ok(Self {
            context,
            blit_pipeline,
            frame,
            palette,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }

    /// Render a single frame
    pub fn render_frame(&mut self, grid: &Grid) -> Result<(), RenderError> {
        self.frame.paint(grid, &self.palette);
        self.blit_pipeline.upload(&self.context.queue, &self.frame);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                self.context.reconfigure();
                return Err(RenderError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.blit_pipeline.render(&mut encoder, &view);

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

impl RenderTarget for RenderSystem {
    fn draw(&mut self, grid: &Grid) -> Result<(), RenderError> {
        self.render_frame(grid)
    }
}

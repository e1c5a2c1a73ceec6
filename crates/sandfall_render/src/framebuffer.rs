//! CPU-side frame rasterisation

use sandfall_grid::{Grid, Palette, Rgba};

/// RGBA pixels for one frame, row-major, top row first
pub struct FrameBuffer {
    width: u32,
    height: u32,
    cell_size: u32,
    pixels: Vec<Rgba>,
}

impl FrameBuffer {
    /// Allocate a frame large enough to show a `columns × rows` grid
    pub fn new(columns: usize, rows: usize, cell_size: u32) -> Self {
        let width = columns as u32 * cell_size;
        let height = rows as u32 * cell_size;
        Self {
            width,
            height,
            cell_size,
            pixels: vec![Palette::BLACK; (width * height) as usize],
        }
    }

    /// Allocate a frame matching a grid
    pub fn for_grid(grid: &Grid, cell_size: u32) -> Self {
        Self::new(grid.width(), grid.height(), cell_size)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at `(x, y)`, if inside the frame
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        (x < self.width && y < self.height).then(|| self.pixels[(y * self.width + x) as usize])
    }

    /// Raw bytes for texture upload, 4 per pixel
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Bytes per pixel row
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }

    /// Draw every grid cell as a filled square at `(col * cell_size, row * cell_size)`
    ///
    /// Cells that fall outside the frame are clipped.
    pub fn paint(&mut self, grid: &Grid, palette: &Palette) {
        let cs = self.cell_size;
        for (row, cells) in grid.rows().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                self.fill_rect(col as u32 * cs, row as u32 * cs, cs, cs, palette.color(cell));
            }
        }
    }

    /// Fill an axis-aligned rectangle, clipped to the frame
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        if x >= x_end {
            return;
        }
        for py in y..y_end {
            let start = (py * self.width + x) as usize;
            let end = (py * self.width + x_end) as usize;
            self.pixels[start..end].fill(color);
        }
    }
}

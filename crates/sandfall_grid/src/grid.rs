//! Falling-sand grid
//!
//! A fixed-size buffer of [`Cell`]s stored row-major (`row * width + col`),
//! row 0 at the top. Dimensions never change after construction.

use crate::Cell;

/// The simulation grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of `width × height` cells, all [`Cell::Empty`]
    pub fn new(width: usize, height: usize) -> Self {
        log::debug!("Allocating {}x{} grid", width, height);
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Create a grid covering a pixel resolution at the given cell size
    ///
    /// Partial cells at the right and bottom edges are dropped.
    ///
    /// # Panics
    /// Panics if `cell_size` is zero.
    pub fn from_resolution(pixel_width: u32, pixel_height: u32, cell_size: u32) -> Self {
        assert!(cell_size > 0, "cell size must be non-zero");
        Self::new(
            (pixel_width / cell_size) as usize,
            (pixel_height / cell_size) as usize,
        )
    }

    /// Number of columns
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` lies inside the grid
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Read the cell at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y).then(|| self.cells[self.index(x, y)])
    }

    /// Write a single cell
    ///
    /// Out-of-bounds coordinates leave the grid untouched. Returns whether
    /// the write happened.
    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let i = self.index(x, y);
        self.cells[i] = cell;
        true
    }

    /// Reset every cell to [`Cell::Empty`]
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() rejects zero; a zero-width grid has no cells anyway
        self.cells.chunks(self.width.max(1))
    }

    /// Number of cells in the given state
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Advance the simulation by one tick, in place
    ///
    /// Rows are scanned bottom to top starting at the second-to-last row, so
    /// a grain that has just moved lands in a row that was already visited
    /// and cannot move again this tick. Within a row, columns go left to
    /// right. Each grain tries, in order: straight down, down-left,
    /// down-right; otherwise it stays. The bottom row is never a source.
    pub fn update(&mut self) {
        let width = self.width;
        if width == 0 || self.height < 2 {
            return;
        }

        for row in (0..self.height - 1).rev() {
            let row_start = row * width;
            for col in 0..width {
                let src = row_start + col;
                if self.cells[src] != Cell::Sand {
                    continue;
                }

                let below = src + width;
                let dst = if self.cells[below].is_empty() {
                    Some(below)
                } else if col > 0 && self.cells[below - 1].is_empty() {
                    Some(below - 1)
                } else if col + 1 < width && self.cells[below + 1].is_empty() {
                    Some(below + 1)
                } else {
                    None
                };

                if let Some(dst) = dst {
                    self.cells[src] = Cell::Empty;
                    self.cells[dst] = Cell::Sand;
                }
            }
        }
    }
}

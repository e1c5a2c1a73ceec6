//! Cell-to-colour mapping

use crate::Cell;

/// RGBA colour, 8 bits per channel
pub type Rgba = [u8; 4];

/// Direct mapping from cell state to display colour
///
/// Stored as an array indexed by [`Cell::index`], so lookups are a single
/// bounds-free index and every cell kind always has a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgba; Cell::COUNT],
}

impl Palette {
    pub const BLACK: Rgba = [0, 0, 0, 255];
    pub const SAND: Rgba = [194, 178, 128, 255];

    /// Create a palette with explicit colours for each cell kind
    pub fn new(empty: Rgba, sand: Rgba) -> Self {
        Self {
            colors: [empty, sand],
        }
    }

    /// Colour for a cell
    #[inline]
    pub fn color(&self, cell: Cell) -> Rgba {
        self.colors[cell.index()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Self::BLACK, Self::SAND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colors() {
        let palette = Palette::default();
        assert_eq!(palette.color(Cell::Empty), [0, 0, 0, 255]);
        assert_eq!(palette.color(Cell::Sand), [194, 178, 128, 255]);
    }

    #[test]
    fn test_explicit_colors() {
        let palette = Palette::new([10, 20, 30, 255], Palette::SAND);
        assert_eq!(palette.color(Cell::Empty), [10, 20, 30, 255]);
        assert_eq!(palette.color(Cell::Sand), Palette::SAND);
    }
}

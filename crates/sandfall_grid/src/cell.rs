//! Cell states

use serde::{Deserialize, Serialize};

/// State of a single grid cell
///
/// The value alone determines both behaviour and display colour; there is
/// no per-cell velocity or colour data.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty = 0,
    Sand = 1,
}

impl Cell {
    /// Number of cell kinds
    pub const COUNT: usize = 2;

    /// Whether a grain can move into this cell
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Index into per-kind lookup tables
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

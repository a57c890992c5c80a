//! Grid addresses and ship orientations.

use core::fmt;

/// Orientation of a ship on the ocean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Segments extend along the column axis.
    Horizontal,
    /// Segments extend along the row axis.
    Vertical,
}

impl Orientation {
    /// Both orientations, horizontal first.
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// Coordinates of a `size`-segment ship whose first segment sits at `head`.
    pub fn segments(self, head: Coordinate, size: usize) -> impl Iterator<Item = Coordinate> {
        (0..size).map(move |i| head.offset(self, i))
    }
}

/// A cell address on a layered ocean: `row`, `col` and `level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    row: usize,
    col: usize,
    level: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize, level: usize) -> Self {
        Self { row, col, level }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// The coordinate `steps` cells further along `orientation`'s axis.
    /// Level never changes.
    pub fn offset(self, orientation: Orientation, steps: usize) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(self.row, self.col + steps, self.level),
            Orientation::Vertical => Self::new(self.row + steps, self.col, self.level),
        }
    }
}

impl From<(usize, usize, usize)> for Coordinate {
    fn from((row, col, level): (usize, usize, usize)) -> Self {
        Self::new(row, col, level)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.level)
    }
}

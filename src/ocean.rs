//! Dense, bounds-checked layered grid of cell states.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{CellState, NavyError};
use crate::coordinate::Coordinate;

/// A `size × size × levels` grid. Cells are stored level-major, then by row.
#[derive(Clone, PartialEq, Eq)]
pub struct Ocean {
    size: usize,
    levels: usize,
    cells: Vec<CellState>,
}

impl Ocean {
    /// Ocean with every cell set to `fill`.
    pub fn filled(size: usize, levels: usize, fill: CellState) -> Self {
        Self {
            size,
            levels,
            cells: vec![fill; size * size * levels],
        }
    }

    /// Ocean from cells already laid out level-major.
    pub fn from_cells(
        size: usize,
        levels: usize,
        cells: Vec<CellState>,
    ) -> Result<Self, NavyError> {
        let expected = size.checked_mul(size).and_then(|n| n.checked_mul(levels));
        if expected != Some(cells.len()) {
            return Err(NavyError::InvalidSnapshot("ocean length does not match dimensions"));
        }
        Ok(Self { size, levels, cells })
    }

    /// Side length of each level.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn levels(&self) -> usize {
        self.levels
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.index(coord).is_some()
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        if coord.row() < self.size && coord.col() < self.size && coord.level() < self.levels {
            Some((coord.level() * self.size + coord.row()) * self.size + coord.col())
        } else {
            None
        }
    }

    fn coordinate(&self, index: usize) -> Coordinate {
        let per_level = self.size * self.size;
        let level = index / per_level;
        let rest = index % per_level;
        Coordinate::new(rest / self.size, rest % self.size, level)
    }

    /// Cell at `coord`.
    pub fn get(&self, coord: Coordinate) -> Result<CellState, NavyError> {
        self.index(coord)
            .map(|i| self.cells[i])
            .ok_or(NavyError::OutOfBounds { coordinate: coord })
    }

    /// Overwrite the cell at `coord`.
    pub fn set(&mut self, coord: Coordinate, state: CellState) -> Result<(), NavyError> {
        let i = self
            .index(coord)
            .ok_or(NavyError::OutOfBounds { coordinate: coord })?;
        self.cells[i] = state;
        Ok(())
    }

    /// Raw cells in storage order.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Every cell with its coordinate, in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| (self.coordinate(i), state))
    }

    /// Number of cells matching `pred`.
    pub fn count(&self, pred: impl Fn(&CellState) -> bool) -> usize {
        self.cells.iter().filter(|c| pred(c)).count()
    }
}

impl fmt::Debug for Ocean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ocean<{}x{}x{}>:", self.size, self.size, self.levels)?;
        write!(f, "{}", self)
    }
}

impl fmt::Display for Ocean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in 0..self.levels {
            writeln!(f, "level {}", level)?;
            for row in 0..self.size {
                for col in 0..self.size {
                    let i = (level * self.size + row) * self.size + col;
                    write!(f, "{} ", self.cells[i].symbol())?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

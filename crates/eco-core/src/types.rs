//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::{Error, Result};

/// Unique identifier for a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// (row, column) offsets of the 3x3 block around a cell, in scan order.
///
/// The centre offset `(0, 0)` is part of the block. Neighbor queries match it
/// against the target like any other cell.
pub const NEIGHBORHOOD: [(isize, isize); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Grid position as (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shift by an offset, returning `None` if the result leaves a `size`x`size` grid
    pub fn offset(&self, d_row: isize, d_col: isize, size: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let shifted = Self { row, col };
        shifted.in_bounds(size).then_some(shifted)
    }

    pub fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Content of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Plant,
    Herbivore,
    Carnivore,
}

impl Cell {
    /// Single-character symbol used by the text rendering
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Plant => 'P',
            Cell::Herbivore => 'H',
            Cell::Carnivore => 'C',
        }
    }

    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            ' ' | '.' => Ok(Cell::Empty),
            'P' => Ok(Cell::Plant),
            'H' => Ok(Cell::Herbivore),
            'C' => Ok(Cell::Carnivore),
            other => Err(Error::InvalidSymbol(other)),
        }
    }

    /// Herbivores and carnivores move; plants and empty cells never do
    pub fn is_mobile(&self) -> bool {
        matches!(self, Cell::Herbivore | Cell::Carnivore)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

//! Square 2D grid of cells.

use eco_core::{Cell, Coordinate, Densities, EcosystemConfig, Error, PopulationCounts, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bounded (non-wrapping) square grid, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked serialized form; validated on the way into [`Grid`]
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = Error;

    fn try_from(raw: RawGrid) -> Result<Self> {
        let mut grid = Self::new(raw.size)?;
        if raw.cells.len() != grid.cells.len() {
            return Err(Error::InvalidLayout(format!(
                "{} cells for a {}x{} grid",
                raw.cells.len(),
                raw.size,
                raw.size
            )));
        }
        grid.cells = raw.cells;
        Ok(grid)
    }
}

impl Grid {
    /// Create a grid with every cell empty
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidGridSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Fill a grid with one uniform draw per cell, in row-major order
    pub fn random<R: Rng + ?Sized>(
        size: usize,
        densities: &Densities,
        rng: &mut R,
    ) -> Result<Self> {
        densities.validate()?;
        let mut grid = Self::new(size)?;
        for cell in &mut grid.cells {
            let roll = rng.gen::<f64>();
            *cell = densities.classify(roll);
        }
        Ok(grid)
    }

    /// Create a grid from ecosystem configuration
    pub fn from_config<R: Rng + ?Sized>(config: &EcosystemConfig, rng: &mut R) -> Result<Self> {
        Self::random(config.size, &config.densities, rng)
    }

    /// Parse a grid from rows of cell symbols (`P`, `H`, `C`, and `.` or space for empty)
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let mut grid = Self::new(rows.len())?;
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != grid.size {
                return Err(Error::InvalidLayout(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    symbols.len(),
                    grid.size
                )));
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                grid.set(Coordinate::new(row, col), Cell::from_symbol(symbol)?)?;
            }
        }
        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the cell at a coordinate
    pub fn get(&self, at: Coordinate) -> Result<Cell> {
        let index = self.index(at)?;
        Ok(self.cells[index])
    }

    /// Set the cell at a coordinate
    pub fn set(&mut self, at: Coordinate, cell: Cell) -> Result<()> {
        let index = self.index(at)?;
        self.cells[index] = cell;
        Ok(())
    }

    pub fn counts(&self) -> PopulationCounts {
        self.cells.iter().collect()
    }

    fn index(&self, at: Coordinate) -> Result<usize> {
        if !at.in_bounds(self.size) {
            return Err(Error::InvalidCoordinate {
                row: at.row,
                col: at.col,
                size: self.size,
            });
        }
        Ok(at.row * self.size + at.col)
    }

    /// Get coordinate from index
    pub fn index_to_coordinate(&self, index: usize) -> Coordinate {
        Coordinate::new(index / self.size, index % self.size)
    }

    /// Iterator over all cells with coordinates
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (self.index_to_coordinate(i), *cell))
    }

    /// Iterator over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }
}

impl fmt::Display for Grid {
    /// One line per row, each symbol followed by a single space
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{} ", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Neighbor queries over the 3x3 block around a cell.

use crate::grid::Grid;
use eco_core::{Cell, Coordinate, Result, NEIGHBORHOOD};

/// Coordinates around `at` whose content equals `target`, in scan order.
///
/// Scans row offsets -1..=1 and, within each, column offsets -1..=1. The
/// centre cell is scanned too. Coordinates outside the grid are skipped.
pub fn find_matching(grid: &Grid, at: Coordinate, target: Cell) -> Result<Vec<Coordinate>> {
    // Validates the origin itself
    grid.get(at)?;

    let mut matches = Vec::new();
    for (d_row, d_col) in NEIGHBORHOOD {
        let Some(candidate) = at.offset(d_row, d_col, grid.size()) else {
            continue;
        };
        if grid.get(candidate)? == target {
            matches.push(candidate);
        }
    }
    Ok(matches)
}

pub fn empty_neighbors(grid: &Grid, at: Coordinate) -> Result<Vec<Coordinate>> {
    find_matching(grid, at, Cell::Empty)
}

/// Prey search for carnivores
pub fn herbivore_neighbors(grid: &Grid, at: Coordinate) -> Result<Vec<Coordinate>> {
    find_matching(grid, at, Cell::Herbivore)
}

//! Movement rules for herbivores and carnivores.

use crate::grid::Grid;
use crate::neighbors::{empty_neighbors, herbivore_neighbors};
use eco_core::{Cell, Coordinate, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Outcome of applying a movement rule to one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// No candidate cell; nothing changed
    Stayed { at: Coordinate },
    /// Organism moved into an empty cell
    Relocated { from: Coordinate, to: Coordinate },
    /// Carnivore moved onto a herbivore, destroying it
    Consumed { from: Coordinate, prey: Coordinate },
}

impl Move {
    /// Cell now holding the organism that acted
    pub fn destination(&self) -> Coordinate {
        match *self {
            Move::Stayed { at } => at,
            Move::Relocated { to, .. } => to,
            Move::Consumed { prey, .. } => prey,
        }
    }
}

/// Apply whichever rule the cell's content calls for.
///
/// Returns `None` for plants and empty cells.
pub fn apply<R: Rng + ?Sized>(
    grid: &mut Grid,
    at: Coordinate,
    rng: &mut R,
) -> Result<Option<Move>> {
    let cell = grid.get(at)?;
    if !cell.is_mobile() {
        return Ok(None);
    }

    let outcome = if cell == Cell::Carnivore {
        move_carnivore(grid, at, rng)?
    } else {
        move_herbivore(grid, at, rng)?
    };
    Ok(Some(outcome))
}

/// Move a herbivore to a random empty neighbor, if there is one
pub fn move_herbivore<R: Rng + ?Sized>(
    grid: &mut Grid,
    at: Coordinate,
    rng: &mut R,
) -> Result<Move> {
    relocate(grid, at, Cell::Herbivore, rng)
}

/// Eat a random neighboring herbivore, otherwise move like a herbivore
pub fn move_carnivore<R: Rng + ?Sized>(
    grid: &mut Grid,
    at: Coordinate,
    rng: &mut R,
) -> Result<Move> {
    let prey = herbivore_neighbors(grid, at)?;
    if let Some(&target) = prey.choose(rng) {
        grid.set(target, Cell::Carnivore)?;
        grid.set(at, Cell::Empty)?;
        trace!(from = %at, prey = %target, "carnivore consumed herbivore");
        return Ok(Move::Consumed {
            from: at,
            prey: target,
        });
    }

    relocate(grid, at, Cell::Carnivore, rng)
}

fn relocate<R: Rng + ?Sized>(
    grid: &mut Grid,
    at: Coordinate,
    organism: Cell,
    rng: &mut R,
) -> Result<Move> {
    let options = empty_neighbors(grid, at)?;
    let Some(&target) = options.choose(rng) else {
        return Ok(Move::Stayed { at });
    };

    grid.set(target, organism)?;
    grid.set(at, Cell::Empty)?;
    trace!(?organism, from = %at, to = %target, "relocated");
    Ok(Move::Relocated {
        from: at,
        to: target,
    })
}

//! Population and movement statistics.

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

use crate::Cell;

/// Number of cells holding each kind of content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationCounts {
    pub empty: usize,
    pub plants: usize,
    pub herbivores: usize,
    pub carnivores: usize,
}

impl PopulationCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, cell: Cell) {
        match cell {
            Cell::Empty => self.empty += 1,
            Cell::Plant => self.plants += 1,
            Cell::Herbivore => self.herbivores += 1,
            Cell::Carnivore => self.carnivores += 1,
        }
    }

    /// Plants, herbivores and carnivores together
    pub fn organisms(&self) -> usize {
        self.plants + self.herbivores + self.carnivores
    }

    pub fn cells(&self) -> usize {
        self.organisms() + self.empty
    }
}

impl<'a> FromIterator<&'a Cell> for PopulationCounts {
    fn from_iter<I: IntoIterator<Item = &'a Cell>>(iter: I) -> Self {
        let mut counts = Self::new();
        for cell in iter {
            counts.record(*cell);
        }
        counts
    }
}

/// Moves performed during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    pub step: u64,
    /// Herbivores or carnivores that moved into an empty cell
    pub relocations: u64,
    /// Herbivores eaten by carnivores
    pub consumptions: u64,
    /// Mobile organisms that found nowhere to go
    pub stays: u64,
}

impl AddAssign<&StepReport> for StepReport {
    fn add_assign(&mut self, other: &StepReport) {
        self.step = self.step.max(other.step);
        self.relocations += other.relocations;
        self.consumptions += other.consumptions;
        self.stays += other.stays;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_from_cells() {
        let cells = [
            Cell::Plant,
            Cell::Plant,
            Cell::Herbivore,
            Cell::Carnivore,
            Cell::Empty,
        ];
        let counts: PopulationCounts = cells.iter().collect();
        assert_eq!(counts.plants, 2);
        assert_eq!(counts.herbivores, 1);
        assert_eq!(counts.carnivores, 1);
        assert_eq!(counts.empty, 1);
        assert_eq!(counts.organisms(), 4);
        assert_eq!(counts.cells(), 5);
    }

    #[test]
    fn test_report_accumulation() {
        let mut total = StepReport::default();
        total += &StepReport {
            step: 1,
            relocations: 3,
            consumptions: 1,
            stays: 2,
        };
        total += &StepReport {
            step: 2,
            relocations: 1,
            consumptions: 0,
            stays: 4,
        };
        assert_eq!(total.step, 2);
        assert_eq!(total.relocations, 4);
        assert_eq!(total.consumptions, 1);
        assert_eq!(total.stays, 6);
    }
}

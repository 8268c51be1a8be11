//! Simulation loop driving the grid through discrete steps.
//!
//! Each step scans the grid in row-major order and applies the movement
//! rules in place. Under [`UpdatePolicy::InPlace`] (the default) an organism
//! that moves to a cell later in scan order is visited again during the same
//! step and may move more than once. [`UpdatePolicy::MoveOnce`] keeps the same
//! scan but skips cells that received an organism this step.

use crate::grid::Grid;
use crate::observer::Observer;
use crate::rules::{self, Move};
use eco_core::{EcosystemConfig, PopulationCounts, Result, RunId, StepReport, UpdatePolicy};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

pub struct Simulation<R: Rng = ChaCha8Rng> {
    run_id: RunId,
    grid: Grid,
    rng: R,
    policy: UpdatePolicy,
    seed: Option<u64>,
    step: u64,
}

impl Simulation<ChaCha8Rng> {
    /// Build a randomly populated grid from configuration.
    ///
    /// Without a configured seed one is drawn from entropy and logged.
    pub fn new(config: &EcosystemConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = Grid::from_config(config, &mut rng)?;

        let mut sim = Self::with_grid(grid, rng, config.update_policy);
        sim.seed = Some(seed);

        info!(
            run_id = %sim.run_id,
            seed,
            size = config.size,
            plant_density = config.densities.plant,
            herbivore_density = config.densities.herbivore,
            carnivore_density = config.densities.carnivore,
            policy = ?config.update_policy,
            "Ecosystem initialized"
        );

        Ok(sim)
    }
}

impl<R: Rng> Simulation<R> {
    /// Wrap an existing grid and random source
    pub fn with_grid(grid: Grid, rng: R, policy: UpdatePolicy) -> Self {
        Self {
            run_id: RunId::new(),
            grid,
            rng,
            policy,
            seed: None,
            step: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Steps completed so far
    pub fn current_step(&self) -> u64 {
        self.step
    }

    /// Run `steps` steps, handing the grid to `observer` after each one
    #[instrument(skip(self, observer), fields(run_id = %self.run_id))]
    pub fn run<O: Observer + ?Sized>(
        &mut self,
        steps: u64,
        observer: &mut O,
    ) -> Result<SimulationResult> {
        info!("Starting simulation for {} steps", steps);

        let initial = self.grid.counts();
        let mut totals = StepReport::default();

        for step in 1..=steps {
            let report = self.step()?;
            totals += &report;
            observer.observe(step, &self.grid)?;
        }

        let result = SimulationResult {
            run_id: self.run_id,
            seed: self.seed,
            steps,
            update_policy: self.policy,
            initial,
            final_counts: self.grid.counts(),
            totals,
        };

        info!(
            steps,
            plants = result.final_counts.plants,
            herbivores = result.final_counts.herbivores,
            carnivores = result.final_counts.carnivores,
            relocations = totals.relocations,
            consumptions = totals.consumptions,
            "Simulation complete"
        );

        Ok(result)
    }

    /// Perform one full row-major scan of the grid
    pub fn step(&mut self) -> Result<StepReport> {
        self.step += 1;
        let mut report = StepReport {
            step: self.step,
            ..Default::default()
        };

        let cell_count = self.grid.size() * self.grid.size();
        let mut arrived = vec![false; cell_count];

        for index in 0..cell_count {
            if self.policy == UpdatePolicy::MoveOnce && arrived[index] {
                continue;
            }

            let at = self.grid.index_to_coordinate(index);
            let Some(outcome) = rules::apply(&mut self.grid, at, &mut self.rng)? else {
                continue;
            };

            match outcome {
                Move::Stayed { .. } => {
                    report.stays += 1;
                    continue;
                }
                Move::Relocated { .. } => report.relocations += 1,
                Move::Consumed { .. } => report.consumptions += 1,
            }
            let to = outcome.destination();
            arrived[to.row * self.grid.size() + to.col] = true;
        }

        let counts = self.grid.counts();
        debug!(
            step = self.step,
            plants = counts.plants,
            herbivores = counts.herbivores,
            carnivores = counts.carnivores,
            empty = counts.empty,
            relocations = report.relocations,
            consumptions = report.consumptions,
            stays = report.stays,
            "Step complete"
        );

        Ok(report)
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub run_id: RunId,
    pub seed: Option<u64>,
    pub steps: u64,
    pub update_policy: UpdatePolicy,
    pub initial: PopulationCounts,
    pub final_counts: PopulationCounts,
    pub totals: StepReport,
}

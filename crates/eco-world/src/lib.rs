//! Grid world for the predator/prey/plant ecosystem.
//!
//! A square grid of cells holding plants, herbivores or carnivores, the
//! local movement rules, and the step loop that drives them.

pub mod grid;
pub mod neighbors;
pub mod rules;
pub mod observer;
pub mod simulation;

pub use grid::Grid;
pub use observer::{Observer, TextRenderer};
pub use rules::Move;
pub use simulation::{Simulation, SimulationResult};

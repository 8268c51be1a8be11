//! Configuration types for the simulation.

use serde::{Deserialize, Serialize};

use crate::{Cell, Error, Result};

/// Slack allowed when checking that the densities sum to at most one
const DENSITY_EPSILON: f64 = 1e-9;

/// Initial population densities.
///
/// These act as cumulative thresholds over one uniform draw per cell, checked
/// in the order plant, herbivore, carnivore.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Densities {
    pub plant: f64,
    pub herbivore: f64,
    pub carnivore: f64,
}

impl Default for Densities {
    fn default() -> Self {
        Self {
            plant: 0.3,
            herbivore: 0.1,
            carnivore: 0.05,
        }
    }
}

impl Densities {
    pub fn new(plant: f64, herbivore: f64, carnivore: f64) -> Result<Self> {
        let densities = Self {
            plant,
            herbivore,
            carnivore,
        };
        densities.validate()?;
        Ok(densities)
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [self.plant, self.herbivore, self.carnivore];
        if fields.iter().any(|d| !d.is_finite() || *d < 0.0 || *d > 1.0) {
            return Err(self.invalid("each density must be within [0, 1]"));
        }
        if self.total() > 1.0 + DENSITY_EPSILON {
            return Err(self.invalid(&format!("densities sum to {} (> 1)", self.total())));
        }
        Ok(())
    }

    pub fn total(&self) -> f64 {
        self.plant + self.herbivore + self.carnivore
    }

    /// Map a uniform draw in [0, 1) to the initial content of a cell
    pub fn classify(&self, draw: f64) -> Cell {
        if draw < self.plant {
            Cell::Plant
        } else if draw < self.plant + self.herbivore {
            Cell::Herbivore
        } else if draw < self.plant + self.herbivore + self.carnivore {
            Cell::Carnivore
        } else {
            Cell::Empty
        }
    }

    fn invalid(&self, reason: &str) -> Error {
        Error::InvalidDensityConfiguration {
            plant: self.plant,
            herbivore: self.herbivore,
            carnivore: self.carnivore,
            reason: reason.to_string(),
        }
    }
}

/// How a step scan treats organisms that already moved during the same step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    /// Mutate in place in row-major order. An organism moved to a cell later
    /// in scan order is visited again and may move more than once per step.
    #[default]
    InPlace,
    /// Same in-place scan, but cells that received an organism this step are
    /// skipped, so every organism acts at most once per step.
    MoveOnce,
}

/// Ecosystem configuration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EcosystemConfig {
    /// Width and height of the square grid
    pub size: usize,
    /// Initial population densities
    pub densities: Densities,
    /// Number of steps to simulate
    pub steps: u64,
    /// Random seed for reproducibility; drawn from entropy when absent
    pub seed: Option<u64>,
    /// Scan policy for a single step
    pub update_policy: UpdatePolicy,
}

impl Default for EcosystemConfig {
    fn default() -> Self {
        Self {
            size: 50,
            densities: Densities::default(),
            steps: 10,
            seed: None,
            update_policy: UpdatePolicy::default(),
        }
    }
}

impl EcosystemConfig {
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidGridSize(self.size));
        }
        self.densities.validate()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let config = EcosystemConfig::default();
        assert_eq!(config.size, 50);
        assert_eq!(config.steps, 10);
        assert_eq!(config.seed, None);
        assert_eq!(config.update_policy, UpdatePolicy::InPlace);
        assert_eq!(config.densities, Densities::new(0.3, 0.1, 0.05).unwrap());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_classify_thresholds() {
        let densities = Densities::default();
        assert_eq!(densities.classify(0.0), Cell::Plant);
        assert_eq!(densities.classify(0.29), Cell::Plant);
        assert_eq!(densities.classify(0.35), Cell::Herbivore);
        assert_eq!(densities.classify(0.44), Cell::Carnivore);
        assert_eq!(densities.classify(0.5), Cell::Empty);
        assert_eq!(densities.classify(0.999), Cell::Empty);
    }

    #[test]
    fn test_zero_densities_yield_empty() {
        let densities = Densities::new(0.0, 0.0, 0.0).unwrap();
        assert_eq!(densities.classify(0.0), Cell::Empty);
    }

    #[test]
    fn test_density_sum_rejected() {
        let err = Densities::new(0.6, 0.3, 0.2).unwrap_err();
        assert!(matches!(err, Error::InvalidDensityConfiguration { .. }));
        let message = err.to_string();
        assert!(message.starts_with(
            "Invalid density configuration (plant=0.6, herbivore=0.3, carnivore=0.2):"
        ));

        assert!(Densities::new(0.5, 0.3, 0.2).is_ok());
    }

    #[test]
    fn test_density_range_rejected() {
        assert!(Densities::new(-0.1, 0.0, 0.0).is_err());
        assert!(Densities::new(f64::NAN, 0.0, 0.0).is_err());
        assert!(Densities::new(0.0, 1.5, 0.0).is_err());
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = EcosystemConfig {
            size: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidGridSize(0))));
    }

    #[test]
    fn test_config_from_json() {
        let config = EcosystemConfig::from_json(
            r#"{"size": 8, "seed": 7, "update_policy": "move_once", "densities": {"plant": 0.2}}"#,
        )
        .unwrap();
        assert_eq!(config.size, 8);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.steps, 10);
        assert_eq!(config.update_policy, UpdatePolicy::MoveOnce);
        assert_eq!(config.densities.plant, 0.2);
        assert_eq!(config.densities.herbivore, 0.1);
    }

    #[test]
    fn test_config_from_json_validates() {
        let err = EcosystemConfig::from_json(r#"{"densities": {"plant": 0.9}}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidDensityConfiguration { .. }));

        let err = EcosystemConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }
}

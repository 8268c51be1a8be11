//! Error types for the simulation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinate ({row}, {col}) for a {size}x{size} grid")]
    InvalidCoordinate { row: usize, col: usize, size: usize },

    #[error(
        "Invalid density configuration \
         (plant={plant}, herbivore={herbivore}, carnivore={carnivore}): {reason}"
    )]
    InvalidDensityConfiguration {
        plant: f64,
        herbivore: f64,
        carnivore: f64,
        reason: String,
    },

    #[error("Invalid grid size: {0}")]
    InvalidGridSize(usize),

    #[error("Invalid cell symbol: {0:?}")]
    InvalidSymbol(char),

    #[error("Invalid grid layout: {0}")]
    InvalidLayout(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

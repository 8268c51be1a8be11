//! Command-line entry point for the ecosystem simulation.
//!
//! With no arguments the compiled-in defaults are used. An optional single
//! argument names a JSON file holding an `EcosystemConfig`.

mod telemetry;

use anyhow::{bail, Context, Result};
use eco_core::EcosystemConfig;
use eco_world::{Simulation, TextRenderer};
use std::io;
use std::path::Path;
use tracing::info;

fn main() -> Result<()> {
    telemetry::init_telemetry()?;

    let config = load_config(std::env::args().skip(1).collect())?;

    let mut simulation = Simulation::new(&config).context("failed to initialize ecosystem")?;

    let stdout = io::stdout();
    let mut renderer = TextRenderer::new(stdout.lock());
    let result = simulation
        .run(config.steps, &mut renderer)
        .context("simulation aborted")?;

    let summary = serde_json::to_string(&result)?;
    info!(%summary, "Run summary");

    Ok(())
}

fn load_config(args: Vec<String>) -> Result<EcosystemConfig> {
    match args.as_slice() {
        [] => Ok(EcosystemConfig::default()),
        [path] => read_config(Path::new(path)),
        _ => bail!("usage: ecosystem [config.json]"),
    }
}

fn read_config(path: &Path) -> Result<EcosystemConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = EcosystemConfig::from_json(&json)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    info!("Loaded configuration from {}", path.display());
    Ok(config)
}

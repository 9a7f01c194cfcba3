//! Configuration settings for the simulation

use crate::game_of_life::{load_pattern_from_file, Grid};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Longest accepted pause between two generations in auto mode
pub const MAX_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub grid: GridConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub max_generations: u64,
    pub mode: RunMode,
    pub delay_ms: u64,
}

/// How the run loop paces and displays generations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Draw every generation, pausing `delay_ms` between them
    Auto,
    /// Draw every generation, waiting for Enter between them
    Interactive,
    /// Only draw the first and last generation
    Quiet,
}

/// Dimensions and fill of a random grid.
///
/// Width and height are signed so out of range values coming from users
/// can be clamped instead of rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: i64,
    pub height: i64,
    pub density: i32,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub pattern_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_generations: 100,
            mode: RunMode::Auto,
            delay_ms: 200,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 20,
            density: 5,
            seed: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl GridConfig {
    /// Width and height clamped to `1..=u32::MAX`
    pub fn dimensions(&self) -> (u32, u32) {
        let clamp = |value: i64| value.clamp(1, i64::from(u32::MAX)) as u32;
        (clamp(self.width), clamp(self.height))
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.delay_ms > MAX_DELAY_MS {
            anyhow::bail!(
                "Delay of {} ms exceeds the maximum of {} ms",
                self.simulation.delay_ms,
                MAX_DELAY_MS
            );
        }

        if let Some(ref pattern_file) = self.input.pattern_file {
            if !pattern_file.exists() {
                anyhow::bail!("Pattern file does not exist: {}", pattern_file.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(max_generations) = cli_overrides.max_generations {
            self.simulation.max_generations = max_generations;
        }
        if let Some(mode) = cli_overrides.mode {
            self.simulation.mode = mode;
        }
        if let Some(delay_ms) = cli_overrides.delay_ms {
            self.simulation.delay_ms = delay_ms;
        }
        if let Some(width) = cli_overrides.width {
            self.grid.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.grid.height = height;
        }
        if let Some(density) = cli_overrides.density {
            self.grid.density = density;
        }
        if let Some(seed) = cli_overrides.seed {
            self.grid.seed = Some(seed);
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.input.pattern_file = Some(pattern_file.clone());
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }

    /// Build the starting grid: the pattern file when one is set, a random grid otherwise
    pub fn build_grid(&self) -> Result<Grid> {
        if let Some(ref pattern_file) = self.input.pattern_file {
            let pattern = load_pattern_from_file(pattern_file)?;
            return Grid::from_pattern(pattern)
                .with_context(|| format!("Invalid pattern in {}", pattern_file.display()));
        }

        let (width, height) = self.grid.dimensions();
        let grid = match self.grid.seed {
            Some(seed) => Grid::random_with_rng(
                width,
                height,
                self.grid.density,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => Grid::random(width, height, self.grid.density),
        };
        grid.with_context(|| format!("Cannot build a {}x{} grid", width, height))
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub max_generations: Option<u64>,
    pub mode: Option<RunMode>,
    pub delay_ms: Option<u64>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub density: Option<i32>,
    pub seed: Option<u64>,
    pub pattern_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

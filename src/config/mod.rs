//! Configuration management for the simulation

pub mod settings;

pub use settings::{
    CliOverrides, GridConfig, InputConfig, OutputConfig, OutputFormat, RunMode, Settings,
    SimulationConfig,
};

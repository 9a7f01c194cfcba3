//! Conway's Game of Life on a toroidal grid
//!
//! The grid wraps on both axes. Each step computes every cell's next state from
//! the current generation before any cell is updated, and reports whether the
//! simulation has become extinct or stable.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use error::LifeError;
pub use game_of_life::{Cell, Grid, Pattern};
pub use simulation::{RunSummary, Simulation};

use anyhow::Result;

/// Build the starting grid from settings and run it to completion on stdout/stdin
pub fn run_simulation(settings: Settings) -> Result<RunSummary> {
    let grid = settings.build_grid()?;
    let color = utils::ColorOutput::new(settings.output.color);
    let mut simulation = Simulation::new(grid, settings.simulation).with_color(color);

    let stdout = std::io::stdout();
    let stdin = std::io::stdin();
    simulation.run(&mut stdout.lock(), &mut stdin.lock())
}

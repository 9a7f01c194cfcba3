//! Run loop driving a grid through its generations

use crate::config::{RunMode, SimulationConfig};
use crate::game_of_life::Grid;
use crate::utils::{ColorOutput, GridRenderer};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{BufRead, Write};
use std::time::Duration;

/// Why a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HaltReason {
    /// No alive cell left
    Extinct,
    /// A step changed no cell
    Inert,
    /// `max_generations` steps were taken
    GenerationLimit,
    /// Interactive input ended before the run did
    InputClosed,
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            HaltReason::Extinct => "population died out",
            HaltReason::Inert => "grid became stable",
            HaltReason::GenerationLimit => "generation limit reached",
            HaltReason::InputClosed => "input closed",
        };
        f.write_str(text)
    }
}

/// Outcome of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub generations_run: u64,
    pub final_generation: u64,
    pub final_population: u32,
    /// True when the grid itself reached a terminal state
    pub halted: bool,
    pub reason: HaltReason,
}

/// A grid together with the settings of the loop advancing it
pub struct Simulation {
    grid: Grid,
    config: SimulationConfig,
    color: ColorOutput,
}

impl Simulation {
    pub fn new(grid: Grid, config: SimulationConfig) -> Self {
        Self {
            grid,
            config,
            color: ColorOutput::new(false),
        }
    }

    /// Use colored status messages
    pub fn with_color(mut self, color: ColorOutput) -> Self {
        self.color = color;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Run until the grid is terminal or `max_generations` steps were taken.
    ///
    /// `input` is only read in interactive mode, one line per generation.
    pub fn run<W: Write, R: BufRead>(&mut self, out: &mut W, input: &mut R) -> Result<RunSummary> {
        let mode = self.config.mode;
        let max_generations = self.config.max_generations;
        tracing::debug!(?mode, max_generations, "starting run");

        self.draw(out)?;
        if mode == RunMode::Quiet {
            writeln!(
                out,
                "{}",
                self.color
                    .processing(&format!("Computing {} generations...", max_generations))
            )?;
        }

        let mut steps = 0;
        let mut reason = HaltReason::GenerationLimit;

        while steps < max_generations {
            let running = self.grid.next_generation();
            steps += 1;

            if mode != RunMode::Quiet {
                self.draw(out)?;
            }

            if !running {
                reason = if self.grid.population() == 0 {
                    HaltReason::Extinct
                } else {
                    HaltReason::Inert
                };
                break;
            }

            if steps < max_generations && !self.pace(out, input)? {
                reason = HaltReason::InputClosed;
                break;
            }
        }

        if mode == RunMode::Quiet {
            self.draw(out)?;
        }
        out.flush().context("Failed to flush output")?;

        let summary = RunSummary {
            generations_run: steps,
            final_generation: self.grid.generation(),
            final_population: self.grid.population(),
            halted: matches!(reason, HaltReason::Extinct | HaltReason::Inert),
            reason,
        };
        tracing::info!(
            generations = summary.generations_run,
            population = summary.final_population,
            reason = %summary.reason,
            "run finished"
        );
        Ok(summary)
    }

    fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", GridRenderer::render(&self.grid)).context("Failed to draw grid")
    }

    /// Wait before the next generation. Returns false when interactive input is exhausted.
    fn pace<W: Write, R: BufRead>(&self, out: &mut W, input: &mut R) -> Result<bool> {
        match self.config.mode {
            RunMode::Auto => {
                out.flush()?;
                std::thread::sleep(Duration::from_millis(self.config.delay_ms));
                Ok(true)
            }
            RunMode::Interactive => {
                writeln!(
                    out,
                    "{}",
                    self.color.processing("Press Enter for the next generation")
                )?;
                out.flush()?;
                let mut line = String::new();
                let read = input
                    .read_line(&mut line)
                    .context("Failed to read from input")?;
                Ok(read > 0)
            }
            RunMode::Quiet => Ok(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::parse_pattern;
    use std::io::Cursor;

    const BLINKER: &str = ".....\n.....\n.###.\n.....\n.....\n";

    fn simulation(text: &str, mode: RunMode, max_generations: u64) -> Simulation {
        let grid = Grid::from_pattern(parse_pattern(text)).unwrap();
        Simulation::new(
            grid,
            SimulationConfig {
                max_generations,
                mode,
                delay_ms: 0,
            },
        )
    }

    fn run(simulation: &mut Simulation, input: &str) -> (RunSummary, String) {
        let mut out = Vec::new();
        let summary = simulation
            .run(&mut out, &mut Cursor::new(input.as_bytes()))
            .unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_auto_runs_to_limit() {
        let mut simulation = simulation(BLINKER, RunMode::Auto, 4);
        let (summary, output) = run(&mut simulation, "");

        assert_eq!(summary.generations_run, 4);
        assert_eq!(summary.final_generation, 4);
        assert_eq!(summary.reason, HaltReason::GenerationLimit);
        assert!(!summary.halted);
        // Initial drawing plus one per step
        assert_eq!(output.matches("Generation : ").count(), 5);
    }

    #[test]
    fn test_still_life_halts() {
        let mut simulation = simulation("....\n.##.\n.##.\n....\n", RunMode::Auto, 50);
        let (summary, _) = run(&mut simulation, "");

        assert_eq!(summary.generations_run, 1);
        assert_eq!(summary.reason, HaltReason::Inert);
        assert_eq!(summary.final_population, 4);
        assert!(summary.halted);
    }

    #[test]
    fn test_empty_grid_halts_after_one_step() {
        let mut simulation = Simulation::new(
            Grid::empty(4, 4).unwrap(),
            SimulationConfig {
                max_generations: 10,
                mode: RunMode::Auto,
                delay_ms: 0,
            },
        );
        let (summary, _) = run(&mut simulation, "");

        assert_eq!(summary.generations_run, 1);
        assert_eq!(summary.reason, HaltReason::Extinct);
    }

    #[test]
    fn test_quiet_draws_first_and_last() {
        let mut simulation = simulation(BLINKER, RunMode::Quiet, 9);
        let (summary, output) = run(&mut simulation, "");

        assert_eq!(summary.generations_run, 9);
        assert!(output.contains("Computing 9 generations..."));
        assert!(output.contains("Generation : 0 ; population : 3"));
        assert!(output.contains("Generation : 9 ; population : 3"));
        assert_eq!(output.matches("Generation : ").count(), 2);
    }

    #[test]
    fn test_interactive_waits_for_lines() {
        let mut simulation = simulation(BLINKER, RunMode::Interactive, 10);
        let (summary, output) = run(&mut simulation, "\n\n");

        // Two lines allow two more steps after the first one
        assert_eq!(summary.generations_run, 3);
        assert_eq!(summary.reason, HaltReason::InputClosed);
        assert!(!summary.halted);
        assert_eq!(output.matches("Generation : ").count(), 4);
        // One prompt per wait, including the one that hit end of input
        assert_eq!(output.matches("Press Enter for the next generation").count(), 3);
    }

    #[test]
    fn test_zero_generations() {
        let mut simulation = simulation(BLINKER, RunMode::Auto, 0);
        let (summary, _) = run(&mut simulation, "");

        assert_eq!(summary.generations_run, 0);
        assert_eq!(simulation.grid().generation(), 0);
    }

    #[test]
    fn test_summary_serializes() {
        let summary = RunSummary {
            generations_run: 2,
            final_generation: 2,
            final_population: 0,
            halted: true,
            reason: HaltReason::Extinct,
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"reason\":\"extinct\""));
    }
}

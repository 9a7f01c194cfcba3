//! Command line front end for the toroidal Game of Life

use anyhow::{Context, Result};
use clap::{ArgAction, ArgGroup, Parser};
use std::path::PathBuf;
use torus_life::{
    config::{CliOverrides, OutputFormat, RunMode, Settings},
    run_simulation,
    utils::{ColorOutput, GridRenderer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "torus_life")]
#[command(about = "Conway's Game of Life on a toroidal grid")]
#[command(version)]
#[command(disable_help_flag = true)]
#[command(group(ArgGroup::new("mode").args(["auto", "interactive", "quiet"])))]
struct Cli {
    /// Print help
    #[arg(short = '?', long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Maximum number of generations
    #[arg(short, long)]
    generations: Option<u64>,

    /// Draw every generation with a delay between them
    #[arg(short, long)]
    auto: bool,

    /// Draw every generation, press Enter for the next one
    #[arg(short, long)]
    interactive: bool,

    /// Only draw the initial and final generations
    #[arg(short, long)]
    quiet: bool,

    /// Grid width in cells (values below 1 become 1)
    #[arg(short, long, allow_negative_numbers = true)]
    width: Option<i64>,

    /// Grid height in cells (values below 1 become 1)
    #[arg(short = 'h', long, allow_negative_numbers = true)]
    height: Option<i64>,

    /// Density of alive cells in a random grid, from 1 to 10
    #[arg(short, long, allow_negative_numbers = true)]
    density: Option<i32>,

    /// Delay between generations in auto mode, in milliseconds
    #[arg(long)]
    delay: Option<u64>,

    /// Seed for the random grid
    #[arg(long)]
    seed: Option<u64>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Format of the end-of-run summary
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Disable colored messages
    #[arg(long)]
    no_color: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Pattern file to start from instead of a random grid
    file: Option<PathBuf>,
}

impl Cli {
    fn mode(&self) -> Option<RunMode> {
        if self.auto {
            Some(RunMode::Auto)
        } else if self.interactive {
            Some(RunMode::Interactive)
        } else if self.quiet {
            Some(RunMode::Quiet)
        } else {
            None
        }
    }

    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            max_generations: self.generations,
            mode: self.mode(),
            delay_ms: self.delay,
            width: self.width,
            height: self.height,
            density: self.density,
            seed: self.seed,
            pattern_file: self.file.clone(),
            format: self.format,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let color = ColorOutput::new(!cli.no_color);
    if let Err(e) = run(&cli, color) {
        eprintln!("{}", error_message(&color, &e));
        std::process::exit(1);
    }
}

/// Fatal error line: the whole context chain on one line
fn error_message(color: &ColorOutput, error: &anyhow::Error) -> String {
    color.error(&format!("{:#}", error))
}

fn run(cli: &Cli, color: ColorOutput) -> Result<()> {
    let mut settings = load_settings(cli.config.as_ref(), &color)?;
    settings.merge_with_cli(&cli.overrides());
    if cli.no_color {
        settings.output.color = false;
    }
    settings
        .validate()
        .context("Configuration validation failed")?;

    let color = ColorOutput::new(settings.output.color);
    let format = settings.output.format;

    println!("torus_life {}", env!("CARGO_PKG_VERSION"));
    let summary = run_simulation(settings)?;

    match format {
        OutputFormat::Text => {
            print!("{}", GridRenderer::format_summary(&summary));
            println!("{}", color.success("Simulation finished"));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)
                .context("Failed to serialize run summary")?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "torus_life=debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_settings(config_path: Option<&PathBuf>, color: &ColorOutput) -> Result<Settings> {
    match config_path {
        Some(path) if path.exists() => Settings::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        Some(path) => {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            println!(
                "{}",
                color.warning(&format!(
                    "Config file {} not found, using defaults",
                    path.display()
                ))
            );
            Ok(Settings::default())
        }
        None => Ok(Settings::default()),
    }
}

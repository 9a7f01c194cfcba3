//! Display and output formatting utilities

use crate::game_of_life::Grid;
use crate::simulation::RunSummary;

/// Console rendering of a grid
pub struct GridRenderer;

impl GridRenderer {
    /// Render a grid framed by a top border and a right border, followed by a status line
    pub fn render(grid: &Grid) -> String {
        let width = grid.width() as usize;
        let mut output = String::with_capacity((width + 2) * (grid.height() as usize + 2));

        output.push_str(&"_".repeat(width));
        output.push('\n');

        let cells: Vec<bool> = grid.cells().map(|cell| cell.is_alive()).collect();
        for row in cells.chunks(width) {
            output.extend(row.iter().map(|&alive| if alive { '#' } else { ' ' }));
            output.push_str("|\n");
        }

        output.push_str(&Self::status_line(grid));
        output
    }

    /// Generation and population of a grid
    pub fn status_line(grid: &Grid) -> String {
        format!(
            "Generation : {} ; population : {}",
            grid.generation(),
            grid.population()
        )
    }

    /// Format the end-of-run summary as plain text
    pub fn format_summary(summary: &RunSummary) -> String {
        let mut output = String::new();

        output.push_str(&format!("Generations run: {}\n", summary.generations_run));
        output.push_str(&format!("Final generation: {}\n", summary.final_generation));
        output.push_str(&format!("Final population: {}\n", summary.final_population));
        output.push_str(&format!("Stopped: {}\n", summary.reason));

        output
    }
}

/// Colored status messages
#[derive(Debug, Clone, Copy)]
pub struct ColorOutput {
    enabled: bool,
}

impl ColorOutput {
    /// Colors are used only when requested and supported by the terminal
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: enabled && Self::supports_color(),
        }
    }

    /// Format text with color (if enabled)
    pub fn colored(&self, text: &str, color: Color) -> String {
        if self.enabled {
            format!("{}{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    fn tagged(&self, tag: &str, color: Color, msg: &str) -> String {
        format!("{}{}", self.colored(tag, color), msg)
    }

    /// Fatal problem
    pub fn error(&self, msg: &str) -> String {
        self.tagged(" [-] ", Color::LightRed, msg)
    }

    /// Non-blocking problem
    pub fn warning(&self, msg: &str) -> String {
        self.tagged(" [!] ", Color::Yellow, msg)
    }

    /// Completed action
    pub fn success(&self, msg: &str) -> String {
        self.tagged(" [+] ", Color::LightGreen, msg)
    }

    /// Start of a possibly long action
    pub fn processing(&self, msg: &str) -> String {
        self.tagged(" [*] ", Color::LightBlue, msg)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    LightRed,
    LightGreen,
    Yellow,
    LightBlue,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::LightRed => "\x1b[01;31m",
            Color::LightGreen => "\x1b[01;32m",
            Color::Yellow => "\x1b[00;33m",
            Color::LightBlue => "\x1b[01;34m",
        }
    }
}

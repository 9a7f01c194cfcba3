//! Toroidal grid and the generation-advance algorithm

use super::io::Pattern;
use super::{Cell, LifeRule};
use crate::error::{LifeError, Result};
use rand::Rng;
use rayon::prelude::*;
use std::fmt;

/// A fixed-size Game of Life grid whose edges wrap onto each other.
///
/// Cells are stored row-major, `index = x + width * y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    generation: u64,
    population: u32,
    inert: bool,
}

impl Grid {
    /// Create a grid of dead cells. Zero dimensions are raised to 1.
    ///
    /// Fails when `width * height` does not fit in a `u32` cell index.
    pub fn empty(width: u32, height: u32) -> Result<Self> {
        let (width, height) = (width.max(1), height.max(1));
        let len = cell_count(width, height)?;
        tracing::debug!(width, height, "creating empty grid");

        Ok(Self::with_cells(width, height, vec![Cell::default(); len as usize]))
    }

    /// Create a grid where each cell is alive with probability `1 / (11 - density)`.
    ///
    /// `density` is clamped to `1..=10`, so 10 fills the grid and 1 gives roughly one cell in ten.
    pub fn random(width: u32, height: u32, density: i32) -> Result<Self> {
        Self::random_with_rng(width, height, density, &mut rand::thread_rng())
    }

    /// Same as [`Grid::random`] with a caller-provided random source
    pub fn random_with_rng<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        density: i32,
        rng: &mut R,
    ) -> Result<Self> {
        let (width, height) = (width.max(1), height.max(1));
        let len = cell_count(width, height)?;
        let density = density.clamp(1, 10);
        let odds = (11 - density) as u32;
        tracing::debug!(width, height, density, "creating random grid");

        let cells = (0..len)
            .map(|_| Cell::new(rng.gen_range(0..odds) == 0))
            .collect();

        Ok(Self::with_cells(width, height, cells))
    }

    /// Create a grid from a parsed pattern
    pub fn from_pattern(pattern: Pattern) -> Result<Self> {
        if pattern.width == 0 || pattern.height == 0 {
            return Err(LifeError::EmptyPattern {
                width: pattern.width,
                height: pattern.height,
            });
        }
        cell_count(pattern.width, pattern.height)?;
        tracing::debug!(width = pattern.width, height = pattern.height, "creating grid from pattern");

        let cells = pattern.cells.into_iter().map(Cell::new).collect();
        Ok(Self::with_cells(pattern.width, pattern.height, cells))
    }

    fn with_cells(width: u32, height: u32, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len() as u64, u64::from(width) * u64::from(height));
        let population = cells.iter().filter(|cell| cell.is_alive()).count() as u32;

        Self {
            width,
            height,
            cells,
            generation: 0,
            population,
            inert: false,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of completed steps
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of alive cells
    pub fn population(&self) -> u32 {
        self.population
    }

    /// Total number of cells
    pub fn len(&self) -> u32 {
        self.cells.len() as u32
    }

    /// Always false, grids hold at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert 2D coordinates to the linear cell index
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> u32 {
        x + self.width * y
    }

    /// Get the cell at a linear index
    pub fn cell_at(&self, index: u32) -> Result<&Cell> {
        self.cells
            .get(index as usize)
            .ok_or(LifeError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Whether the last step left every cell unchanged
    pub fn is_inert(&self) -> bool {
        self.inert
    }

    /// Whether the simulation has nothing left to do
    pub fn is_terminal(&self) -> bool {
        self.population == 0 || self.inert
    }

    /// Count alive cells in the Moore neighborhood of `index`, wrapping on both axes.
    ///
    /// On grids narrower or shorter than 3 cells the same cell can be counted
    /// from several directions, itself included.
    pub fn neighbor_count(&self, index: u32) -> u8 {
        debug_assert!(index < self.len());
        let (w, h) = (i64::from(self.width), i64::from(self.height));
        let (x, y) = (i64::from(index % self.width), i64::from(index / self.width));

        LifeRule::neighbor_offsets()
            .filter(|&(dx, dy)| {
                let xn = (x + dx + w) % w;
                let yn = (y + dy + h) % h;
                self.cells[(xn + w * yn) as usize].is_alive()
            })
            .count() as u8
    }

    /// Advance the grid by one generation.
    ///
    /// Returns `false` once the grid is terminal: no cell is alive, or no cell
    /// changed state during this step.
    pub fn next_generation(&mut self) -> bool {
        // Compute phase: only current states are read
        for i in 0..self.len() {
            let next = LifeRule::next_state(self.cells[i as usize].is_alive(), self.neighbor_count(i));
            self.cells[i as usize].set_pending(next);
        }

        // Commit phase: every pending value is final at this point
        let (population, changed) = self
            .cells
            .par_iter_mut()
            .map(|cell| {
                let before = cell.is_alive();
                cell.commit();
                (u32::from(cell.is_alive()), u32::from(before != cell.is_alive()))
            })
            .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

        self.population = population;
        self.inert = changed == 0;
        self.generation += 1;
        tracing::trace!(
            generation = self.generation,
            population,
            changed,
            "advanced generation"
        );

        !self.is_terminal()
    }

    /// Coordinates `(x, y)` of every alive cell, row by row
    pub fn alive_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(i, _)| (i as u32 % self.width, i as u32 / self.width))
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

/// Number of cells of a `width` x `height` grid, if every index fits in a `u32`
fn cell_count(width: u32, height: u32) -> Result<u32> {
    width
        .checked_mul(height)
        .ok_or(LifeError::GridTooLarge { width, height })
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width as usize) {
            for cell in row {
                write!(f, "{}", if cell.is_alive() { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

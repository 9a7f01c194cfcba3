//! Run loop around the grid engine

pub mod runner;

pub use runner::{HaltReason, RunSummary, Simulation};

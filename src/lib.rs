//! Charts and a text summary for Monte Carlo p-ball volume experiments.
//!
//! Reads the CSV files the simulation writes into `results/`, renders PNG
//! charts into `plots/`, and writes `results/summary.txt`.

pub mod charts;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod report;
pub mod summary;

pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use report::{Artifact, Outcome, Report, RunStats};

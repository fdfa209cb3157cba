//! Report driver: runs every artifact in a fixed order and tolerates
//! missing inputs.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::charts;
use crate::config::{self, ReportConfig};
use crate::error::{ReportError, Result};
use crate::summary;

// ---------------------------------------------------------------------------
// Artifact – one output of the report
// ---------------------------------------------------------------------------

/// The six outputs, in the order they are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum Artifact {
    Accuracy,
    Scaling,
    Validation,
    Schedule,
    HighDim,
    Summary,
}

impl Artifact {
    pub const ALL: [Artifact; 6] = [
        Artifact::Accuracy,
        Artifact::Scaling,
        Artifact::Validation,
        Artifact::Schedule,
        Artifact::HighDim,
        Artifact::Summary,
    ];

    /// Input file names this artifact reads.
    pub fn inputs(self) -> &'static [&'static str] {
        match self {
            Artifact::Accuracy => &[config::ACCURACY_CSV],
            Artifact::Scaling => &[config::SCALING_CSV],
            Artifact::Validation => &[config::VALIDATION_CSV],
            Artifact::Schedule => &[config::SCHEDULE_CSV],
            Artifact::HighDim => &[config::HIGH_DIM_CSV],
            Artifact::Summary => &[
                config::ACCURACY_CSV,
                config::SCALING_CSV,
                config::VALIDATION_CSV,
            ],
        }
    }

    /// Where the artifact is written.
    pub fn output(self, cfg: &ReportConfig) -> PathBuf {
        match self {
            Artifact::Accuracy => cfg.plot(config::ACCURACY_PNG),
            Artifact::Scaling => cfg.plot(config::SCALING_PNG),
            Artifact::Validation => cfg.plot(config::VALIDATION_PNG),
            Artifact::Schedule => cfg.plot(config::SCHEDULE_PNG),
            Artifact::HighDim => cfg.plot(config::HIGH_DIM_PNG),
            Artifact::Summary => cfg.summary_path(),
        }
    }

    fn is_wide(self) -> bool {
        matches!(self, Artifact::Scaling | Artifact::HighDim)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Artifact::Accuracy => "accuracy",
            Artifact::Scaling => "scaling",
            Artifact::Validation => "validation",
            Artifact::Schedule => "schedule",
            Artifact::HighDim => "high-dim",
            Artifact::Summary => "summary",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Outcome / RunStats
// ---------------------------------------------------------------------------

/// What happened to one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(PathBuf),
    /// An input was missing; holds the missing path.
    Skipped(PathBuf),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub created: usize,
    pub skipped: usize,
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

pub struct Report {
    config: ReportConfig,
}

impl Report {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Produce every artifact.
    pub fn run(&self) -> Result<RunStats> {
        self.run_only(&Artifact::ALL)
    }

    /// Produce the selected artifacts, always in [`Artifact::ALL`] order.
    ///
    /// Missing inputs are reported and skipped; any other error aborts.
    pub fn run_only(&self, selected: &[Artifact]) -> Result<RunStats> {
        let mut stats = RunStats::default();
        for artifact in Artifact::ALL.into_iter().filter(|a| selected.contains(a)) {
            match self.produce(artifact)? {
                Outcome::Created(path) => {
                    println!("✓ Created {}", path.display());
                    stats.created += 1;
                }
                Outcome::Skipped(path) => {
                    if artifact == Artifact::Summary {
                        println!("✗ Could not create summary: {} not found", path.display());
                    } else {
                        println!("✗ {} not found", path.display());
                    }
                    stats.skipped += 1;
                }
            }
        }

        log::info!(
            "report finished: {} created, {} skipped",
            stats.created,
            stats.skipped
        );
        Ok(stats)
    }

    /// Produce one artifact, converting a missing input into
    /// [`Outcome::Skipped`]. The output directories are created first.
    pub fn produce(&self, artifact: Artifact) -> Result<Outcome> {
        self.prepare_dirs()?;
        let output = artifact.output(&self.config);
        log::debug!("producing {artifact} → {}", output.display());

        match self.dispatch(artifact, &output) {
            Ok(()) => Ok(Outcome::Created(output)),
            Err(e) if e.is_missing_input() => {
                let path = e.path().to_path_buf();
                log::info!("skipping {artifact}: {} not found", path.display());
                Ok(Outcome::Skipped(path))
            }
            Err(e) => Err(e),
        }
    }

    fn dispatch(&self, artifact: Artifact, output: &Path) -> Result<()> {
        let cfg = &self.config;
        let input = |i: usize| cfg.input(artifact.inputs()[i]);
        let size = if artifact.is_wide() {
            (cfg.chart.wide_width, cfg.chart.height)
        } else {
            (cfg.chart.width, cfg.chart.height)
        };

        match artifact {
            Artifact::Accuracy => charts::accuracy::render(&input(0), output, size),
            Artifact::Scaling => charts::scaling::render(&input(0), output, size),
            Artifact::Validation => charts::validation::render(&input(0), output, size),
            Artifact::Schedule => charts::schedule::render(&input(0), output, size),
            Artifact::HighDim => charts::high_dim::render(&input(0), output, size),
            Artifact::Summary => {
                summary::write_summary(&input(0), &input(1), &input(2), output).map(|_| ())
            }
        }
    }

    fn prepare_dirs(&self) -> Result<()> {
        for dir in [&self.config.plots_dir, &self.config.results_dir] {
            fs::create_dir_all(dir).map_err(|source| ReportError::Io {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

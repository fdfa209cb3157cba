//! Report configuration: where inputs live, where outputs go, figure sizes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ReportError, Result};

// -- Fixed file names --

pub const ACCURACY_CSV: &str = "accuracy_vs_n.csv";
pub const SCALING_CSV: &str = "scaling_vs_threads.csv";
pub const VALIDATION_CSV: &str = "validation_dimensions.csv";
pub const SCHEDULE_CSV: &str = "schedule_comparison.csv";
pub const HIGH_DIM_CSV: &str = "high_dimensional.csv";

pub const ACCURACY_PNG: &str = "accuracy_vs_n.png";
pub const SCALING_PNG: &str = "scaling_analysis.png";
pub const VALIDATION_PNG: &str = "validation_comparison.png";
pub const SCHEDULE_PNG: &str = "schedule_comparison.png";
pub const HIGH_DIM_PNG: &str = "high_dimensional_behavior.png";

/// Top-level configuration (optionally loaded from a TOML file).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory holding the CSV inputs.
    pub results_dir: PathBuf,
    /// Directory receiving the PNG charts.
    pub plots_dir: PathBuf,
    /// Summary file name, written inside `results_dir`.
    pub summary_file: String,
    pub chart: ChartConfig,
}

/// Figure sizes in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    /// Width used by the two-panel figures.
    pub wide_width: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("results"),
            plots_dir: PathBuf::from("plots"),
            summary_file: "summary.txt".to_string(),
            chart: ChartConfig::default(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            wide_width: 1500,
        }
    }
}

impl ReportConfig {
    pub fn input(&self, name: &str) -> PathBuf {
        self.results_dir.join(name)
    }

    pub fn plot(&self, name: &str) -> PathBuf {
        self.plots_dir.join(name)
    }

    pub fn summary_path(&self) -> PathBuf {
        self.results_dir.join(&self.summary_file)
    }

    /// Replace fields with whatever was given on the command line.
    pub fn with_overrides(
        mut self,
        results_dir: Option<PathBuf>,
        plots_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = results_dir {
            self.results_dir = dir;
        }
        if let Some(dir) = plots_dir {
            self.plots_dir = dir;
        }
        self
    }
}

/// Load configuration from a TOML file. Missing keys fall back to defaults.
pub fn load_config(path: &Path) -> Result<ReportConfig> {
    let text = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    parse_config(&text).map_err(|source| ReportError::Config {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_config(text: &str) -> std::result::Result<ReportConfig, toml::de::Error> {
    toml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(parse_config("").unwrap(), ReportConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = parse_config(
            r#"
            plots_dir = "figures"

            [chart]
            width = 800
            "#,
        )
        .unwrap();
        assert_eq!(cfg.plots_dir, PathBuf::from("figures"));
        assert_eq!(cfg.results_dir, PathBuf::from("results"));
        assert_eq!(cfg.chart.width, 800);
        assert_eq!(cfg.chart.height, 600);
    }

    #[test]
    fn cli_overrides_win() {
        let cfg = ReportConfig::default()
            .with_overrides(Some(PathBuf::from("out/results")), None);
        assert_eq!(
            cfg.input(ACCURACY_CSV),
            PathBuf::from("out/results/accuracy_vs_n.csv")
        );
        assert_eq!(
            cfg.plot(ACCURACY_PNG),
            PathBuf::from("plots/accuracy_vs_n.png")
        );
        assert_eq!(
            cfg.summary_path(),
            PathBuf::from("out/results/summary.txt")
        );
    }

    #[test]
    fn bad_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.toml");
        fs::write(&path, "chart = 3").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ReportError::Config { .. }));
    }
}

use std::cmp::Ordering;
use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Row types – one struct per results file
// ---------------------------------------------------------------------------

/// One row of `accuracy_vs_n.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccuracyRecord {
    /// Number of samples.
    #[serde(rename = "N")]
    pub n: u64,
    #[serde(rename = "Relative_Error")]
    pub relative_error: f64,
}

/// One row of `scaling_vs_threads.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScalingRecord {
    #[serde(rename = "Threads")]
    pub threads: u32,
    #[serde(rename = "Speedup")]
    pub speedup: f64,
    #[serde(rename = "Efficiency")]
    pub efficiency: f64,
    /// Wall-clock seconds for the run.
    #[serde(rename = "Runtime")]
    pub runtime: f64,
}

/// One row of `validation_dimensions.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidationRecord {
    /// Dimension.
    pub n: u32,
    #[serde(rename = "Estimated_Volume")]
    pub estimated_volume: f64,
    #[serde(rename = "Exact_Volume")]
    pub exact_volume: f64,
    #[serde(rename = "Relative_Error")]
    pub relative_error: f64,
}

impl ValidationRecord {
    /// Half-height of the error bar drawn around the estimate.
    ///
    /// This is a display approximation (relative error scaled back to
    /// volume units), not a confidence interval.
    pub fn error_bar(&self) -> f64 {
        self.relative_error * self.exact_volume
    }
}

/// Loop scheduling policy used for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schedule {
    Static,
    Dynamic,
    /// Any other policy (e.g. `guided`); not charted.
    #[serde(other)]
    Other,
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schedule::Static => write!(f, "static"),
            Schedule::Dynamic => write!(f, "dynamic"),
            Schedule::Other => write!(f, "other"),
        }
    }
}

/// One row of `schedule_comparison.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScheduleRecord {
    #[serde(rename = "Schedule")]
    pub schedule: Schedule,
    /// `0` means the runtime picked the chunk size.
    #[serde(rename = "Chunk_Size")]
    pub chunk_size: u32,
    #[serde(rename = "Runtime")]
    pub runtime: f64,
}

impl ScheduleRecord {
    /// Tick label for the chunk size axis.
    pub fn chunk_label(&self) -> String {
        match self.chunk_size {
            0 => "Default".to_string(),
            c => c.to_string(),
        }
    }
}

/// One row of `high_dimensional.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HighDimRecord {
    /// Dimension.
    pub n: u32,
    /// Norm exponent of the ball.
    pub p: f64,
    #[serde(rename = "Exact_Volume")]
    pub exact_volume: f64,
    #[serde(rename = "Acceptance_Ratio")]
    pub acceptance_ratio: f64,
}

// ---------------------------------------------------------------------------
// PValue – grouping key for the high-dimensional series
// ---------------------------------------------------------------------------

/// The `p` column as a totally ordered grouping key.
#[derive(Debug, Clone, Copy)]
pub struct PValue(pub f64);

// -- Manual Eq/Ord via total_cmp --

impl PartialEq for PValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PValue {}

impl PartialOrd for PValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PValue {
    pub fn is_whole(self) -> bool {
        self.0.is_finite() && self.0.fract() == 0.0
    }

    /// Legend text for this value. In a floating-point column whole values
    /// keep their `.0`; in an integer column they print bare.
    pub fn label(self, float_column: bool) -> String {
        if float_column || !self.is_whole() {
            format!("{:?}", self.0)
        } else {
            format!("{:.0}", self.0)
        }
    }
}

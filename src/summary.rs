//! Plain-text summary of the accuracy, scaling and validation results.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::data::loader::load_records;
use crate::data::model::{AccuracyRecord, ScalingRecord, ValidationRecord};
use crate::error::{ReportError, Result};

/// Section headers, in the order they appear in the file.
pub const SECTION_HEADERS: [&str; 4] = [
    "1. ACCURACY ANALYSIS:",
    "2. PARALLEL PERFORMANCE:",
    "3. VALIDATION RESULTS:",
    "4. RUNTIME ANALYSIS:",
];

/// Key statistics extracted from three of the result files.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub max_n: u64,
    /// Smallest relative error over all sample sizes.
    pub best_error: f64,
    pub accuracy_points: usize,

    pub max_threads: u32,
    pub max_speedup: f64,
    /// Efficiency of the last row of the scaling file.
    pub final_efficiency: f64,

    pub mean_validation_error: f64,
    pub max_validation_error: f64,

    /// Runtime of the first single-thread row.
    pub serial_runtime: f64,
    /// Runtime of the first row at `max_threads`.
    pub parallel_runtime: f64,
}

impl Summary {
    /// Compute the statistics. All slices must be non-empty (the loader
    /// guarantees this); `scaling_path` is only used for error messages.
    pub fn from_inputs(
        accuracy: &[AccuracyRecord],
        scaling: &[ScalingRecord],
        validation: &[ValidationRecord],
        scaling_path: &Path,
    ) -> Result<Self> {
        let max_n = accuracy.iter().map(|r| r.n).max().unwrap_or(0);
        let best_error = accuracy
            .iter()
            .map(|r| r.relative_error)
            .fold(f64::INFINITY, f64::min);

        let max_threads = scaling.iter().map(|r| r.threads).max().unwrap_or(0);
        let max_speedup = scaling
            .iter()
            .map(|r| r.speedup)
            .fold(f64::NEG_INFINITY, f64::max);
        let final_efficiency = scaling.last().map(|r| r.efficiency).unwrap_or(f64::NAN);

        let errors = validation.iter().map(|r| r.relative_error);
        let mean_validation_error = errors.clone().sum::<f64>() / validation.len() as f64;
        let max_validation_error = errors.fold(f64::NEG_INFINITY, f64::max);

        let runtime_at = |threads: u32| {
            scaling
                .iter()
                .find(|r| r.threads == threads)
                .map(|r| r.runtime)
                .ok_or_else(|| ReportError::MissingRow {
                    path: scaling_path.to_path_buf(),
                    what: format!("no row with Threads = {threads}"),
                })
        };
        let serial_runtime = runtime_at(1)?;
        let parallel_runtime = runtime_at(max_threads)?;

        Ok(Summary {
            max_n,
            best_error,
            accuracy_points: accuracy.len(),
            max_threads,
            max_speedup,
            final_efficiency,
            mean_validation_error,
            max_validation_error,
            serial_runtime,
            parallel_runtime,
        })
    }

    /// Serial runtime over parallel runtime.
    pub fn time_improvement(&self) -> f64 {
        self.serial_runtime / self.parallel_runtime
    }

    /// Render the fixed-format report.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "PHYS 421 Assignment 2 - Results Summary")?;
        writeln!(out, "{}\n", "=".repeat(50))?;

        section(out, SECTION_HEADERS[0], 20)?;
        writeln!(
            out,
            "Best accuracy (largest N={}): {} ({:.4}%)",
            thousands(self.max_n),
            sci(self.best_error),
            self.best_error * 100.0
        )?;
        writeln!(
            out,
            "Error scaling follows ~1/sqrt(N) trend: {} data points\n",
            self.accuracy_points
        )?;

        section(out, SECTION_HEADERS[1], 25)?;
        writeln!(out, "Maximum threads tested: {}", self.max_threads)?;
        writeln!(out, "Best speedup: {:.2}x", self.max_speedup)?;
        writeln!(
            out,
            "Efficiency at {} threads: {:.2} ({:.1}%)\n",
            self.max_threads,
            self.final_efficiency,
            self.final_efficiency * 100.0
        )?;

        section(out, SECTION_HEADERS[2], 22)?;
        writeln!(
            out,
            "Average relative error across n=2-10: {} ({:.4}%)",
            sci(self.mean_validation_error),
            self.mean_validation_error * 100.0
        )?;
        writeln!(
            out,
            "Maximum relative error: {} ({:.4}%)",
            sci(self.max_validation_error),
            self.max_validation_error * 100.0
        )?;
        writeln!(out, "All estimates within acceptable bounds\n")?;

        section(out, SECTION_HEADERS[3], 20)?;
        writeln!(out, "Serial runtime (N=5M): {:.2} seconds", self.serial_runtime)?;
        writeln!(
            out,
            "Parallel runtime ({} threads): {:.2} seconds",
            self.max_threads, self.parallel_runtime
        )?;
        writeln!(out, "Time improvement: {:.2}x faster", self.time_improvement())?;
        Ok(())
    }
}

fn section(out: &mut String, header: &str, rule: usize) -> std::fmt::Result {
    writeln!(out, "{header}")?;
    writeln!(out, "{}", "-".repeat(rule))
}

/// Load the three inputs, compute the [`Summary`] and write it to `output`.
///
/// A missing input surfaces as [`ReportError::MissingInput`] and nothing is
/// written.
pub fn write_summary(
    accuracy_path: &Path,
    scaling_path: &Path,
    validation_path: &Path,
    output: &Path,
) -> Result<Summary> {
    let accuracy: Vec<AccuracyRecord> = load_records(accuracy_path)?;
    let scaling: Vec<ScalingRecord> = load_records(scaling_path)?;
    let validation: Vec<ValidationRecord> = load_records(validation_path)?;

    let summary = Summary::from_inputs(&accuracy, &scaling, &validation, scaling_path)?;
    fs::write(output, summary.render()).map_err(|source| ReportError::Io {
        path: output.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {}", output.display());
    Ok(summary)
}

// ---------------------------------------------------------------------------
// Number formatting
// ---------------------------------------------------------------------------

/// Integer with comma thousands separators: `100000` → `100,000`.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Two-decimal scientific notation with a signed, two-digit exponent:
/// `0.001` → `1.00e-03`.
pub fn sci(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let raw = format!("{value:.2e}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.abs())
}

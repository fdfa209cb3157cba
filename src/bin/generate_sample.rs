//! Writes a deterministic, synthetic set of results CSVs so the report can
//! be tried without running the simulation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mc_report::config::{ACCURACY_CSV, HIGH_DIM_CSV, SCALING_CSV, SCHEDULE_CSV, VALIDATION_CSV};

/// Generate sample results for mc-report
#[derive(Parser, Debug)]
#[command(name = "generate_sample")]
struct Args {
    /// Output directory
    #[arg(default_value = "results")]
    dir: PathBuf,

    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Volume of the n-dimensional p-norm ball of radius `r`:
/// `(2 Γ(1 + 1/p))^n / Γ(1 + n/p) · r^n`.
fn ball_volume(n: u32, p: f64, r: f64) -> f64 {
    let n = n as f64;
    (2.0 * libm::tgamma(1.0 + 1.0 / p)).powf(n) / libm::tgamma(1.0 + n / p) * r.powf(n)
}

fn write_csv(path: &Path, header: &[&str], rows: &[Vec<String>]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    println!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

fn accuracy_rows(rng: &mut StdRng) -> Vec<Vec<String>> {
    [1_000u64, 10_000, 100_000, 1_000_000, 10_000_000]
        .iter()
        .map(|&n| {
            let err = 0.6 / (n as f64).sqrt() * rng.random_range(0.6f64..1.4);
            vec![n.to_string(), format!("{err:.8e}")]
        })
        .collect()
}

fn scaling_rows(rng: &mut StdRng) -> Vec<Vec<String>> {
    let serial = 12.0f64;
    [1u32, 2, 4, 8]
        .iter()
        .map(|&threads| {
            // Amdahl with a 5% serial fraction, plus a little noise.
            let runtime = if threads == 1 {
                serial
            } else {
                serial * (0.05 + 0.95 / threads as f64) * rng.random_range(0.98f64..1.05)
            };
            let speedup = serial / runtime;
            let efficiency = speedup / threads as f64;
            vec![
                threads.to_string(),
                format!("{runtime:.4}"),
                format!("{speedup:.4}"),
                format!("{efficiency:.4}"),
            ]
        })
        .collect()
}

fn validation_rows(rng: &mut StdRng) -> Vec<Vec<String>> {
    (2u32..=10)
        .map(|n| {
            let exact = ball_volume(n, 2.0, 1.0);
            let err: f64 = rng.random_range(1e-4..4e-3);
            let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            let estimated = exact * (1.0 + sign * err);
            vec![
                n.to_string(),
                format!("{estimated:.10}"),
                format!("{exact:.10}"),
                format!("{err:.6e}"),
            ]
        })
        .collect()
}

fn schedule_rows(rng: &mut StdRng) -> Vec<Vec<String>> {
    let chunks = [0u32, 10, 100, 1000];
    let mut rows = Vec::new();
    for (schedule, base) in [("static", 3.1), ("dynamic", 3.3)] {
        for &chunk in &chunks {
            let runtime: f64 = base * rng.random_range(0.9f64..1.1);
            rows.push(vec![
                schedule.to_string(),
                chunk.to_string(),
                format!("{runtime:.4}"),
            ]);
        }
    }
    rows
}

fn high_dim_rows() -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for p in [0.5, 1.0, 2.0, 4.0] {
        for n in 1u32..=20 {
            let volume = ball_volume(n, p, 1.0);
            // Fraction of the bounding cube [-1, 1]^n inside the ball.
            let acceptance = volume / 2f64.powi(n as i32);
            rows.push(vec![
                n.to_string(),
                p.to_string(),
                format!("{volume:.10e}"),
                format!("{acceptance:.10e}"),
            ]);
        }
    }
    rows
}

fn main() -> Result<()> {
    let args = Args::parse();
    fs::create_dir_all(&args.dir).with_context(|| format!("creating {}", args.dir.display()))?;
    let mut rng = StdRng::seed_from_u64(args.seed);

    write_csv(
        &args.dir.join(ACCURACY_CSV),
        &["N", "Relative_Error"],
        &accuracy_rows(&mut rng),
    )?;
    write_csv(
        &args.dir.join(SCALING_CSV),
        &["Threads", "Runtime", "Speedup", "Efficiency"],
        &scaling_rows(&mut rng),
    )?;
    write_csv(
        &args.dir.join(VALIDATION_CSV),
        &["n", "Estimated_Volume", "Exact_Volume", "Relative_Error"],
        &validation_rows(&mut rng),
    )?;
    write_csv(
        &args.dir.join(SCHEDULE_CSV),
        &["Schedule", "Chunk_Size", "Runtime"],
        &schedule_rows(&mut rng),
    )?;
    write_csv(
        &args.dir.join(HIGH_DIM_CSV),
        &["n", "p", "Exact_Volume", "Acceptance_Ratio"],
        &high_dim_rows(),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ball_volumes() {
        // unit disc, unit ball, 3D cross-polytope, disc of radius 2
        assert!((ball_volume(2, 2.0, 1.0) - std::f64::consts::PI).abs() < 1e-9);
        assert!((ball_volume(3, 2.0, 1.0) - 4.0 / 3.0 * std::f64::consts::PI).abs() < 1e-9);
        assert!((ball_volume(3, 1.0, 1.0) - 8.0 / 6.0).abs() < 1e-9);
        assert!((ball_volume(2, 2.0, 2.0) - 4.0 * std::f64::consts::PI).abs() < 1e-9);
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mc_report::config::load_config;
use mc_report::{Artifact, Report, ReportConfig};

/// Render charts and a summary from Monte Carlo volume results
#[derive(Parser, Debug)]
#[command(name = "mc-report")]
#[command(about = "Render charts and a summary from Monte Carlo volume results", long_about = None)]
#[command(version)]
struct Args {
    /// Directory holding the CSV inputs [default: results]
    #[arg(short, long, value_name = "DIR")]
    results_dir: Option<PathBuf>,

    /// Directory for the PNG charts [default: plots]
    #[arg(short, long, value_name = "DIR")]
    plots_dir: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Only produce the named artifact (can be repeated)
    #[arg(long, value_enum, value_name = "ARTIFACT")]
    only: Vec<Artifact>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            load_config(path)
                .with_context(|| format!("loading {}", path.display()))?
        }
        None => ReportConfig::default(),
    }
    .with_overrides(args.results_dir, args.plots_dir);
    log::debug!("{config:?}");

    let selected: Vec<Artifact> = if args.only.is_empty() {
        Artifact::ALL.to_vec()
    } else {
        args.only
    };

    println!("Generating plots and analysis...");
    println!("{}", "=".repeat(40));

    let report = Report::new(config);
    let stats = report
        .run_only(&selected)
        .context("report generation failed")?;

    println!("{}", "=".repeat(40));
    if stats.skipped == 0 {
        println!("All plots generated successfully!");
    } else {
        println!(
            "Done ({} created, {} skipped).",
            stats.created, stats.skipped
        );
    }
    println!(
        "Check the '{}/' directory for all figures.",
        report.config().plots_dir.display()
    );
    println!(
        "Check '{}' for key findings.",
        report.config().summary_path().display()
    );

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

// End-to-end runs of the report against temporary results/plots directories.
use std::fs;
use std::path::Path;

use mc_report::config::{ACCURACY_CSV, HIGH_DIM_CSV, SCALING_CSV, SCHEDULE_CSV, VALIDATION_CSV};
use mc_report::summary::SECTION_HEADERS;
use mc_report::{Artifact, Outcome, Report, ReportConfig, ReportError};
use tempfile::{tempdir, TempDir};

const ACCURACY: &str = "N,Relative_Error\n1000,0.01\n100000,0.001\n";
const SCALING: &str = "Threads,Runtime,Speedup,Efficiency\n1,8.0,1.0,1.0\n4,2.5,3.2,0.8\n";
const VALIDATION: &str = "n,Estimated_Volume,Exact_Volume,Relative_Error\n\
    2,3.1400,3.1416,0.0005\n\
    3,4.2000,4.1888,0.0027\n\
    10,0.0025,0.0025,0.0040\n";
const SCHEDULE: &str = "Schedule,Chunk_Size,Runtime\n\
    static,0,2.0\nstatic,100,1.8\ndynamic,0,2.4\ndynamic,100,1.9\n";
const HIGH_DIM: &str = "n,p,Exact_Volume,Acceptance_Ratio\n\
    2,1,2.0,0.5\n3,1,1.3333,0.1667\n4,1,0.6667,0.0417\n\
    2,2,3.1416,0.7854\n3,2,4.1888,0.5236\n4,2,4.9348,0.3084\n";

struct Workspace {
    _dir: TempDir,
    config: ReportConfig,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempdir().expect("tempdir must be created");
        let config = ReportConfig::default().with_overrides(
            Some(dir.path().join("results")),
            Some(dir.path().join("plots")),
        );
        fs::create_dir_all(&config.results_dir).unwrap();
        Workspace { _dir: dir, config }
    }

    fn with_all_inputs() -> Self {
        let ws = Self::new();
        ws.write(ACCURACY_CSV, ACCURACY);
        ws.write(SCALING_CSV, SCALING);
        ws.write(VALIDATION_CSV, VALIDATION);
        ws.write(SCHEDULE_CSV, SCHEDULE);
        ws.write(HIGH_DIM_CSV, HIGH_DIM);
        ws
    }

    fn write(&self, name: &str, contents: &str) {
        fs::write(self.config.input(name), contents).unwrap();
    }

    fn report(&self) -> Report {
        Report::new(self.config.clone())
    }
}

fn assert_png(path: &Path, width: u32, height: u32) {
    let meta = fs::metadata(path)
        .unwrap_or_else(|_| panic!("{} missing", path.display()));
    assert!(meta.len() > 0, "{} is empty", path.display());
    let img = image::open(path).expect("output must decode as an image");
    assert_eq!((img.width(), img.height()), (width, height));
}

#[test]
fn full_run_creates_every_artifact() {
    let ws = Workspace::with_all_inputs();
    let stats = ws.report().run().unwrap();
    assert_eq!(stats.created, 6);
    assert_eq!(stats.skipped, 0);

    let chart = ws.config.chart;
    assert_png(&Artifact::Accuracy.output(&ws.config), chart.width, chart.height);
    assert_png(&Artifact::Scaling.output(&ws.config), chart.wide_width, chart.height);
    assert_png(&Artifact::Validation.output(&ws.config), chart.width, chart.height);
    assert_png(&Artifact::Schedule.output(&ws.config), chart.width, chart.height);
    assert_png(&Artifact::HighDim.output(&ws.config), chart.wide_width, chart.height);
    assert!(Artifact::Summary.output(&ws.config).exists());
}

#[test]
fn missing_inputs_are_skipped_without_output() {
    let ws = Workspace::new();
    let stats = ws.report().run().unwrap();
    assert_eq!(stats.created, 0);
    assert_eq!(stats.skipped, 6);

    for artifact in Artifact::ALL {
        assert!(!artifact.output(&ws.config).exists(), "{artifact} was written");
    }
    // the plots directory is still created up front
    assert!(ws.config.plots_dir.is_dir());
}

#[test]
fn each_chart_skips_only_its_own_missing_input() {
    let ws = Workspace::new();
    ws.write(SCHEDULE_CSV, SCHEDULE);
    let report = ws.report();

    assert_eq!(
        report.produce(Artifact::Schedule).unwrap(),
        Outcome::Created(Artifact::Schedule.output(&ws.config))
    );
    assert_eq!(
        report.produce(Artifact::Accuracy).unwrap(),
        Outcome::Skipped(ws.config.input(ACCURACY_CSV))
    );
}

#[test]
fn summary_skips_when_any_input_is_missing() {
    let ws = Workspace::new();
    ws.write(ACCURACY_CSV, ACCURACY);
    ws.write(VALIDATION_CSV, VALIDATION);

    let outcome = ws.report().produce(Artifact::Summary).unwrap();
    assert_eq!(outcome, Outcome::Skipped(ws.config.input(SCALING_CSV)));
    assert!(!ws.config.summary_path().exists());
}

#[test]
fn summary_reports_expected_statistics() {
    let ws = Workspace::with_all_inputs();
    ws.report().run_only(&[Artifact::Summary]).unwrap();

    let text = fs::read_to_string(ws.config.summary_path()).unwrap();
    let headers: Vec<&str> = text.lines().filter(|l| SECTION_HEADERS.contains(l)).collect();
    assert_eq!(headers, SECTION_HEADERS.to_vec());

    for expected in [
        "Best accuracy (largest N=100,000): 1.00e-03 (0.1000%)",
        "Maximum threads tested: 4",
        "Best speedup: 3.20x",
        "Efficiency at 4 threads: 0.80 (80.0%)",
        "Maximum relative error: 4.00e-03 (0.4000%)",
        "Time improvement: 3.20x faster",
    ] {
        assert!(text.contains(expected), "missing {expected:?} in\n{text}");
    }
}

#[test]
fn repeated_runs_give_identical_summary() {
    let ws = Workspace::with_all_inputs();
    let report = ws.report();

    report.run().unwrap();
    let first = fs::read(ws.config.summary_path()).unwrap();
    report.run().unwrap();
    let second = fs::read(ws.config.summary_path()).unwrap();

    assert_eq!(first, second);
    assert_png(
        &Artifact::Accuracy.output(&ws.config),
        ws.config.chart.width,
        ws.config.chart.height,
    );
}

#[test]
fn single_row_accuracy_renders() {
    let ws = Workspace::new();
    ws.write(ACCURACY_CSV, "N,Relative_Error\n50000,0.004\n");
    let outcome = ws.report().produce(Artifact::Accuracy).unwrap();
    assert!(matches!(outcome, Outcome::Created(_)));
    assert_png(
        &Artifact::Accuracy.output(&ws.config),
        ws.config.chart.width,
        ws.config.chart.height,
    );
}

#[test]
fn malformed_input_aborts_the_run() {
    let ws = Workspace::with_all_inputs();
    ws.write(
        SCALING_CSV,
        "Threads,Runtime,Speedup,Efficiency\nfour,1.0,1.0,1.0\n",
    );

    let err = ws.report().run().unwrap_err();
    assert!(matches!(err, ReportError::Csv { row: 1, .. }), "got {err}");
    assert!(!err.is_missing_input());
}

#[test]
fn single_chart_creates_missing_plots_dir() {
    let ws = Workspace::new();
    ws.write(ACCURACY_CSV, ACCURACY);
    assert!(!ws.config.plots_dir.exists());

    let outcome = ws.report().produce(Artifact::Accuracy).unwrap();
    assert_eq!(
        outcome,
        Outcome::Created(Artifact::Accuracy.output(&ws.config))
    );
    assert!(ws.config.plots_dir.is_dir());
}

#[test]
fn schedule_without_pairs_draws_empty_axes() {
    for contents in [
        "Schedule,Chunk_Size,Runtime\nguided,0,2.0\nguided,10,1.7\n",
        "Schedule,Chunk_Size,Runtime\nstatic,0,2.0\n",
    ] {
        let ws = Workspace::new();
        ws.write(SCHEDULE_CSV, contents);
        let outcome = ws.report().produce(Artifact::Schedule).unwrap();
        assert!(matches!(outcome, Outcome::Created(_)));
        assert_png(
            &Artifact::Schedule.output(&ws.config),
            ws.config.chart.width,
            ws.config.chart.height,
        );
    }
}

#[test]
fn unsorted_p_column_renders() {
    let ws = Workspace::new();
    ws.write(
        HIGH_DIM_CSV,
        "n,p,Exact_Volume,Acceptance_Ratio\n\
         2,4.0,3.7081,0.9270\n2,0.5,0.6667,0.1667\n\
         3,4.0,6.0000,0.7500\n3,0.5,0.1905,0.0238\n",
    );
    let outcome = ws.report().produce(Artifact::HighDim).unwrap();
    assert!(matches!(outcome, Outcome::Created(_)));
    assert_png(
        &Artifact::HighDim.output(&ws.config),
        ws.config.chart.wide_width,
        ws.config.chart.height,
    );
}

//! Integration tests for loading decision matrices from files.
//!
//! Each test writes a data file into a temporary directory, loads it
//! through the `MatrixLoader` port and runs a decision on the result.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use nf_mcdm::adapters::{FileMatrixLoader, SampleMatrixLoader};
use nf_mcdm::application::{RunDecisionCommand, RunDecisionError, RunDecisionHandler};
use nf_mcdm::domain::analysis::DecisionMaker;
use nf_mcdm::domain::measures::{Measure, MeasureRegistry};
use nf_mcdm::domain::nfs::Rnf;
use nf_mcdm::ports::{LoadError, MatrixLoader};

// =============================================================================
// Test Infrastructure
// =============================================================================

const CSV: &str = "\
mu1,t1,i1,f1,mu2,t2,i2,f2,mu3,t3,i3,f3
0.6,0.5,0.4,0.4,0.9,0.8,0.1,0.1,0.2,0.2,0.8,0.7
0.5,0.6,0.4,0.5,0.8,0.9,0.2,0.1,0.3,0.1,0.7,0.8
";

const TXT: &str = "\
0.6 0.5 0.4 0.4   0.9 0.8 0.1 0.1   0.2 0.2 0.8 0.7
0.5 0.6 0.4 0.5   0.8 0.9 0.2 0.1   0.3 0.1 0.7 0.8
";

const JSON: &str = r#"[
  [[0.6, 0.5, 0.4, 0.4], [0.9, 0.8, 0.1, 0.1], [0.2, 0.2, 0.8, 0.7]],
  [[0.5, 0.6, 0.4, 0.5], [0.8, 0.9, 0.2, 0.1], [0.3, 0.1, 0.7, 0.8]]
]"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn every_format_yields_the_same_matrix() {
    let temp_dir = TempDir::new().unwrap();
    let csv = FileMatrixLoader::new(write(&temp_dir, "m.csv", CSV))
        .load_matrix()
        .unwrap();
    let txt = FileMatrixLoader::new(write(&temp_dir, "m.txt", TXT))
        .load_matrix()
        .unwrap();
    let json = FileMatrixLoader::new(write(&temp_dir, "m.json", JSON))
        .load_matrix()
        .unwrap();

    assert_eq!(csv.shape(), vec![2, 3, 4]);
    assert_eq!(csv, txt);
    assert_eq!(csv, json);
}

#[test]
fn loaded_matrix_ranks_alternatives() {
    let temp_dir = TempDir::new().unwrap();
    let matrix = FileMatrixLoader::new(write(&temp_dir, "m.csv", CSV))
        .load_matrix()
        .unwrap();
    let rnf = Rnf::new(&matrix, &[]).unwrap();

    for index in 0..4 {
        let dm = DecisionMaker::new(&rnf, index).unwrap();
        assert_eq!(dm.best_alternative().unwrap(), 2);
        assert_eq!(dm.rank().unwrap(), vec![3, 1, 2]);
    }
}

#[test]
fn handler_runs_selected_measures_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let loader = FileMatrixLoader::new(write(&temp_dir, "m.json", JSON));
    let handler = RunDecisionHandler::new(Arc::new(loader));

    let result = handler
        .handle(RunDecisionCommand {
            measures: MeasureRegistry::select(&["Similarity9", "Similarity5"]).unwrap(),
            cost: vec![1, 1],
        })
        .unwrap();

    let measures: Vec<Measure> = result.outcomes.iter().map(|o| o.measure).collect();
    assert_eq!(measures, vec![Measure::Similarity5, Measure::Similarity9]);
    assert_eq!(result.alternatives, 3);
}

#[test]
fn missing_file_surfaces_as_load_error() {
    let temp_dir = TempDir::new().unwrap();
    let loader = FileMatrixLoader::new(temp_dir.path().join("absent.csv"));
    let handler = RunDecisionHandler::new(Arc::new(loader));

    let result = handler.handle(RunDecisionCommand {
        measures: MeasureRegistry::all(),
        cost: vec![],
    });
    assert!(matches!(
        result,
        Err(RunDecisionError::Load(LoadError::NotFound(_)))
    ));
}

#[test]
fn ragged_text_rows_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(
        &temp_dir,
        "ragged.txt",
        "0.1 0.2 0.3 0.4 0.5 0.6 0.7 0.8\n0.1 0.2 0.3 0.4\n",
    );

    let result = FileMatrixLoader::new(path).load_matrix();
    assert!(matches!(result, Err(LoadError::Matrix(_))));
}

#[test]
fn spreadsheet_input_is_unsupported() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(&temp_dir, "matrix.xlsx", "");

    let result = FileMatrixLoader::new(path).load();
    assert!(matches!(result, Err(LoadError::UnsupportedFormat(_))));
}

#[test]
fn default_sample_supports_every_measure() {
    let matrix = SampleMatrixLoader::new(5, 4, 7).load_matrix().unwrap();
    let rnf = Rnf::new(&matrix, &[]).unwrap();

    for measure in Measure::all() {
        let outcome = DecisionMaker::for_measure(&rnf, *measure).evaluate().unwrap();
        assert!((1..=4).contains(&outcome.best_alternative));
    }
}

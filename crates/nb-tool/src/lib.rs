mod case;
mod runner;
mod source;

pub use case::{ExpectedOutcome, TestCase, TESTCASE_SCHEMA_V1};
pub use runner::{assert_case, run_case, RunReport};
pub use source::{discover_cases, read_template, read_test_case};

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NbToolError {
    #[error("Failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse testcase {path}: {source}")]
    ParseCase {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid testcase schema version \"{found}\", expected \"{expected}\".")]
    InvalidSchemaVersion { expected: String, found: String },
    #[error("No testcase.json files under {path}.")]
    CasesEmpty { path: PathBuf },
    #[error("Engine error: {0}")]
    Engine(#[from] nb_core::NumBurstError),
    #[error("Outcome mismatch. expected={expected} actual={actual}")]
    OutcomeMismatch { expected: String, actual: String },
    #[error("Expected document count {expected}, actual {actual}.")]
    DocumentCountMismatch { expected: usize, actual: usize },
    #[error("Document mismatch at index {index}. expected={expected:?} actual={actual:?}")]
    DocumentMismatch {
        index: usize,
        expected: String,
        actual: String,
    },
    #[error("Driver output mismatch. expected={expected:?} actual={actual:?}")]
    OutputMismatch { expected: String, actual: String },
    #[error("Failed to serialize outcome for diff: {0}")]
    OutcomeSerialize(serde_json::Error),
}

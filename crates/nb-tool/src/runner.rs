use std::path::Path;

use nb_engine::{plan_expansion, write_documents, DefaultRangeProvider, TemplateRenderer};

use crate::source::{read_template, read_test_case};
use crate::{ExpectedOutcome, NbToolError, TestCase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: ExpectedOutcome,
    /// Exact bytes the driver would write to an output file.
    pub output: String,
}

pub fn run_case(demo_dir: &Path, case: &TestCase) -> Result<RunReport, NbToolError> {
    let template = read_template(demo_dir, case)?;
    let plan = match plan_expansion(&template, &case.ranges, &mut DefaultRangeProvider) {
        Ok(plan) => plan,
        Err(error) => {
            return Ok(RunReport {
                outcome: ExpectedOutcome::Error { code: error.code },
                output: String::new(),
            })
        }
    };

    let renderer = TemplateRenderer::new(&template, &plan.identities);
    let documents = plan
        .space()
        .iter()
        .map(|combination| renderer.render(&combination))
        .collect::<Result<Vec<_>, _>>()?;

    let mut sink = Vec::new();
    write_documents(&template, &plan, &mut sink)?;

    Ok(RunReport {
        outcome: ExpectedOutcome::Documents {
            identities: plan
                .identities
                .iter()
                .map(|identity| identity.token().to_string())
                .collect(),
            documents,
        },
        output: String::from_utf8_lossy(&sink).into_owned(),
    })
}

pub fn assert_case(demo_dir: &Path, case_path: &Path) -> Result<(), NbToolError> {
    let case = read_test_case(case_path)?;
    let report = run_case(demo_dir, &case)?;

    match (&case.expected, &report.outcome) {
        (
            ExpectedOutcome::Documents {
                identities: expected_identities,
                documents: expected_documents,
            },
            ExpectedOutcome::Documents {
                identities,
                documents,
            },
        ) => {
            if expected_identities != identities {
                return Err(outcome_mismatch(&case.expected, &report.outcome)?);
            }
            if expected_documents.len() != documents.len() {
                return Err(NbToolError::DocumentCountMismatch {
                    expected: expected_documents.len(),
                    actual: documents.len(),
                });
            }
            for (index, (expected, actual)) in
                expected_documents.iter().zip(documents.iter()).enumerate()
            {
                if expected != actual {
                    return Err(NbToolError::DocumentMismatch {
                        index,
                        expected: expected.clone(),
                        actual: actual.clone(),
                    });
                }
            }
            check_output(expected_documents, &report.output)
        }
        (expected, actual) if expected == actual => Ok(()),
        (expected, actual) => Err(outcome_mismatch(expected, actual)?),
    }
}

/// Documents as the driver writes them, each followed by a newline.
fn expected_output(documents: &[String]) -> String {
    documents
        .iter()
        .map(|document| format!("{}\n", document))
        .collect()
}

fn check_output(documents: &[String], output: &str) -> Result<(), NbToolError> {
    let expected = expected_output(documents);
    if expected != output {
        return Err(NbToolError::OutputMismatch {
            expected,
            actual: output.to_string(),
        });
    }
    Ok(())
}

fn outcome_mismatch(
    expected: &ExpectedOutcome,
    actual: &ExpectedOutcome,
) -> Result<NbToolError, NbToolError> {
    Ok(NbToolError::OutcomeMismatch {
        expected: serde_json::to_string(expected).map_err(NbToolError::OutcomeSerialize)?,
        actual: serde_json::to_string(actual).map_err(NbToolError::OutcomeSerialize)?,
    })
}

#[cfg(test)]
mod runner_tests {
    use super::*;

    use nb_core::{Identity, RangeMap, ValueRange};
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time should move forward")
            .as_nanos();
        std::env::temp_dir().join(format!("nb-tool-runner-{}-{}", name, nanos))
    }

    fn write_file(path: &Path, content: &str) {
        let parent = path.parent().expect("path should have parent");
        fs::create_dir_all(parent).expect("parent dir should be created");
        fs::write(path, content).expect("file should be written");
    }

    fn case_with(ranges: RangeMap, expected: ExpectedOutcome) -> TestCase {
        TestCase {
            schema_version: crate::TESTCASE_SCHEMA_V1.to_string(),
            template: "template.txt".to_string(),
            ranges,
            expected,
        }
    }

    fn write_case(dir: &Path, case: &TestCase) -> std::path::PathBuf {
        let path = dir.join("testcase.json");
        write_file(&path, &serde_json::to_string(case).expect("case json"));
        path
    }

    #[test]
    fn run_case_keeps_multi_line_documents_whole() {
        let root = temp_dir("multi-line");
        write_file(&root.join("template.txt"), "a\n$num$");
        let mut ranges = RangeMap::new();
        ranges.insert(Identity::from(""), ValueRange::new(1, 2));
        let case = case_with(
            ranges,
            ExpectedOutcome::Error {
                code: "unused".to_string(),
            },
        );

        let report = run_case(&root, &case).expect("run should pass");
        assert_eq!(
            report.outcome,
            ExpectedOutcome::Documents {
                identities: vec![String::new()],
                documents: vec!["a\n1".to_string(), "a\n2".to_string()],
            }
        );
        assert_eq!(report.output, "a\n1\na\n2\n");
    }

    #[test]
    fn check_output_compares_driver_bytes_with_expected_documents() {
        let documents = vec!["n=1".to_string(), "n=2".to_string()];
        check_output(&documents, "n=1\nn=2\n")
            .expect("output should match");
        check_output(&[], "").expect("empty output should match");

        for output in ["n=1n=2", "n=2\nn=1\n", "n=1\nn=2"] {
            assert!(matches!(
                check_output(&documents, output)
                    .expect_err("output should differ"),
                NbToolError::OutputMismatch { .. }
            ));
        }
        assert!(matches!(
            check_output(&[], "\n")
                .expect_err("stray separator should differ"),
            NbToolError::OutputMismatch { .. }
        ));
    }

    #[test]
    fn assert_case_accepts_empty_document_list_with_empty_output() {
        let root = temp_dir("inverted");
        write_file(&root.join("template.txt"), "n=$num1$");
        let mut ranges = RangeMap::new();
        ranges.insert(Identity::from("1"), ValueRange::new(3, 1));
        let case = case_with(
            ranges,
            ExpectedOutcome::Documents {
                identities: vec!["1".to_string()],
                documents: Vec::new(),
            },
        );
        let case_path = write_case(&root, &case);
        assert_case(&root, &case_path).expect("case should pass");
    }

    #[test]
    fn run_case_reports_engine_errors_as_outcome() {
        let root = temp_dir("empty");
        write_file(&root.join("template.txt"), "nothing");
        let case = case_with(
            RangeMap::new(),
            ExpectedOutcome::Error {
                code: "EXPAND_EMPTY_TEMPLATE".to_string(),
            },
        );
        let report = run_case(&root, &case).expect("run should pass");
        assert_eq!(report.outcome, case.expected);
        assert!(report.output.is_empty());
    }

    #[test]
    fn assert_case_passes_on_matching_documents() {
        let root = temp_dir("match");
        write_file(&root.join("template.txt"), "n=$num1$");
        let mut ranges = RangeMap::new();
        ranges.insert(Identity::from("1"), ValueRange::new(1, 2));
        let case = case_with(
            ranges,
            ExpectedOutcome::Documents {
                identities: vec!["1".to_string()],
                documents: vec!["n=1".to_string(), "n=2".to_string()],
            },
        );
        let case_path = write_case(&root, &case);
        assert_case(&root, &case_path).expect("case should pass");
    }

    #[test]
    fn assert_case_reports_first_differing_document() {
        let root = temp_dir("mismatch");
        write_file(&root.join("template.txt"), "n=$num1$");
        let mut ranges = RangeMap::new();
        ranges.insert(Identity::from("1"), ValueRange::new(1, 2));
        let case = case_with(
            ranges,
            ExpectedOutcome::Documents {
                identities: vec!["1".to_string()],
                documents: vec!["n=1".to_string(), "n=3".to_string()],
            },
        );
        let case_path = write_case(&root, &case);
        let error = assert_case(&root, &case_path).expect_err("case should fail");
        assert!(matches!(error, NbToolError::DocumentMismatch { index: 1, .. }));
    }

    #[test]
    fn assert_case_reports_count_and_kind_mismatches() {
        let root = temp_dir("count");
        write_file(&root.join("template.txt"), "n=$num1$");
        let mut ranges = RangeMap::new();
        ranges.insert(Identity::from("1"), ValueRange::new(1, 3));

        let short = case_with(
            ranges.clone(),
            ExpectedOutcome::Documents {
                identities: vec!["1".to_string()],
                documents: vec!["n=1".to_string()],
            },
        );
        let case_path = write_case(&root, &short);
        assert!(matches!(
            assert_case(&root, &case_path).expect_err("count should differ"),
            NbToolError::DocumentCountMismatch {
                expected: 1,
                actual: 3
            }
        ));

        let wrong_kind = case_with(
            ranges,
            ExpectedOutcome::Error {
                code: "EXPAND_EMPTY_TEMPLATE".to_string(),
            },
        );
        let case_path = write_case(&root, &wrong_kind);
        assert!(matches!(
            assert_case(&root, &case_path).expect_err("kind should differ"),
            NbToolError::OutcomeMismatch { .. }
        ));
    }
}

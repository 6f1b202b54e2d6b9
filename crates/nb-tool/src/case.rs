use nb_core::RangeMap;
use serde::{Deserialize, Serialize};

pub const TESTCASE_SCHEMA_V1: &str = "nb-tool-case.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub schema_version: String,
    #[serde(default = "default_template")]
    pub template: String,
    /// Identities left out here expand over the default 1..=10.
    #[serde(default)]
    pub ranges: RangeMap,
    pub expected: ExpectedOutcome,
}

fn default_template() -> String {
    "template.txt".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ExpectedOutcome {
    Documents {
        identities: Vec<String>,
        documents: Vec<String>,
    },
    Error {
        code: String,
    },
}

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{NbToolError, TestCase, TESTCASE_SCHEMA_V1};

const TESTCASE_FILE_NAME: &str = "testcase.json";

pub fn read_template(demo_dir: &Path, case: &TestCase) -> Result<String, NbToolError> {
    let path = demo_dir.join(&case.template);
    fs::read_to_string(&path).map_err(|source| NbToolError::ReadFile { path, source })
}

pub fn read_test_case(case_path: &Path) -> Result<TestCase, NbToolError> {
    let raw = fs::read_to_string(case_path).map_err(|source| NbToolError::ReadFile {
        path: case_path.to_path_buf(),
        source,
    })?;
    let parsed: TestCase = serde_json::from_str(&raw).map_err(|source| NbToolError::ParseCase {
        path: case_path.to_path_buf(),
        source,
    })?;

    if parsed.schema_version != TESTCASE_SCHEMA_V1 {
        return Err(NbToolError::InvalidSchemaVersion {
            expected: TESTCASE_SCHEMA_V1.to_string(),
            found: parsed.schema_version,
        });
    }

    Ok(parsed)
}

/// Directories under `root` holding a `testcase.json`, sorted by path.
pub fn discover_cases(root: &Path) -> Result<Vec<PathBuf>, NbToolError> {
    let mut dirs = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == TESTCASE_FILE_NAME)
        .filter_map(|entry| entry.path().parent().map(Path::to_path_buf))
        .collect::<Vec<_>>();
    dirs.sort();

    if dirs.is_empty() {
        return Err(NbToolError::CasesEmpty {
            path: root.to_path_buf(),
        });
    }

    Ok(dirs)
}

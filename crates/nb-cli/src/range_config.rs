use std::fs;
use std::path::Path;

use nb_core::{Identity, NumBurstError, RangeMap, ValueRange, MARKER_PREFIX, MARKER_SUFFIX};
use serde::{Deserialize, Serialize};

use crate::{map_cli_ranges_invalid, map_cli_ranges_read};

pub(crate) const RANGES_FILE_SCHEMA: &str = "numburst-ranges.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RangesFile {
    pub(crate) schema_version: String,
    #[serde(default)]
    pub(crate) ranges: RangeMap,
}

pub(crate) fn load_ranges_file(path: &Path) -> Result<RangeMap, NumBurstError> {
    if !path.exists() {
        return Err(NumBurstError::new(
            "CLI_RANGES_NOT_FOUND",
            format!("Ranges file does not exist: {}", path.display()),
        ));
    }

    let raw = fs::read_to_string(path).map_err(map_cli_ranges_read)?;
    let file: RangesFile = serde_json::from_str(&raw).map_err(map_cli_ranges_invalid)?;

    if file.schema_version != RANGES_FILE_SCHEMA {
        return Err(NumBurstError::new(
            "CLI_RANGES_SCHEMA",
            format!("Unsupported ranges file schema: {}", file.schema_version),
        ));
    }

    Ok(file.ranges)
}

/// Parses `ID=START:END`. `ID` may be the bare token or the full `$numID$`
/// marker, and may be empty.
pub(crate) fn parse_range_arg(raw: &str) -> Result<(Identity, ValueRange), NumBurstError> {
    let invalid = || {
        NumBurstError::new(
            "CLI_RANGE_ARG",
            format!("Invalid --range \"{}\", expected ID=START:END.", raw),
        )
    };

    let (key, bounds) = raw.rsplit_once('=').ok_or_else(invalid)?;
    let (start, end) = bounds.split_once(':').ok_or_else(invalid)?;
    let start = start.trim().parse::<i64>().map_err(|_| invalid())?;
    let end = end.trim().parse::<i64>().map_err(|_| invalid())?;

    let token = key
        .strip_prefix(MARKER_PREFIX)
        .and_then(|rest| rest.strip_suffix(MARKER_SUFFIX))
        .unwrap_or(key);
    Ok((Identity::new(token), ValueRange::new(start, end)))
}

pub(crate) fn resolve_supplied_ranges(
    ranges_file: Option<&str>,
    range_args: &[String],
) -> Result<RangeMap, NumBurstError> {
    let mut ranges = match ranges_file {
        Some(path) => load_ranges_file(Path::new(path))?,
        None => RangeMap::new(),
    };
    for raw in range_args {
        let (identity, range) = parse_range_arg(raw)?;
        ranges.insert(identity, range);
    }
    Ok(ranges)
}

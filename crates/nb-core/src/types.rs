use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const MARKER_PREFIX: &str = "$num";
pub const MARKER_SUFFIX: &str = "$";
pub const DEFAULT_RANGE_START: i64 = 1;
pub const DEFAULT_RANGE_END: i64 = 10;

/// Token between `$num` and the closing `$` of a marker.
///
/// Ordering is plain string ordering, so the empty identity sorts first and the
/// rest follow lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }

    pub fn marker(&self) -> String {
        format!("{}{}{}", MARKER_PREFIX, self.0, MARKER_SUFFIX)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.marker())
    }
}

impl From<&str> for Identity {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// Inclusive integer bounds. `start > end` is kept as-is and yields no values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub start: i64,
    pub end: i64,
}

impl ValueRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> u128 {
        if self.start > self.end {
            return 0;
        }
        (i128::from(self.end) - i128::from(self.start) + 1) as u128
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new(DEFAULT_RANGE_START, DEFAULT_RANGE_END)
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

pub type RangeMap = BTreeMap<Identity, ValueRange>;

use std::collections::BTreeSet;
use std::ops::Range;
use std::sync::OnceLock;

use nb_core::{Identity, NumBurstError, MARKER_PREFIX, MARKER_SUFFIX};
use regex::Regex;

fn marker_pattern() -> String {
    let suffix = regex::escape(MARKER_SUFFIX);
    format!("{}([^{}]*){}", regex::escape(MARKER_PREFIX), suffix, suffix)
}

fn marker_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(&marker_pattern()).expect("marker regex"))
}

/// Distinct identities in `template`, empty token first, the rest in
/// lexicographic order. Returns an empty list when no marker is present.
pub fn scan_identities(template: &str) -> Vec<Identity> {
    marker_regex()
        .captures_iter(template)
        .map(|caps| Identity::new(&caps[1]))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Like [`scan_identities`], but a template without markers is an
/// `EXPAND_EMPTY_TEMPLATE` error.
pub fn require_identities(template: &str) -> Result<Vec<Identity>, NumBurstError> {
    let identities = scan_identities(template);
    if identities.is_empty() {
        return Err(NumBurstError::new(
            "EXPAND_EMPTY_TEMPLATE",
            "No $numX$ markers found in template.",
        ));
    }
    Ok(identities)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerMatch {
    pub span: Range<usize>,
    pub identity: Identity,
}

/// Every marker occurrence, left to right, with its byte span.
pub fn scan_markers(template: &str) -> Vec<MarkerMatch> {
    marker_regex()
        .captures_iter(template)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(MarkerMatch {
                span: whole.range(),
                identity: Identity::new(&caps[1]),
            })
        })
        .collect()
}

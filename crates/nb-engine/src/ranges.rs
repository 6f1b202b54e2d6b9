use nb_core::{
    Identity, NumBurstError, RangeMap, ValueRange, DEFAULT_RANGE_END, DEFAULT_RANGE_START,
};

/// Bounds returned by a [`RangeProvider`]. An unanswered bound falls back to
/// its default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeAnswer {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl RangeAnswer {
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn resolve(self) -> ValueRange {
        ValueRange::new(
            self.start.unwrap_or(DEFAULT_RANGE_START),
            self.end.unwrap_or(DEFAULT_RANGE_END),
        )
    }
}

pub trait RangeProvider {
    fn provide(&mut self, identity: &Identity) -> Result<RangeAnswer, NumBurstError>;
}

impl<F> RangeProvider for F
where
    F: FnMut(&Identity) -> Result<RangeAnswer, NumBurstError>,
{
    fn provide(&mut self, identity: &Identity) -> Result<RangeAnswer, NumBurstError> {
        self(identity)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRangeProvider;

impl RangeProvider for DefaultRangeProvider {
    fn provide(&mut self, _identity: &Identity) -> Result<RangeAnswer, NumBurstError> {
        Ok(RangeAnswer::default())
    }
}

/// Builds a range for every identity, asking `provider` only for identities
/// missing from `supplied`, in identity order. Inverted ranges pass through.
pub fn collect_ranges(
    identities: &[Identity],
    supplied: &RangeMap,
    provider: &mut dyn RangeProvider,
) -> Result<RangeMap, NumBurstError> {
    let mut ranges = RangeMap::new();
    for identity in identities {
        let range = match supplied.get(identity) {
            Some(range) => *range,
            None => provider.provide(identity)?.resolve(),
        };
        ranges.insert(identity.clone(), range);
    }
    Ok(ranges)
}

pub fn ordered_ranges(
    identities: &[Identity],
    ranges: &RangeMap,
) -> Result<Vec<ValueRange>, NumBurstError> {
    identities
        .iter()
        .map(|identity| {
            ranges.get(identity).copied().ok_or_else(|| {
                NumBurstError::new(
                    "RANGE_MISSING",
                    format!("No range collected for {}.", identity),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod ranges_tests {
    use super::*;

    fn ids(tokens: &[&str]) -> Vec<Identity> {
        tokens.iter().map(|token| Identity::from(*token)).collect()
    }

    #[test]
    fn collect_ranges_asks_provider_only_for_missing_identities_in_order() {
        let identities = ids(&["", "1", "2"]);
        let mut supplied = RangeMap::new();
        supplied.insert(Identity::from("1"), ValueRange::new(3, 4));
        supplied.insert(Identity::from("unused"), ValueRange::new(0, 0));

        let mut asked = Vec::new();
        let mut provider = |identity: &Identity| -> Result<RangeAnswer, NumBurstError> {
            asked.push(identity.token().to_string());
            Ok(RangeAnswer::new(7, 8))
        };
        let ranges = collect_ranges(&identities, &supplied, &mut provider).expect("collect");

        assert_eq!(asked, vec!["", "2"]);
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[&Identity::from("")], ValueRange::new(7, 8));
        assert_eq!(ranges[&Identity::from("1")], ValueRange::new(3, 4));
        assert!(!ranges.contains_key(&Identity::from("unused")));
    }

    #[test]
    fn unanswered_bounds_fall_back_to_defaults() {
        let identities = ids(&["1"]);
        let mut provider = |_: &Identity| -> Result<RangeAnswer, NumBurstError> {
            Ok(RangeAnswer {
                start: Some(5),
                end: None,
            })
        };
        let ranges = collect_ranges(&identities, &RangeMap::new(), &mut provider).expect("collect");
        assert_eq!(ranges[&Identity::from("1")], ValueRange::new(5, 10));

        let ranges = collect_ranges(&identities, &RangeMap::new(), &mut DefaultRangeProvider)
            .expect("collect");
        assert_eq!(ranges[&Identity::from("1")], ValueRange::new(1, 10));
    }

    #[test]
    fn inverted_range_is_passed_through() {
        let identities = ids(&["1"]);
        let mut provider =
            |_: &Identity| -> Result<RangeAnswer, NumBurstError> { Ok(RangeAnswer::new(9, 2)) };
        let ranges = collect_ranges(&identities, &RangeMap::new(), &mut provider).expect("collect");
        assert_eq!(ranges[&Identity::from("1")], ValueRange::new(9, 2));
    }

    #[test]
    fn provider_error_aborts_collection() {
        let identities = ids(&["1", "2"]);
        let mut calls = 0;
        let mut provider = |_: &Identity| -> Result<RangeAnswer, NumBurstError> {
            calls += 1;
            Err(NumBurstError::new("CLI_RANGE_PARSE", "bad"))
        };
        let error = collect_ranges(&identities, &RangeMap::new(), &mut provider)
            .expect_err("provider error should propagate");
        assert_eq!(error.code, "CLI_RANGE_PARSE");
        assert_eq!(calls, 1);
    }

    #[test]
    fn ordered_ranges_follows_identity_order_and_reports_gaps() {
        let identities = ids(&["a", "b"]);
        let mut ranges = RangeMap::new();
        ranges.insert(Identity::from("b"), ValueRange::new(2, 2));
        ranges.insert(Identity::from("a"), ValueRange::new(1, 1));
        assert_eq!(
            ordered_ranges(&identities, &ranges).expect("ordered"),
            vec![ValueRange::new(1, 1), ValueRange::new(2, 2)]
        );

        ranges.remove(&Identity::from("b"));
        let error = ordered_ranges(&identities, &ranges).expect_err("gap should fail");
        assert_eq!(error.code, "RANGE_MISSING");
    }
}

use std::iter::FusedIterator;

use nb_core::ValueRange;

/// Cartesian product of per-identity ranges. Each call to [`iter`] starts a
/// fresh enumeration.
///
/// [`iter`]: CombinationSpace::iter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationSpace {
    ranges: Vec<ValueRange>,
}

impl CombinationSpace {
    pub fn new(ranges: Vec<ValueRange>) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &[ValueRange] {
        &self.ranges
    }

    /// Product of range sizes, `None` if it does not fit in `u128`.
    pub fn total(&self) -> Option<u128> {
        if self.ranges.iter().any(ValueRange::is_empty) {
            return Some(0);
        }
        self.ranges
            .iter()
            .try_fold(1u128, |acc, range| acc.checked_mul(range.len()))
    }

    pub fn iter(&self) -> Combinations<'_> {
        let next = if self.ranges.iter().any(ValueRange::is_empty) {
            None
        } else {
            Some(self.ranges.iter().map(|range| range.start).collect())
        };
        Combinations {
            ranges: &self.ranges,
            next,
            remaining: self.total(),
        }
    }
}

impl<'a> IntoIterator for &'a CombinationSpace {
    type Item = Vec<i64>;
    type IntoIter = Combinations<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy product in lexicographic order, rightmost position varying fastest.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    ranges: &'a [ValueRange],
    next: Option<Vec<i64>>,
    remaining: Option<u128>,
}

impl Combinations<'_> {
    fn advance(&self, current: &[i64]) -> Option<Vec<i64>> {
        let mut successor = current.to_vec();
        for index in (0..successor.len()).rev() {
            let range = self.ranges[index];
            if successor[index] < range.end {
                successor[index] += 1;
                for (slot, reset) in successor[index + 1..]
                    .iter_mut()
                    .zip(&self.ranges[index + 1..])
                {
                    *slot = reset.start;
                }
                return Some(successor);
            }
        }
        None
    }
}

impl Iterator for Combinations<'_> {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.advance(&current);
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.map(usize::try_from) {
            Some(Ok(remaining)) => (remaining, Some(remaining)),
            _ => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Combinations<'_> {}

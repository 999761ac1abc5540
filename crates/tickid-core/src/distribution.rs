use crate::encoder::encode;
use crate::identifier::Identifier;
use smol_str::SmolStr;
use std::collections::BTreeMap;

/// Longest prefix tracked by [`PrefixDistribution`].
pub const MAX_PREFIX_LEN: usize = 3;

/// How often each identifier prefix of length 1 to 3 occurs.
///
/// Prefixes are what a reader sees first, so an uneven distribution
/// makes neighbouring identifiers harder to tell apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixDistribution {
    counts: [BTreeMap<SmolStr, u64>; MAX_PREFIX_LEN],
    total: u64,
}

impl PrefixDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, id: &Identifier) {
        // identifiers are ASCII and never shorter than the tracked prefixes
        for (len, counts) in (1..=MAX_PREFIX_LEN).zip(self.counts.iter_mut()) {
            *counts.entry(SmolStr::new(&id.as_str()[..len])).or_default() += 1;
        }
        self.total += 1;
    }

    pub fn record_value(&mut self, value: u64) {
        self.record(&encode(value));
    }

    /// Counts per prefix of `len` characters; `None` outside `1..=3`.
    pub fn counts(&self, len: usize) -> Option<&BTreeMap<SmolStr, u64>> {
        len.checked_sub(1).and_then(|i| self.counts.get(i))
    }

    /// Number of identifiers recorded.
    pub fn total(&self) -> u64 {
        self.total
    }
}

impl Extend<u64> for PrefixDistribution {
    fn extend<T: IntoIterator<Item = u64>>(&mut self, iter: T) {
        for value in iter {
            self.record_value(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_prefix_length() {
        let mut distribution = PrefixDistribution::new();
        distribution.record_value(1_567_856_598); // 68495LTTOD
        distribution.record_value(1_552_572_000); // 72639D77LD
        distribution.record_value(2006); // 68495L

        assert_eq!(distribution.total(), 3);
        let singles = distribution.counts(1).unwrap();
        assert_eq!(singles.get("6"), Some(&2));
        assert_eq!(singles.get("7"), Some(&1));
        assert_eq!(distribution.counts(3).unwrap().get("684"), Some(&2));
    }

    #[test]
    fn first_symbol_is_a_parity_digit() {
        let mut distribution = PrefixDistribution::new();
        distribution.extend(0..4096);
        // the check digit only spans 0..8
        assert_eq!(distribution.counts(1).unwrap().len(), 8);
        assert!(distribution
            .counts(1)
            .unwrap()
            .values()
            .all(|&count| count == 512));
    }

    #[test]
    fn counts_outside_tracked_lengths() {
        let distribution = PrefixDistribution::new();
        assert!(distribution.counts(0).is_none());
        assert!(distribution.counts(4).is_none());
        assert!(distribution.counts(2).unwrap().is_empty());
    }
}

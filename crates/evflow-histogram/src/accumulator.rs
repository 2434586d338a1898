//! Streaming histogram accumulator

use evflow_core::ConfigError;
use log::warn;

use crate::binning::{BinIndex, Binning};
use crate::types::{HistogramBin, HistogramSnapshot};

/// A fixed-bin frequency accumulator over incoming scalar values.
///
/// Always accumulable and always snapshot-able; there is no finalized state.
/// NaN values are counted in a dedicated invalid bucket rather than dropped.
/// Values of `-inf`/`+inf` land in underflow/overflow respectively, since IEEE
/// ordering places them outside any finite range.
#[derive(Debug, Clone)]
pub struct Histogram {
    binning: Binning,
    counts: Vec<u64>,
    underflow: u64,
    overflow: u64,
    invalid: u64,
    warned_invalid: bool,
}

impl Histogram {
    /// Create an empty histogram over the given binning
    pub fn new(binning: Binning) -> Self {
        let counts = vec![0; binning.bins()];
        Self {
            binning,
            counts,
            underflow: 0,
            overflow: 0,
            invalid: 0,
            warned_invalid: false,
        }
    }

    /// Convenience constructor validating the binning parameters
    pub fn with_range(bins: usize, lo: f64, hi: f64) -> Result<Self, ConfigError> {
        Ok(Self::new(Binning::new(bins, lo, hi)?))
    }

    /// The binning this histogram accumulates over
    pub fn binning(&self) -> &Binning {
        &self.binning
    }

    /// Ingest one value.
    pub fn accumulate(&mut self, v: f64) {
        match self.binning.index_of(v) {
            BinIndex::In(i) => self.counts[i] += 1,
            BinIndex::Under => self.underflow += 1,
            BinIndex::Over => self.overflow += 1,
            BinIndex::Invalid => {
                if !self.warned_invalid {
                    warn!("NaN value routed to the invalid bucket");
                    self.warned_invalid = true;
                }
                self.invalid += 1;
            }
        }
    }

    /// Ingest every value from an iterator.
    pub fn accumulate_all<I: IntoIterator<Item = f64>>(&mut self, values: I) {
        for v in values {
            self.accumulate(v);
        }
    }

    /// Count of values below the range
    pub fn underflow(&self) -> u64 {
        self.underflow
    }

    /// Count of values at or above the range
    pub fn overflow(&self) -> u64 {
        self.overflow
    }

    /// Count of NaN values
    pub fn invalid(&self) -> u64 {
        self.invalid
    }

    /// Total values ingested so far
    pub fn total(&self) -> u64 {
        self.counts.iter().sum::<u64>() + self.underflow + self.overflow + self.invalid
    }

    /// Add the counts of another histogram into this one, bin-wise.
    ///
    /// The two histograms must share the same binning. Underflow, overflow,
    /// and invalid counters are summed independently. Merging is associative
    /// and commutative, so partial histograms accumulated over a partition of
    /// the input combine to the same result as a serial pass.
    pub fn merge(&mut self, other: &Histogram) -> Result<(), ConfigError> {
        if self.binning != other.binning {
            return Err(ConfigError::IncompatibleBinning);
        }
        for (c, o) in self.counts.iter_mut().zip(other.counts.iter()) {
            *c += o;
        }
        self.underflow += other.underflow;
        self.overflow += other.overflow;
        self.invalid += other.invalid;
        self.warned_invalid |= other.warned_invalid;
        Ok(())
    }

    /// Take an immutable copy of the current state. Does not reset.
    pub fn snapshot(&self) -> HistogramSnapshot {
        let edges = self.binning.edges();
        let bins = self
            .counts
            .iter()
            .enumerate()
            .map(|(i, &count)| HistogramBin {
                left: edges[i],
                right: edges[i + 1],
                count,
            })
            .collect();
        HistogramSnapshot::new(bins, self.underflow, self.overflow, self.invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn hist(bins: usize, lo: f64, hi: f64) -> Histogram {
        Histogram::with_range(bins, lo, hi).unwrap()
    }

    #[test]
    fn test_basic_accumulation() {
        let mut h = hist(4, 0.0, 4.0);
        h.accumulate_all([0.5, 1.5, 2.5, 0.5, -1.0, 5.0]);

        let snap = h.snapshot();
        assert_eq!(snap.counts(), vec![2, 1, 1, 0]);
        assert_eq!(snap.underflow(), 1);
        assert_eq!(snap.overflow(), 1);
        assert_eq!(snap.total(), 6);
    }

    #[test]
    fn test_upper_edge_policy() {
        // Exactly hi lands in the last bin, not overflow
        let mut h = hist(16, 0.0, 4.0);
        h.accumulate(4.0);

        let snap = h.snapshot();
        assert_eq!(snap.counts()[15], 1);
        assert_eq!(snap.overflow(), 0);
    }

    #[test]
    fn test_non_finite_routing() {
        let mut h = hist(4, 0.0, 4.0);
        h.accumulate(f64::NAN);
        h.accumulate(f64::NAN);
        h.accumulate(f64::INFINITY);
        h.accumulate(f64::NEG_INFINITY);

        assert_eq!(h.invalid(), 2);
        assert_eq!(h.overflow(), 1);
        assert_eq!(h.underflow(), 1);
        assert_eq!(h.snapshot().in_range(), 0);
    }

    #[test]
    fn test_count_conservation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut h = hist(16, 0.0, 4.0);
        let n = 10_000;
        for _ in 0..n {
            // Deliberately wider than the range so both flows get traffic
            h.accumulate(rng.gen_range(-2.0..8.0));
        }
        assert_eq!(h.total(), n);
        assert_eq!(h.snapshot().total(), n);
    }

    #[test]
    fn test_merge_matches_serial() {
        let values = [0.1, 1.2, 3.9, 4.0, -0.5, 7.0, f64::NAN, 2.2];

        let mut serial = hist(8, 0.0, 4.0);
        serial.accumulate_all(values);

        let mut left = hist(8, 0.0, 4.0);
        let mut right = hist(8, 0.0, 4.0);
        left.accumulate_all(values[..3].iter().copied());
        right.accumulate_all(values[3..].iter().copied());
        left.merge(&right).unwrap();

        assert_eq!(left.snapshot(), serial.snapshot());
    }

    #[test]
    fn test_merge_rejects_incompatible_binning() {
        let mut a = hist(8, 0.0, 4.0);
        let b = hist(16, 0.0, 4.0);
        assert_eq!(a.merge(&b).unwrap_err(), ConfigError::IncompatibleBinning);

        let c = hist(8, 0.0, 5.0);
        assert!(a.merge(&c).is_err());
    }

    #[test]
    fn test_snapshot_is_stable() {
        let mut h = hist(4, 0.0, 4.0);
        h.accumulate_all([0.5, 3.0, 9.0]);

        let first = h.snapshot();
        let second = h.snapshot();
        assert_eq!(first, second);

        // Snapshot does not reset
        h.accumulate(1.0);
        assert_eq!(h.total(), 4);
    }
}

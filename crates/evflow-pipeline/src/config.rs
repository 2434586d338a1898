//! Configuration surface for a fill run

use evflow_core::ConfigError;
use evflow_histogram::Histogram;

use crate::cut::EnergyCut;
use crate::observable::TransverseMomentum;
use crate::pipeline::EventPipeline;

/// Parameters for a standard fill run, all defaulted.
///
/// Validation happens in [`build`](FillConfig::build), so an invalid
/// configuration fails at construction time and never mid-stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillConfig {
    /// Minimum candidate energy (strictly greater-than)
    pub threshold: f64,
    /// Number of histogram bins
    pub bins: usize,
    /// Lower edge of the histogram range
    pub lo: f64,
    /// Upper edge of the histogram range
    pub hi: f64,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            threshold: EnergyCut::DEFAULT_THRESHOLD,
            bins: 16,
            lo: 0.0,
            hi: 4.0,
        }
    }
}

impl FillConfig {
    /// Validate the configuration and build the pipeline/histogram pair
    pub fn build(&self) -> Result<(EventPipeline, Histogram), ConfigError> {
        let cut = EnergyCut::new(self.threshold)?;
        let histogram = Histogram::with_range(self.bins, self.lo, self.hi)?;
        Ok((EventPipeline::new(cut, TransverseMomentum), histogram))
    }
}

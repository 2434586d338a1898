//! Per-candidate selection

use evflow_core::ConfigError;

/// Decides whether a candidate passes selection.
///
/// Implementations must be pure functions of the candidate components.
pub trait CandidateCut {
    /// Keep the candidate with components `(e, px, py)`?
    fn keep(&self, e: f64, px: f64, py: f64) -> bool;
}

/// Cut on minimum candidate energy.
///
/// A candidate passes if `e > threshold`. The comparison follows IEEE
/// semantics: NaN energies compare false and are excluded without
/// special-casing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyCut {
    threshold: f64,
}

impl EnergyCut {
    /// Default energy threshold
    pub const DEFAULT_THRESHOLD: f64 = 100.0;

    /// Create a cut with the given threshold.
    ///
    /// Fails if the threshold is NaN or infinite.
    pub fn new(threshold: f64) -> Result<Self, ConfigError> {
        if !threshold.is_finite() {
            return Err(ConfigError::NonFiniteThreshold(threshold));
        }
        Ok(Self { threshold })
    }

    /// The configured threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for EnergyCut {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }
}

impl CandidateCut for EnergyCut {
    fn keep(&self, e: f64, _px: f64, _py: f64) -> bool {
        e > self.threshold
    }
}

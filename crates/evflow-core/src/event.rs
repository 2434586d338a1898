//! Per-event record type
//!
//! An [`Event`] holds a variable number of candidates as three parallel f64
//! columns: energy, and the x/y momentum components. The columns always have
//! identical length; a mismatch is rejected at construction, never truncated
//! or padded.

use crate::error::SourceError;

/// One event: three equal-length candidate columns.
///
/// Immutable once constructed. Candidate `i` is the triplet
/// `(e[i], px[i], py[i])`.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    e: Vec<f64>,
    px: Vec<f64>,
    py: Vec<f64>,
}

impl Event {
    /// Create an event from its three candidate columns.
    ///
    /// Fails if the columns disagree in length. Zero candidates is valid.
    pub fn new(e: Vec<f64>, px: Vec<f64>, py: Vec<f64>) -> Result<Self, SourceError> {
        if e.len() != px.len() || e.len() != py.len() {
            return Err(SourceError::column_mismatch(0, e.len(), px.len(), py.len()));
        }
        Ok(Self { e, px, py })
    }

    /// Number of candidates in this event
    pub fn len(&self) -> usize {
        self.e.len()
    }

    /// Whether the event has no candidates
    pub fn is_empty(&self) -> bool {
        self.e.is_empty()
    }

    /// Candidate energies
    pub fn energies(&self) -> &[f64] {
        &self.e
    }

    /// Candidate x-momentum components
    pub fn px(&self) -> &[f64] {
        &self.px
    }

    /// Candidate y-momentum components
    pub fn py(&self) -> &[f64] {
        &self.py
    }

    /// The `(e, px, py)` triplet for candidate `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    pub fn candidate(&self, i: usize) -> (f64, f64, f64) {
        (self.e[i], self.px[i], self.py[i])
    }
}

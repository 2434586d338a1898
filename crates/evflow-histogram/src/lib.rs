//! Fixed-bin streaming histogram for the evflow pipeline
//!
//! This crate provides the accumulation end of the pipeline: a fixed-width
//! binning over a half-open range `[lo, hi)`, a streaming [`Histogram`] that
//! ingests one scalar at a time, and an immutable [`HistogramSnapshot`] taken
//! at report time.
//!
//! # Key properties
//!
//! - **Explicit flow counters**: values below/above the range are counted in
//!   underflow/overflow rather than dropped
//! - **NaN policy**: NaN values land in a dedicated invalid bucket
//! - **Boundary policy**: a value exactly at `hi` belongs to the last bin
//! - **Mergeable**: partial histograms over a partition of the input combine
//!   bin-wise to the serial result
//!
//! # Examples
//!
//! ```rust
//! use evflow_histogram::Histogram;
//!
//! let mut hist = Histogram::with_range(16, 0.0, 4.0).unwrap();
//! hist.accumulate_all([0.1, 1.5, 3.99, 5.0]);
//!
//! let snap = hist.snapshot();
//! assert_eq!(snap.in_range(), 3);
//! assert_eq!(snap.overflow(), 1);
//! for bin in snap.bins().iter().filter(|b| b.count > 0) {
//!     println!("{bin}");
//! }
//! ```
//!
//! ## Partitioned accumulation
//!
//! ```rust
//! use evflow_histogram::{Binning, Histogram};
//!
//! let binning = Binning::new(8, 0.0, 4.0).unwrap();
//! let mut total = Histogram::new(binning);
//! for chunk in [[0.5, 1.5], [2.5, 3.5]] {
//!     let mut partial = Histogram::new(binning);
//!     partial.accumulate_all(chunk);
//!     total.merge(&partial).unwrap();
//! }
//! assert_eq!(total.total(), 4);
//! ```

pub mod accumulator;
pub mod binning;
pub mod types;

pub use accumulator::Histogram;
pub use binning::{BinIndex, Binning};
pub use types::{HistogramBin, HistogramSnapshot};

pub use evflow_core::{ConfigError, Result};

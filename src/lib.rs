//! Single-pass event filter/transform/histogram pipeline
//!
//! evflow processes per-event particle candidate data — three equal-length
//! columns of energy and transverse momentum components — through a
//! filter-map-reduce chain: a [`RecordSource`] yields events one at a time, an
//! [`EventPipeline`] selects candidates and computes a derived observable,
//! and a fixed-bin [`Histogram`] accumulates the results with explicit
//! underflow/overflow/invalid counters.
//!
//! The workspace crates are re-exported here:
//!
//! - [`evflow_core`] — event record type, source trait, error taxonomy
//! - [`evflow_source`] — in-memory and JSON-store record sources
//! - [`evflow_histogram`] — streaming fixed-bin histogram with merge
//! - [`evflow_pipeline`] — cut/observable seams, config, fill drivers
//!
//! # Example
//!
//! ```rust
//! use evflow::{fill, Event, FillConfig, MemorySource};
//!
//! let events = vec![
//!     Event::new(vec![150.0, 50.0], vec![3.0, 1.0], vec![4.0, 1.0]).unwrap(),
//!     Event::new(vec![200.0], vec![0.0], vec![0.0]).unwrap(),
//! ];
//! let mut source = MemorySource::new(events);
//!
//! let (pipeline, mut histogram) = FillConfig::default().build().unwrap();
//! let summary = fill(&mut source, &pipeline, &mut histogram).unwrap();
//!
//! assert_eq!(summary.selected, 2);
//! assert_eq!(summary.snapshot.counts()[0], 1); // pt = 0.0
//! assert_eq!(summary.snapshot.overflow(), 1);  // pt = 5.0 above [0, 4)
//! ```

pub use evflow_core::{ConfigError, Error, Event, RecordSource, Result, SourceError};
pub use evflow_histogram::{BinIndex, Binning, Histogram, HistogramBin, HistogramSnapshot};
pub use evflow_pipeline::{
    fill, CandidateCut, EnergyCut, EventPipeline, FillConfig, FillSummary, Observable,
    TransverseMomentum,
};
pub use evflow_source::{EventStore, MemorySource, TableSource};

#[cfg(feature = "parallel")]
pub use evflow_pipeline::fill_parallel;

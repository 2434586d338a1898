//! Event selection, transformation, and histogram filling
//!
//! This crate is the middle of the evflow chain: it takes events from a
//! [`RecordSource`](evflow_core::RecordSource), applies a per-candidate cut
//! and observable, and accumulates the surviving values into a histogram —
//! one event at a time, single pass, no buffering of the dataset.
//!
//! The selection and transform are trait seams ([`CandidateCut`],
//! [`Observable`]) chosen at configuration time; the provided
//! implementations are the minimum-energy cut and transverse momentum.
//!
//! # Example
//!
//! ```rust
//! use evflow_core::Event;
//! use evflow_pipeline::{fill, FillConfig};
//! use evflow_source::MemorySource;
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
//! assert_eq!(summary.events, 2);
//! assert_eq!(summary.selected, 2);
//! ```
//!
//! With the `parallel` feature, [`fill_parallel`] fans accumulation out over
//! the rayon pool with one private histogram per partition, merged at the
//! end; the result is bin-for-bin identical to the sequential driver.

pub mod config;
pub mod cut;
pub mod driver;
pub mod observable;
pub mod pipeline;

pub use config::FillConfig;
pub use cut::{CandidateCut, EnergyCut};
pub use driver::{fill, FillSummary};
pub use observable::{Observable, TransverseMomentum};
pub use pipeline::EventPipeline;

#[cfg(feature = "parallel")]
pub use driver::fill_parallel;

pub use evflow_core::{Error, Result};

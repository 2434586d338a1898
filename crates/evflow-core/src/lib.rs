//! Core types and traits for the evflow event pipeline
//!
//! This crate provides the shared vocabulary the other evflow crates build on:
//!
//! - [`Event`] — one unit of input data holding a variable number of
//!   candidates as three equal-length columns (energy, px, py)
//! - [`RecordSource`] — the capability boundary to the external event store
//! - [`SourceError`] / [`ConfigError`] — the two failure families, unified
//!   under [`Error`]
//!
//! # Example
//!
//! ```rust
//! use evflow_core::Event;
//!
//! let event = Event::new(vec![150.0, 50.0], vec![3.0, 1.0], vec![4.0, 1.0]).unwrap();
//! assert_eq!(event.len(), 2);
//! assert_eq!(event.candidate(0), (150.0, 3.0, 4.0));
//! ```

pub mod error;
pub mod event;
pub mod traits;

pub use error::{ConfigError, Error, Result, SourceError};
pub use event::Event;
pub use traits::RecordSource;

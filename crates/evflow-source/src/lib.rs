//! Record sources for the evflow pipeline
//!
//! Two implementations of the [`RecordSource`](evflow_core::RecordSource)
//! capability:
//!
//! - [`MemorySource`] — owned events, for tests and synthetic inputs
//! - [`EventStore`] / [`TableSource`] — a JSON-backed store of named event
//!   tables, standing in for the external columnar reader at the capability
//!   boundary
//!
//! # Example
//!
//! ```rust
//! use evflow_core::RecordSource;
//! use evflow_source::EventStore;
//!
//! let store = EventStore::from_str(r#"{
//!     "Events": {
//!         "e":  [[150.0, 50.0]],
//!         "px": [[3.0, 1.0]],
//!         "py": [[4.0, 1.0]]
//!     }
//! }"#).unwrap();
//!
//! let mut source = store.table("Events").unwrap();
//! let event = source.next_event().unwrap().unwrap();
//! assert_eq!(event.len(), 2);
//! ```

pub mod memory;
pub mod store;

pub use memory::MemorySource;
pub use store::{EventStore, TableSource};

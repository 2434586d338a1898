//! JSON-backed event store
//!
//! A store file maps table names to three parallel column-of-columns arrays:
//!
//! ```json
//! {
//!   "Events": {
//!     "e":  [[150.0, 50.0], [200.0]],
//!     "px": [[3.0, 1.0],    [0.0]],
//!     "py": [[4.0, 1.0],    [0.0]]
//!   }
//! }
//! ```
//!
//! The outer arrays must agree in length (event count, checked when a table is
//! opened); the inner arrays must agree per event (candidate count, checked
//! lazily as each record is read). A mismatch is fatal for the affected
//! record, never truncated or padded.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use evflow_core::{Event, RecordSource, SourceError};

#[derive(Debug, Clone, Deserialize)]
struct RawTable {
    e: Vec<Vec<f64>>,
    px: Vec<Vec<f64>>,
    py: Vec<Vec<f64>>,
}

/// A store of named event tables decoded from JSON.
#[derive(Debug, Clone)]
pub struct EventStore {
    tables: HashMap<String, RawTable>,
}

impl EventStore {
    /// Open a store file from disk.
    ///
    /// Returns [`SourceError::NotFound`] if the path does not resolve,
    /// [`SourceError::Io`] for other I/O failures, and
    /// [`SourceError::Decode`] if the payload is not a valid store document.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let payload = std::fs::read_to_string(path).map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                SourceError::NotFound(path.display().to_string())
            } else {
                SourceError::Io(err)
            }
        })?;
        let store = Self::from_str(&payload)?;
        debug!(
            "opened event store {} ({} tables)",
            path.display(),
            store.tables.len()
        );
        Ok(store)
    }

    /// Decode a store from a JSON string (used for in-memory fixtures).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(payload: &str) -> Result<Self, SourceError> {
        let tables: HashMap<String, RawTable> =
            serde_json::from_str(payload).map_err(|err| SourceError::Decode(err.to_string()))?;
        Ok(Self { tables })
    }

    /// Names of the tables in this store
    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Open a table as a record source.
    ///
    /// Returns [`SourceError::NotFound`] for an unknown table name, and
    /// [`SourceError::Malformed`] if the three outer column arrays disagree
    /// in event count.
    pub fn table(&self, name: &str) -> Result<TableSource, SourceError> {
        let raw = self
            .tables
            .get(name)
            .ok_or_else(|| SourceError::NotFound(format!("table '{name}'")))?;

        let n = raw.e.len();
        if raw.px.len() != n || raw.py.len() != n {
            return Err(SourceError::Malformed {
                event: 0,
                reason: format!(
                    "table '{name}' columns disagree in event count (e={}, px={}, py={})",
                    raw.e.len(),
                    raw.px.len(),
                    raw.py.len()
                ),
            });
        }

        debug!("opened table '{name}' ({n} events)");
        Ok(TableSource {
            table: raw.clone(),
            cursor: 0,
        })
    }
}

/// A record source over one table of an [`EventStore`].
#[derive(Debug, Clone)]
pub struct TableSource {
    table: RawTable,
    cursor: usize,
}

impl TableSource {
    /// Number of events in the table
    pub fn len(&self) -> usize {
        self.table.e.len()
    }

    /// Whether the table holds no events
    pub fn is_empty(&self) -> bool {
        self.table.e.is_empty()
    }
}

impl RecordSource for TableSource {
    fn next_event(&mut self) -> Result<Option<Event>, SourceError> {
        let idx = self.cursor;
        if idx >= self.table.e.len() {
            return Ok(None);
        }
        self.cursor += 1;

        let event = Event::new(
            self.table.e[idx].clone(),
            self.table.px[idx].clone(),
            self.table.py[idx].clone(),
        )
        .map_err(|err| match err {
            SourceError::Malformed { reason, .. } => SourceError::Malformed {
                event: idx as u64,
                reason,
            },
            other => other,
        })?;
        Ok(Some(event))
    }

    fn rewind(&mut self) -> Result<(), SourceError> {
        self.cursor = 0;
        Ok(())
    }
}

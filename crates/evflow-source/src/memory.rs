//! In-memory record source for tests, demos, and synthetic inputs

use evflow_core::{Event, RecordSource, SourceError};

/// A record source backed by an owned vector of events.
#[derive(Debug, Clone)]
pub struct MemorySource {
    events: Vec<Event>,
    cursor: usize,
}

impl MemorySource {
    /// Create a source over the given events
    pub fn new(events: Vec<Event>) -> Self {
        Self { events, cursor: 0 }
    }

    /// Number of events in the source
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the source holds no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl From<Vec<Event>> for MemorySource {
    fn from(events: Vec<Event>) -> Self {
        Self::new(events)
    }
}

impl RecordSource for MemorySource {
    fn next_event(&mut self) -> Result<Option<Event>, SourceError> {
        match self.events.get(self.cursor) {
            Some(ev) => {
                self.cursor += 1;
                Ok(Some(ev.clone()))
            }
            None => Ok(None),
        }
    }

    fn rewind(&mut self) -> Result<(), SourceError> {
        self.cursor = 0;
        Ok(())
    }
}

//! Core traits for event sources
//!
//! The [`RecordSource`] trait is the capability boundary to whatever holds the
//! event data on disk or in memory. Concrete sources live in `evflow-source`;
//! the pipeline and drivers only see this trait.

use crate::error::SourceError;
use crate::event::Event;

/// A restartable, finite, lazy sequence of events.
///
/// `next_event` yields events one at a time until the stream is exhausted
/// (`Ok(None)`). Reading has no side effect beyond advancing the internal
/// cursor; `rewind` resets it so the sequence can be replayed.
///
/// A malformed record (columns of unequal length) is a fatal error for that
/// record: implementations must return [`SourceError::Malformed`] rather than
/// truncate or pad.
pub trait RecordSource {
    /// Produce the next event, or `None` once the stream is exhausted.
    fn next_event(&mut self) -> Result<Option<Event>, SourceError>;

    /// Reset the read cursor to the start of the stream.
    fn rewind(&mut self) -> Result<(), SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal in-place source to exercise the trait contract without
    // depending on evflow-source.
    struct CountingSource {
        remaining: u32,
    }

    impl RecordSource for CountingSource {
        fn next_event(&mut self) -> Result<Option<Event>, SourceError> {
            if self.remaining == 0 {
                return Ok(None);
            }
            self.remaining -= 1;
            Ok(Some(Event::new(vec![1.0], vec![0.0], vec![0.0])?))
        }

        fn rewind(&mut self) -> Result<(), SourceError> {
            self.remaining = 3;
            Ok(())
        }
    }

    #[test]
    fn test_source_drains_and_rewinds() {
        let mut src = CountingSource { remaining: 3 };
        let mut n = 0;
        while let Some(ev) = src.next_event().unwrap() {
            assert_eq!(ev.len(), 1);
            n += 1;
        }
        assert_eq!(n, 3);
        assert!(src.next_event().unwrap().is_none());

        src.rewind().unwrap();
        assert!(src.next_event().unwrap().is_some());
    }
}

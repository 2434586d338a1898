//! Fill drivers: stream events from a source through a pipeline into a
//! histogram

use log::info;

use evflow_core::{RecordSource, Result};
use evflow_histogram::{Histogram, HistogramSnapshot};

use crate::cut::CandidateCut;
use crate::observable::Observable;
use crate::pipeline::EventPipeline;

/// Report produced by a completed fill run.
#[derive(Debug, Clone, PartialEq)]
pub struct FillSummary {
    /// Events read from the source
    pub events: u64,
    /// Candidates seen across all events
    pub candidates: u64,
    /// Candidates that passed the cut and were accumulated
    pub selected: u64,
    /// Histogram state at the end of the run
    pub snapshot: HistogramSnapshot,
}

/// Sequential fill: one event fully read, filtered, transformed, and
/// accumulated before the next is requested.
///
/// Aborts on the first source error; histogram state accumulated before the
/// abort is left in place but no summary is produced for it.
pub fn fill<S, C, O>(
    source: &mut S,
    pipeline: &EventPipeline<C, O>,
    histogram: &mut Histogram,
) -> Result<FillSummary>
where
    S: RecordSource,
    C: CandidateCut,
    O: Observable,
{
    let mut events = 0u64;
    let mut candidates = 0u64;
    let mut selected = 0u64;

    while let Some(event) = source.next_event()? {
        events += 1;
        candidates += event.len() as u64;
        for value in pipeline.values(&event) {
            selected += 1;
            histogram.accumulate(value);
        }
    }

    info!("fill complete: {events} events, {selected}/{candidates} candidates selected");
    Ok(FillSummary {
        events,
        candidates,
        selected,
        snapshot: histogram.snapshot(),
    })
}

/// Parallel fill: events are read from the source in sequential chunks, each
/// chunk is fanned out across the rayon pool with one private histogram per
/// partition, and partials are merged into the caller's histogram.
///
/// Produces bin-for-bin the same result as [`fill`] (accumulation commutes
/// and merging is associative).
#[cfg(feature = "parallel")]
pub fn fill_parallel<S, C, O>(
    source: &mut S,
    pipeline: &EventPipeline<C, O>,
    histogram: &mut Histogram,
    chunk_size: usize,
) -> Result<FillSummary>
where
    S: RecordSource,
    C: CandidateCut + Sync,
    O: Observable + Sync,
{
    use rayon::prelude::*;

    // Events handed to one rayon task
    const PARTITION: usize = 64;

    let chunk_size = chunk_size.max(1);
    let mut events = 0u64;
    let mut candidates = 0u64;
    let mut selected = 0u64;

    loop {
        let mut chunk = Vec::with_capacity(chunk_size);
        while chunk.len() < chunk_size {
            match source.next_event()? {
                Some(event) => chunk.push(event),
                None => break,
            }
        }
        if chunk.is_empty() {
            break;
        }

        events += chunk.len() as u64;
        candidates += chunk.iter().map(|ev| ev.len() as u64).sum::<u64>();

        let binning = *histogram.binning();
        let partials: Vec<Histogram> = chunk
            .par_chunks(PARTITION)
            .map(|partition| {
                let mut partial = Histogram::new(binning);
                for event in partition {
                    partial.accumulate_all(pipeline.values(event));
                }
                partial
            })
            .collect();

        for partial in &partials {
            selected += partial.total();
            histogram.merge(partial)?;
        }
    }

    info!(
        "parallel fill complete: {events} events, {selected}/{candidates} candidates selected"
    );
    Ok(FillSummary {
        events,
        candidates,
        selected,
        snapshot: histogram.snapshot(),
    })
}

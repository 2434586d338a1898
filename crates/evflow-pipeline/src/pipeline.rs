//! Per-event filter and transform

use evflow_core::Event;

use crate::cut::{CandidateCut, EnergyCut};
use crate::observable::{Observable, TransverseMomentum};

/// Filters an event's candidates through a cut and maps the survivors
/// through an observable.
///
/// A pure function of `(event, cut, observable)`: the input event is never
/// mutated, and candidates are visited once each, in index order. An event
/// with zero candidates yields an empty sequence.
#[derive(Debug, Clone)]
pub struct EventPipeline<C = EnergyCut, O = TransverseMomentum> {
    cut: C,
    observable: O,
}

impl EventPipeline {
    /// Pipeline with the default energy cut and transverse momentum observable
    pub fn with_defaults() -> Self {
        Self {
            cut: EnergyCut::default(),
            observable: TransverseMomentum,
        }
    }
}

impl<C: CandidateCut, O: Observable> EventPipeline<C, O> {
    /// Assemble a pipeline from a cut and an observable
    pub fn new(cut: C, observable: O) -> Self {
        Self { cut, observable }
    }

    /// The configured cut
    pub fn cut(&self) -> &C {
        &self.cut
    }

    /// The configured observable
    pub fn observable(&self) -> &O {
        &self.observable
    }

    /// The observable values of the candidates that pass the cut,
    /// lazily, in index order.
    pub fn values<'a>(&'a self, event: &'a Event) -> impl Iterator<Item = f64> + 'a {
        (0..event.len()).filter_map(move |i| {
            let (e, px, py) = event.candidate(i);
            self.cut
                .keep(e, px, py)
                .then(|| self.observable.eval(e, px, py))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn event(e: Vec<f64>, px: Vec<f64>, py: Vec<f64>) -> Event {
        Event::new(e, px, py).unwrap()
    }

    #[test]
    fn test_filter_and_transform() {
        let pipeline = EventPipeline::with_defaults();
        let ev = event(vec![150.0, 50.0], vec![3.0, 1.0], vec![4.0, 1.0]);

        let values: Vec<f64> = pipeline.values(&ev).collect();
        assert_eq!(values.len(), 1);
        assert_relative_eq!(values[0], 5.0);
    }

    #[test]
    fn test_empty_event_yields_nothing() {
        let pipeline = EventPipeline::with_defaults();
        let ev = event(vec![], vec![], vec![]);
        assert_eq!(pipeline.values(&ev).count(), 0);
    }

    #[test]
    fn test_index_order_preserved() {
        let pipeline = EventPipeline::with_defaults();
        let ev = event(
            vec![200.0, 50.0, 300.0, 101.0],
            vec![3.0, 9.0, 0.0, 6.0],
            vec![4.0, 9.0, 1.0, 8.0],
        );

        let values: Vec<f64> = pipeline.values(&ev).collect();
        assert_eq!(values, vec![5.0, 1.0, 10.0]);
    }

    #[test]
    fn test_nan_energy_excluded_nan_momentum_emitted() {
        let pipeline = EventPipeline::with_defaults();
        let ev = event(
            vec![f64::NAN, 150.0],
            vec![1.0, f64::NAN],
            vec![1.0, 2.0],
        );

        let values: Vec<f64> = pipeline.values(&ev).collect();
        // NaN energy fails the cut; NaN momentum passes through as NaN
        assert_eq!(values.len(), 1);
        assert!(values[0].is_nan());
    }

    #[test]
    fn test_input_event_unchanged() {
        let pipeline = EventPipeline::with_defaults();
        let ev = event(vec![150.0], vec![3.0], vec![4.0]);
        let copy = ev.clone();
        let _ = pipeline.values(&ev).count();
        assert_eq!(ev, copy);
    }
}

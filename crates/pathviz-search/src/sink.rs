//! The notification interface a visualizer implements.

use pathviz_core::Cell;

use crate::engine::SearchOutcome;

/// Receives per-step notifications from a [`SearchEngine`](crate::SearchEngine).
///
/// The engine calls [`on_visited`](Self::on_visited) once for every newly
/// discovered cell other than the start and end, and
/// [`on_completed`](Self::on_completed) exactly once per run when it reaches
/// a terminal outcome.
pub trait EventSink {
    /// `cell` was discovered and queued for expansion.
    fn on_visited(&mut self, cell: Cell);

    /// The run ended. `path` runs from start to end inclusive, and is empty
    /// when the outcome is [`SearchOutcome::Unreachable`].
    fn on_completed(&mut self, outcome: SearchOutcome, path: &[Cell]);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    #[inline]
    fn on_visited(&mut self, cell: Cell) {
        (**self).on_visited(cell);
    }

    #[inline]
    fn on_completed(&mut self, outcome: SearchOutcome, path: &[Cell]) {
        (**self).on_completed(outcome, path);
    }
}

/// A sink that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_visited(&mut self, _cell: Cell) {}
    fn on_completed(&mut self, _outcome: SearchOutcome, _path: &[Cell]) {}
}

/// A single notification, as stored by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Visited(Cell),
    Completed {
        outcome: SearchOutcome,
        path: Vec<Cell>,
    },
}

/// A sink that records every event in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Vec<SearchEvent>,
}

impl RecordingSink {
    /// An empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    /// The cells reported through `on_visited`, in order.
    pub fn visited(&self) -> impl Iterator<Item = Cell> + '_ {
        self.events.iter().filter_map(|e| match e {
            SearchEvent::Visited(c) => Some(*c),
            SearchEvent::Completed { .. } => None,
        })
    }

    /// The first completion event, if any.
    pub fn completion(&self) -> Option<(SearchOutcome, &[Cell])> {
        self.events.iter().find_map(|e| match e {
            SearchEvent::Completed { outcome, path } => Some((*outcome, path.as_slice())),
            SearchEvent::Visited(_) => None,
        })
    }

    /// Number of completion events received.
    pub fn completions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SearchEvent::Completed { .. }))
            .count()
    }

    /// Drain the recording.
    pub fn take(&mut self) -> Vec<SearchEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for RecordingSink {
    fn on_visited(&mut self, cell: Cell) {
        self.events.push(SearchEvent::Visited(cell));
    }

    fn on_completed(&mut self, outcome: SearchOutcome, path: &[Cell]) {
        self.events.push(SearchEvent::Completed {
            outcome,
            path: path.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed<S: EventSink>(mut sink: S) {
        sink.on_visited(Cell::new(1, 0));
        sink.on_visited(Cell::new(2, 0));
        sink.on_completed(SearchOutcome::Found, &[Cell::new(0, 0), Cell::new(1, 0)]);
    }

    #[test]
    fn recording_through_mut_ref() {
        let mut rec = RecordingSink::new();
        feed(&mut rec);
        assert_eq!(rec.events().len(), 3);
        assert_eq!(
            rec.visited().collect::<Vec<_>>(),
            vec![Cell::new(1, 0), Cell::new(2, 0)]
        );
        let (outcome, path) = rec.completion().unwrap();
        assert_eq!(outcome, SearchOutcome::Found);
        assert_eq!(path.len(), 2);
        assert_eq!(rec.completions(), 1);
        assert_eq!(rec.take().len(), 3);
        assert!(rec.events().is_empty());
    }

    #[test]
    fn null_sink_accepts_everything() {
        feed(NullSink);
    }
}

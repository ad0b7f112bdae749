use super::Record;

/// Event emitted by the bisection solver after each iteration.
///
/// The event borrows the trace so far; its last entry is the iteration that
/// was just completed.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    trace: &'a [Record],
    bracket: [f64; 2],
}

impl<'a> Event<'a> {
    pub(super) fn new(trace: &'a [Record], bracket: [f64; 2]) -> Self {
        debug_assert!(!trace.is_empty(), "events follow a recorded iteration");
        Self { trace, bracket }
    }

    /// Returns the record of the iteration that was just completed.
    #[must_use]
    pub fn record(&self) -> &'a Record {
        &self.trace[self.trace.len() - 1]
    }

    /// Returns every record so far, oldest first.
    #[must_use]
    pub fn trace(&self) -> &'a [Record] {
        self.trace
    }

    /// Returns the bracket `[a, b]` the midpoint was taken from.
    #[must_use]
    pub fn bracket(&self) -> [f64; 2] {
        self.bracket
    }
}

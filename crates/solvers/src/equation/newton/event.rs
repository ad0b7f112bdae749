use super::Record;

/// Event emitted by the Newton-Raphson solver after each recorded iteration.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    trace: &'a [Record],
}

impl<'a> Event<'a> {
    pub(super) fn new(trace: &'a [Record]) -> Self {
        debug_assert!(!trace.is_empty(), "events follow a recorded iteration");
        Self { trace }
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
}

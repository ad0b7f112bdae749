/// Hook that sees every solver iteration and may steer the solve.
///
/// The bisection and Newton-Raphson solvers call `observe` once per recorded
/// iteration. Returning `None` lets the iteration continue; returning
/// `Some(action)` asks for a solver-specific action such as stopping early.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. Pass `()` to solve
/// without observation.
pub trait Observer<E, A> {
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// Never acts.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Stop {
        Now,
    }

    fn drive<O: Observer<usize, Stop>>(mut observer: O, events: usize) -> Option<usize> {
        (1..=events).find(|event| observer.observe(event).is_some())
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), 10), None);
    }

    #[test]
    fn closure_observer_can_stop() {
        let observer = |event: &usize| (*event == 4).then_some(Stop::Now);
        assert_eq!(drive(observer, 10), Some(4));
    }
}

use approx::assert_relative_eq;

use crate::equation::Config;

use super::{Action, Error, Event, Status, solve, solve_unobserved};

fn config(tolerance: f64, max_iters: usize) -> Config {
    Config::new(tolerance, max_iters).expect("valid config")
}

#[test]
fn converges_on_a_simple_root() {
    let f = |x: f64| x * x - 2.0;

    let solution =
        solve_unobserved(&f, [0.0, 2.0], &Config::default()).expect("valid bracket");

    assert_eq!(solution.status, Status::Converged);
    let root = solution.root.expect("converged runs have a root");
    assert_relative_eq!(root, 2.0_f64.sqrt(), epsilon = 1e-6);
    assert!(solution.residual.expect("residual").abs() < 1e-5);
    assert_eq!(solution.iters, solution.trace.len());
}

#[test]
fn first_iteration_reports_bracket_width() {
    let f = |x: f64| x - 0.3;

    let solution = solve_unobserved(&f, [0.0, 1.0], &config(1e-6, 100)).expect("valid bracket");

    let first = solution.trace[0];
    assert_eq!(first.iter, 1);
    assert_relative_eq!(first.c, 0.5);
    assert_relative_eq!(first.error, 1.0);

    let second = solution.trace[1];
    assert_relative_eq!(second.a, 0.0);
    assert_relative_eq!(second.b, 0.5);
    assert_relative_eq!(second.c, 0.25);
    assert_relative_eq!(second.error, 0.25);
}

#[test]
fn trace_rows_are_consistent() {
    let f = |x: f64| x.powi(3) - x - 2.0;

    let solution = solve_unobserved(&f, [1.0, 2.0], &config(1e-10, 200)).expect("valid bracket");

    assert_eq!(solution.status, Status::Converged);
    for (i, record) in solution.trace.iter().enumerate() {
        assert_eq!(record.iter, i + 1);
        assert!(record.a < record.c && record.c < record.b);
        assert_relative_eq!(record.fc, f(record.c));
        assert!(record.fa * record.fb < 0.0);
    }
    let last = solution.trace.last().expect("at least one iteration");
    assert_eq!(solution.root, Some(last.c));
    assert_eq!(solution.error, last.error);
}

#[test]
fn same_sign_bracket_fails_without_iterating() {
    let f = |x: f64| x * x + 1.0;

    let solution = solve_unobserved(&f, [-1.0, 1.0], &Config::default()).expect("valid bracket");

    assert!(matches!(solution.status, Status::NoSignChange { .. }));
    assert_eq!(solution.root, None);
    assert_eq!(solution.iters, 0);
    assert_relative_eq!(solution.error, 0.0);
    assert!(solution.trace.is_empty());
}

#[test]
fn non_finite_endpoint_is_not_a_bracket() {
    let f = |x: f64| x.ln();

    let solution = solve_unobserved(&f, [-1.0, 2.0], &Config::default()).expect("valid bracket");

    assert!(matches!(solution.status, Status::NoSignChange { .. }));
    assert_eq!(solution.root, None);
}

#[test]
fn exact_endpoint_root_returns_immediately() {
    let f = |x: f64| x * x - 4.0;

    let solution = solve_unobserved(&f, [-2.0, -1.9], &Config::default()).expect("valid bracket");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.root, Some(-2.0));
    assert_eq!(solution.iters, 0);

    let solution = solve_unobserved(&f, [1.9, 2.0], &Config::default()).expect("valid bracket");
    assert_eq!(solution.root, Some(2.0));
}

#[test]
fn reversed_bracket_is_accepted() {
    let f = |x: f64| x - 1.0;

    let solution = solve_unobserved(&f, [3.0, 0.0], &Config::default()).expect("valid bracket");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.root.expect("root"), 1.0, epsilon = 1e-6);
}

#[test]
fn iteration_limit_returns_estimate() {
    let f = |x: f64| x - 0.123_456_789;

    let solution = solve_unobserved(&f, [0.0, 1.0], &config(1e-12, 5)).expect("valid bracket");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 5);
    assert_eq!(solution.trace.len(), 5);
    assert!(solution.root.is_some());
}

#[test]
fn observer_can_stop_early() {
    let f = |x: f64| x - 0.123_456_789;

    let mut seen = Vec::new();
    let observer = |event: &Event<'_>| {
        seen.push(event.record().iter);
        (event.record().iter == 3).then_some(Action::StopEarly)
    };

    let solution = solve(&f, [0.0, 1.0], &config(1e-12, 100), observer).expect("valid bracket");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn events_expose_the_trace_so_far() {
    let f = |x: f64| x - 0.7;

    let mut lengths = Vec::new();
    let observer = |event: &Event<'_>| {
        lengths.push(event.trace().len());
        assert_eq!(event.bracket(), [event.record().a, event.record().b]);
        None::<Action>
    };

    let solution = solve(&f, [0.0, 1.0], &config(1e-3, 100), observer).expect("valid bracket");

    assert_eq!(lengths, (1..=solution.iters).collect::<Vec<_>>());
}

#[test]
fn rejects_malformed_brackets() {
    let f = |x: f64| x;

    assert!(matches!(
        solve_unobserved(&f, [f64::NAN, 1.0], &Config::default()),
        Err(Error::NonFiniteBracket { .. })
    ));
    assert!(matches!(
        solve_unobserved(&f, [1.0, 1.0], &Config::default()),
        Err(Error::ZeroWidthBracket { .. })
    ));
}

#[test]
fn convergence_wins_over_a_stop_on_the_same_iteration() {
    let f = |x: f64| x - 0.5;
    let observer = |_: &Event<'_>| Some(Action::StopEarly);

    let solution = solve(&f, [0.0, 1.0], &config(1e-6, 100), observer).expect("valid bracket");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.root, Some(0.5));
    assert_eq!(solution.iters, 1);
}

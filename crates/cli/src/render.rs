//! Plain-text rendering of solve reports.

use std::fmt::Write;

use mathroots::{Candidate, IterationRecord, SolveReport, SolveResult};

/// Renders a report, optionally with every iteration of every candidate.
pub(crate) fn report(report: &SolveReport, with_trace: bool) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "equation:   {}", report.equation);
    let _ = writeln!(out, "expression: {}", report.expression);
    if let Some(derivative) = &report.derivative {
        let _ = writeln!(out, "derivative: {derivative}");
    }
    let _ = writeln!(out, "method:     {}", report.method);
    if report.fallback_seed {
        let _ = writeln!(out, "note:       no seeds found, started from x0 = 0");
    }
    let _ = writeln!(out);

    if report.is_empty() {
        let _ = writeln!(out, "no candidates found in the search range");
    }

    for (i, result) in report.results.iter().enumerate() {
        let _ = writeln!(
            out,
            "[{}] {}: {}",
            i + 1,
            candidate(&result.candidate),
            result.message()
        );
        if with_trace {
            trace(&mut out, result);
        }
    }

    if report.duplicates > 0 {
        let _ = writeln!(out, "({} duplicate roots dropped)", report.duplicates);
    }

    let roots = report.roots();
    let _ = writeln!(out);
    if roots.is_empty() {
        let _ = writeln!(out, "no roots found");
    } else {
        let listed: Vec<String> = roots.iter().map(|root| format!("{root:.8}")).collect();
        let _ = writeln!(out, "roots: {}", listed.join(", "));
    }
    let _ = writeln!(out, "total iterations: {}", report.total_iterations());

    out
}

fn candidate(candidate: &Candidate) -> String {
    match candidate {
        Candidate::Interval { a, b } => format!("interval [{a:.4}, {b:.4}]"),
        Candidate::Seed { x0, .. } => format!("seed x0 = {x0:.4}"),
    }
}

fn trace(out: &mut String, result: &SolveResult) {
    let Some(first) = result.trace.first() else {
        return;
    };

    let _ = match first {
        IterationRecord::Bisection(_) => writeln!(
            out,
            "    {:>4} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14} {:>12}",
            "iter", "a", "b", "c", "f(a)", "f(b)", "f(c)", "error"
        ),
        IterationRecord::Newton(_) => writeln!(
            out,
            "    {:>4} {:>14} {:>14} {:>14} {:>14} {:>12}",
            "iter", "x", "f(x)", "f'(x)", "x_next", "error"
        ),
    };

    for record in &result.trace {
        let _ = match record {
            IterationRecord::Bisection(r) => writeln!(
                out,
                "    {:>4} {:>14.8} {:>14.8} {:>14.8} {:>14.6e} {:>14.6e} {:>14.6e} {:>12.4e}",
                r.iter, r.a, r.b, r.c, r.fa, r.fb, r.fc, r.error
            ),
            IterationRecord::Newton(r) => writeln!(
                out,
                "    {:>4} {:>14.8} {:>14.6e} {:>14.6e} {:>14.8} {:>12.4e}",
                r.iter, r.x, r.fx, r.dfx, r.x_next, r.error
            ),
        };
    }
}

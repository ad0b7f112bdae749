use crate::report::SolveResult;

/// Drops converged results whose root repeats an earlier one.
///
/// Results are walked in order. A converged result is kept only if its root
/// is at least `root_tolerance` away from every root kept before it; later
/// duplicates are dropped, never merged. Failed results are always kept.
///
/// Returns the kept results and the number dropped.
#[must_use]
pub fn dedup(results: Vec<SolveResult>, root_tolerance: f64) -> (Vec<SolveResult>, usize) {
    let mut roots: Vec<f64> = Vec::new();
    let mut kept = Vec::with_capacity(results.len());
    let mut dropped = 0;

    for result in results {
        if let Some(root) = result.root() {
            if roots
                .iter()
                .any(|&seen| (seen - root).abs() < root_tolerance)
            {
                dropped += 1;
                continue;
            }
            roots.push(root);
        }
        kept.push(result);
    }

    (kept, dropped)
}

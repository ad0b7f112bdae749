/// One bisection iteration.
///
/// `a`, `b`, `fa`, and `fb` describe the bracket the midpoint `c` was taken
/// from, before the bracket update.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Iteration number, starting at 1.
    pub iter: usize,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub fa: f64,
    pub fb: f64,
    pub fc: f64,
    /// Step error: `|b - a|` on the first iteration, `|c - c_prev|` afterwards.
    pub error: f64,
}

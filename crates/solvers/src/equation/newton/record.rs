/// One Newton-Raphson iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Iteration number, starting at 1.
    pub iter: usize,
    pub x: f64,
    pub fx: f64,
    pub dfx: f64,
    pub x_next: f64,
    /// Step error `|x_next - x|`.
    pub error: f64,
}

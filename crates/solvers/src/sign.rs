/// The sign of a function value.
///
/// Zero is treated as positive, so every finite value has exactly one sign
/// and a bracket never counts the same crossing twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    /// Returns the sign of `value`.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}

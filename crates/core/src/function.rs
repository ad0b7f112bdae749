/// A real function of one real variable.
///
/// Evaluation never fails: points where the function is undefined (a
/// logarithm of a negative number, a division by zero) produce NaN or an
/// infinity, and callers decide whether to skip or propagate them.
///
/// Closures of type `Fn(f64) -> f64` implement this trait, so solvers can be
/// driven by compiled expressions and plain Rust functions alike.
pub trait RealFunction {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;

    /// Evaluates the function at `x`, returning `None` for non-finite values.
    fn eval_finite(&self, x: f64) -> Option<f64> {
        let value = self.eval(x);
        value.is_finite().then_some(value)
    }
}

impl<F> RealFunction for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

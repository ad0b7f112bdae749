use mathroots_core::RealFunction;

use crate::Sign;

use super::Range;

/// Maximum number of halvings used to tell a root crossing from a pole.
///
/// Probing stops earlier once the bracket can no longer be split in `f64`.
const POLE_PROBE_HALVINGS: usize = 64;

/// A grid cell `[a, b]` where the function changes sign.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub a: f64,
    pub b: f64,
    pub fa: f64,
    pub fb: f64,
}

impl Interval {
    /// Returns the bracket as `[a, b]`.
    #[must_use]
    pub fn bounds(&self) -> [f64; 2] {
        [self.a, self.b]
    }
}

/// Finds every grid cell of `range` where `f` changes sign.
///
/// A grid point where `f` is exactly zero yields one interval ending at that
/// point, whether or not the function crosses there, so touching roots such
/// as the one of `x^2` at `0` are found once. The cell starting at that point
/// is skipped unless no interval claimed the zero yet (at the start of the
/// range or after a non-finite value).
///
/// Cells with a non-finite endpoint are skipped. A sign change caused by a
/// pole (as in `1/x`) rather than a root is rejected after a short probe.
/// Intervals are returned in ascending order and are never merged.
pub fn find_intervals<F>(f: &F, range: &Range) -> Vec<Interval>
where
    F: RealFunction + ?Sized,
{
    let mut intervals = Vec::new();
    let mut points = range.points().map(|x| (x, f.eval(x)));

    let Some(mut prev) = points.next() else {
        return intervals;
    };

    // True when the last interval ended at an exact grid root.
    let mut zero_claimed = false;

    for (b, fb) in points {
        let (a, fa) = prev;
        prev = (b, fb);
        let claimed = std::mem::replace(&mut zero_claimed, false);

        if !fa.is_finite() || !fb.is_finite() {
            continue;
        }

        if fa == 0.0 {
            if !claimed {
                intervals.push(Interval { a, b, fa, fb });
                zero_claimed = fb == 0.0;
            }
            continue;
        }
        if fb == 0.0 {
            intervals.push(Interval { a, b, fa, fb });
            zero_claimed = true;
            continue;
        }

        if Sign::of(fa) != Sign::of(fb) && is_root_crossing(f, [a, b], [fa, fb]) {
            intervals.push(Interval { a, b, fa, fb });
        }
    }

    intervals
}

/// Returns true if the sign change in `[a, b]` comes from a root.
///
/// Near a root, `|f|` at the midpoints shrinks below the smaller endpoint
/// magnitude. Near a pole it only grows, or the function stops being finite.
fn is_root_crossing<F>(f: &F, bracket: [f64; 2], values: [f64; 2]) -> bool
where
    F: RealFunction + ?Sized,
{
    let [mut a, mut b] = bracket;
    let [fa, _] = values;
    let threshold = values[0].abs().min(values[1].abs());
    let left_sign = Sign::of(fa);

    for _ in 0..POLE_PROBE_HALVINGS {
        let mid = 0.5 * (a + b);
        if mid <= a || mid >= b {
            break;
        }

        let fm = f.eval(mid);
        if !fm.is_finite() {
            return false;
        }
        if fm.abs() <= threshold {
            return true;
        }

        if Sign::of(fm) == left_sign {
            a = mid;
        } else {
            b = mid;
        }
    }

    false
}

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that a floating point number lies within the given
/// tolerance of the expected value.
///
/// Published color difference data comes with a fixed number of decimals. This
/// macro compares against such data without requiring the rounding factor of
/// [`assert_close_enough`] to line up with the data's precision.
///
/// # Panics
///
/// This macro panics if the absolute difference exceeds the tolerance or
/// either number is not-a-number.
#[macro_export]
macro_rules! assert_close_to {
    ($actual:expr, $expected:expr, $tolerance:expr $(,)?) => {
        let (actual, expected, tolerance) = ($actual, $expected, $tolerance);
        assert!(
            (actual - expected).abs() <= tolerance,
            "quantities differ by more than {:e}:\n{:?}\n{:?}",
            tolerance,
            actual,
            expected
        );
    };
}

/// Normalize the color coordinates for equality testing and hashing.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_eq_coordinates(coordinates: &[Float; 3]) -> [Bits; 3] {
    let [l, a, b] = *coordinates;
    [to_eq_bits(l), to_eq_bits(a), to_eq_bits(b)]
}

/// Determine whether the two floats are close enough to be considered equal.
/// <i class=python-only>Python only!</i>
///
/// This function relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
#[cfg(feature = "pyffi")]
#[pyfunction]
pub fn close_enough(f1: Float, f2: Float) -> bool {
    to_eq_bits(f1) == to_eq_bits(f2)
}

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

#[cfg(test)]
mod test {
    use super::{to_eq_bits, to_eq_coordinates};
    use crate::Float;

    #[test]
    fn test_eq_bits() {
        assert_eq!(to_eq_bits(Float::NAN), to_eq_bits(0.0), "not-a-number is zero");
        assert_eq!(to_eq_bits(-0.0), to_eq_bits(0.0), "negative zero is zero");
        assert_eq!(
            to_eq_bits(0.1 + 0.2),
            to_eq_bits(0.3),
            "rounding hides representation error"
        );
        assert_ne!(to_eq_bits(0.3), to_eq_bits(0.3001), "rounding keeps digits");
        assert_eq!(
            to_eq_coordinates(&[50.0, -0.0, Float::NAN]),
            to_eq_coordinates(&[50.0, 0.0, 0.0]),
            "coordinates normalize individually"
        );
    }
}

use crate::Float;

#[cfg(feature = "f64")]
use core::f64::consts::PI;
#[cfg(not(feature = "f64"))]
use core::f32::consts::PI;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
}

// ----------------------------------------------------------------------------------------------------------

/// 25 to the seventh power, which appears in the chroma weighting of both the
/// G factor and the RC term of CIEDE2000.
pub(crate) const POW25_7: Float = 6_103_515_625.0;

/// Convert degrees to radians.
///
/// Unlike [`f64::to_radians`], this function divides by 180 before
/// multiplying by π, which matches the arithmetic order of the published
/// reference values.
#[inline]
pub(crate) fn to_radians(degrees: Float) -> Float {
    degrees / 180.0 * PI
}

/// Convert radians to degrees.
#[inline]
pub(crate) fn to_degrees(radians: Float) -> Float {
    radians / PI * 180.0
}

/// Normalize an angle in degrees to `0..360`.
#[inline]
pub(crate) fn normalize_degrees(degrees: Float) -> Float {
    let degrees = degrees.rem_euclid(360.0);
    // rem_euclid may round up to the modulus for tiny negative inputs
    if degrees == 360.0 {
        0.0
    } else {
        degrees
    }
}

/// Compute the chroma, i.e., the magnitude of the a/b vector.
#[inline]
pub(crate) fn chroma(a: Float, b: Float) -> Float {
    (a * a + b * b).sqrt()
}

/// Compute the hue angle of the a/b vector in degrees `-180..=180`.
#[inline]
pub(crate) fn signed_hue(a: Float, b: Float) -> Float {
    to_degrees(b.atan2(a))
}

/// Compute the hue angle of the a/b vector in degrees `0..360`.
#[inline]
pub(crate) fn hue(a: Float, b: Float) -> Float {
    normalize_degrees(signed_hue(a, b))
}

/// Compute the magnitude of the hue difference from the differences of a, b,
/// and chroma.
///
/// Floating point cancellation can drive the radicand slightly below zero when
/// the Euclidean a/b difference and the chroma difference are nearly equal.
/// Such a radicand is clamped to zero.
#[inline]
pub(crate) fn hue_difference(da: Float, db: Float, dc: Float) -> Float {
    let radicand = da * da + db * db - dc * dc;
    if radicand > 0.0 {
        radicand.sqrt()
    } else {
        0.0
    }
}

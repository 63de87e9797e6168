//! Utility module with deltae's errors.
//!
//! The color difference formulas themselves never fail. Not-a-number and
//! infinite coordinates simply propagate through the arithmetic. The only
//! fallible operation is the conversion of a numeric CIE94 lightness weight
//! into a [`Cie94Application`](crate::Cie94Application).

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::Float;

/// An invalid CIE94 lightness weight.
///
/// CIE94's lightness weight selects between the constants for graphic arts
/// (1) and for textiles (2). Any other value, including not-a-number, is
/// rejected instead of quietly picking one of the two sets of constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cie94LightnessError {
    pub value: Float,
}

impl Cie94LightnessError {
    /// Create a new CIE94 lightness error.
    pub const fn new(value: Float) -> Self {
        Self { value }
    }
}

impl core::fmt::Display for Cie94LightnessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "CIE94 lightness weight should be 1 (graphic arts) or 2 (textiles) but is {}",
            self.value
        ))
    }
}

impl core::error::Error for Cie94LightnessError {}

#[cfg(feature = "pyffi")]
impl From<Cie94LightnessError> for PyErr {
    fn from(value: Cie94LightnessError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::Cie94LightnessError;

    #[test]
    fn test_message() {
        assert_eq!(
            Cie94LightnessError::new(3.0).to_string(),
            "CIE94 lightness weight should be 1 (graphic arts) or 2 (textiles) but is 3",
            "message names valid values"
        );
    }
}

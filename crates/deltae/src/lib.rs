//! # ΔE: Perceptual Color Differences
//!
//! This crate computes how different two colors in CIELAB look. It implements
//! four color difference formulas, each of which reduces a pair of colors to a
//! single, non-negative number:
//!
//!   * [CIE76](https://en.wikipedia.org/wiki/Color_difference#CIE76) is the
//!     Euclidean distance in CIELAB. It is simple, symmetric, and a poor match
//!     for human perception of saturated colors.
//!   * [CMC l:c (1984)](https://en.wikipedia.org/wiki/Color_difference#CMC_l:c_(1984))
//!     weights lightness, chroma, and hue differences and rotates the hue
//!     weighting depending on the reference color's hue angle.
//!   * [CIE94](https://en.wikipedia.org/wiki/Color_difference#CIE94) weights
//!     chroma and hue differences by the reference color's chroma.
//!   * [CIEDE2000](https://en.wikipedia.org/wiki/Color_difference#CIEDE2000)
//!     further corrects for neutral colors, for lightness, and for the
//!     interaction between chroma and hue in the blue region.
//!
//! CMC l:c and CIE94 are anchored on the first color's chroma (and hue). Hence
//! they are **not symmetric** and swapping the two colors generally changes
//! the result. Neither is a metric in the mathematical sense. CIEDE2000 is
//! symmetric except for colors whose corrected hue angles are exactly 180°
//! apart, since the hue difference then always resolves to −180°.
//!
//! The formulas are available as functions over coordinate arrays, e.g.,
//! [`delta_e_ciede2000`], as methods of [`Lab`], e.g.,
//! [`Lab::delta_e_ciede2000`], and through the formula selector [`DeltaE`].
//! The parametric formulas take their weights as argument, with [`CmcWeights`],
//! [`Cie94Weights`], and [`Ciede2000Weights`] implementing [`Default`] for the
//! customary weights.
//!
//! ```
//! # use deltae::{assert_close_to, DeltaE, Lab};
//! let reference = Lab::new(50.0, 2.6772, -79.7751);
//! let sample = Lab::new(50.0, 0.0, -82.7485);
//! assert_close_to!(reference.delta_e(&sample, DeltaE::CIEDE2000), 2.0425, 1e-4);
//! ```
//!
//! All functions are pure. They do not validate their inputs, never fail, and
//! merely propagate not-a-numbers and infinities.
//!
//!
//! ## Optional Features
//!
//! This crate supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls the Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod object;
mod weights;

#[cfg(feature = "pyffi")]
pub use core::close_enough;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{delta_e_cie76, delta_e_cie94, delta_e_ciede2000, delta_e_cmc};
pub use object::{DeltaE, Lab};
pub use weights::{Cie94Application, Cie94Weights, Ciede2000Weights, CmcWeights};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[cfg(feature = "pyffi")]
mod pyfunctions {
    //! Module-level Python functions over coordinate triples.

    use pyo3::prelude::*;

    use crate::{Cie94Weights, Ciede2000Weights, CmcWeights, Float};

    /// Compute CIE76 Delta-E. <i class=python-only>Python only!</i>
    #[pyfunction]
    pub fn delta_e_cie76(coordinates1: [Float; 3], coordinates2: [Float; 3]) -> Float {
        crate::delta_e_cie76(&coordinates1, &coordinates2)
    }

    /// Compute CMC l:c Delta-E. <i class=python-only>Python only!</i>
    #[pyfunction]
    #[pyo3(signature = (coordinates1, coordinates2, weights = None))]
    pub fn delta_e_cmc(
        coordinates1: [Float; 3],
        coordinates2: [Float; 3],
        weights: Option<CmcWeights>,
    ) -> Float {
        crate::delta_e_cmc(&coordinates1, &coordinates2, &weights.unwrap_or_default())
    }

    /// Compute CIE94 Delta-E. <i class=python-only>Python only!</i>
    #[pyfunction]
    #[pyo3(signature = (coordinates1, coordinates2, weights = None))]
    pub fn delta_e_cie94(
        coordinates1: [Float; 3],
        coordinates2: [Float; 3],
        weights: Option<Cie94Weights>,
    ) -> Float {
        crate::delta_e_cie94(&coordinates1, &coordinates2, &weights.unwrap_or_default())
    }

    /// Compute CIEDE2000 Delta-E. <i class=python-only>Python only!</i>
    #[pyfunction]
    #[pyo3(signature = (coordinates1, coordinates2, weights = None))]
    pub fn delta_e_ciede2000(
        coordinates1: [Float; 3],
        coordinates2: [Float; 3],
        weights: Option<Ciede2000Weights>,
    ) -> Float {
        crate::delta_e_ciede2000(&coordinates1, &coordinates2, &weights.unwrap_or_default())
    }
}

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn deltae(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(close_enough, m)?)?;
    m.add_function(wrap_pyfunction!(pyfunctions::delta_e_cie76, m)?)?;
    m.add_function(wrap_pyfunction!(pyfunctions::delta_e_cmc, m)?)?;
    m.add_function(wrap_pyfunction!(pyfunctions::delta_e_cie94, m)?)?;
    m.add_function(wrap_pyfunction!(pyfunctions::delta_e_ciede2000, m)?)?;

    m.add_class::<Lab>()?;
    m.add_class::<CmcWeights>()?;
    m.add_class::<Cie94Application>()?;
    m.add_class::<Cie94Weights>()?;
    m.add_class::<Ciede2000Weights>()?;

    Ok(())
}

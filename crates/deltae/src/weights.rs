//! Weighting factors for the parametric color difference formulas.
//!
//! Each formula has its own weights record with [`Default`] providing the
//! weights customarily used in practice. Weights are plain values and never
//! consulted from some global configuration: every computation receives its
//! weights as an argument.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::Cie94LightnessError;
use crate::Float;

/// The lightness and chroma weights for CMC l:c (1984).
///
/// The formula is usually referred to by its weights, i.e., CMC 2:1 for
/// judging the acceptability of a color difference and CMC 1:1 for judging
/// its perceptibility. The default is 2:1.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "deltae"))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CmcWeights {
    /// The lightness weight `l`.
    #[cfg_attr(feature = "pyffi", pyo3(get))]
    pub lightness: Float,
    /// The chroma weight `c`.
    #[cfg_attr(feature = "pyffi", pyo3(get))]
    pub chroma: Float,
}

impl CmcWeights {
    /// The weights for judging acceptability, i.e., CMC 2:1.
    pub const ACCEPTABILITY: Self = Self::new(2.0, 1.0);

    /// The weights for judging perceptibility, i.e., CMC 1:1.
    pub const PERCEPTIBILITY: Self = Self::new(1.0, 1.0);
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl CmcWeights {
    /// Create new CMC weights.
    #[cfg(feature = "pyffi")]
    #[new]
    #[pyo3(signature = (lightness = 2.0, chroma = 1.0))]
    pub const fn new(lightness: Float, chroma: Float) -> Self {
        Self { lightness, chroma }
    }

    /// Create new CMC weights.
    ///
    /// ```
    /// # use deltae::CmcWeights;
    /// assert_eq!(CmcWeights::new(2.0, 1.0), CmcWeights::default());
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub const fn new(lightness: Float, chroma: Float) -> Self {
        Self { lightness, chroma }
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl Default for CmcWeights {
    fn default() -> Self {
        Self::ACCEPTABILITY
    }
}

// ====================================================================================================================

/// The application domain of CIE94.
///
/// CIE94's lightness weight doubles as selector between two sets of constants
/// for the chroma and hue weighting functions. Since only the values 1 and 2
/// are meaningful, this crate represents the selector as an enumeration.
/// [`Cie94Application::try_from`] converts from the numeric weight and
/// rejects everything else.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "deltae")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cie94Application {
    /// Graphic arts, i.e., a lightness weight of 1.
    #[default]
    GraphicArts,
    /// Textiles, i.e., a lightness weight of 2.
    Textiles,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Cie94Application {
    /// Get the lightness weight `kL` for this application.
    pub const fn lightness(&self) -> Float {
        match *self {
            Self::GraphicArts => 1.0,
            Self::Textiles => 2.0,
        }
    }

    /// Get the constants `K1` and `K2` for this application.
    ///
    /// They scale the first color's chroma in the chroma and hue weighting
    /// functions, respectively.
    pub const fn constants(&self) -> (Float, Float) {
        match *self {
            Self::GraphicArts => (0.045, 0.015),
            Self::Textiles => (0.048, 0.014),
        }
    }
}

impl TryFrom<Float> for Cie94Application {
    type Error = Cie94LightnessError;

    /// Convert the numeric lightness weight to an application.
    ///
    /// # Examples
    ///
    /// ```
    /// # use deltae::Cie94Application;
    /// assert_eq!(Cie94Application::try_from(1.0), Ok(Cie94Application::GraphicArts));
    /// assert_eq!(Cie94Application::try_from(2.0), Ok(Cie94Application::Textiles));
    /// assert!(Cie94Application::try_from(1.5).is_err());
    /// ```
    fn try_from(value: Float) -> Result<Self, Self::Error> {
        if value == 1.0 {
            Ok(Self::GraphicArts)
        } else if value == 2.0 {
            Ok(Self::Textiles)
        } else {
            tracing::debug!(lightness = value, "rejecting CIE94 lightness weight");
            Err(Cie94LightnessError::new(value))
        }
    }
}

/// The weights for CIE94.
///
/// The default weights are 1:1:1 for graphic arts.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "deltae"))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cie94Weights {
    /// The application, which determines the lightness weight `kL`.
    #[cfg_attr(feature = "pyffi", pyo3(get))]
    pub application: Cie94Application,
    /// The chroma weight `kC`.
    #[cfg_attr(feature = "pyffi", pyo3(get))]
    pub chroma: Float,
    /// The hue weight `kH`.
    #[cfg_attr(feature = "pyffi", pyo3(get))]
    pub hue: Float,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Cie94Weights {
    /// Create new CIE94 weights from numeric weights.
    ///
    /// The lightness weight must be either 1 or 2.
    #[cfg(feature = "pyffi")]
    #[new]
    #[pyo3(signature = (lightness = 1.0, chroma = 1.0, hue = 1.0))]
    pub fn new(lightness: Float, chroma: Float, hue: Float) -> Result<Self, Cie94LightnessError> {
        let application = Cie94Application::try_from(lightness)?;
        Ok(Self::with(application, chroma, hue))
    }

    /// Create new CIE94 weights from numeric weights.
    ///
    /// The lightness weight must be either 1 or 2. Any other value results in
    /// an error.
    ///
    /// ```
    /// # use deltae::{Cie94Application, Cie94Weights};
    /// # use deltae::error::Cie94LightnessError;
    /// let weights = Cie94Weights::new(2.0, 1.0, 1.0)?;
    /// assert_eq!(weights.application, Cie94Application::Textiles);
    /// assert!(Cie94Weights::new(3.0, 1.0, 1.0).is_err());
    /// # Ok::<(), Cie94LightnessError>(())
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn new(lightness: Float, chroma: Float, hue: Float) -> Result<Self, Cie94LightnessError> {
        let application = Cie94Application::try_from(lightness)?;
        Ok(Self::with(application, chroma, hue))
    }

    /// Create new CIE94 weights for the given application.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub const fn with(application: Cie94Application, chroma: Float, hue: Float) -> Self {
        Self {
            application,
            chroma,
            hue,
        }
    }

    /// Create new CIE94 weights for the given application.
    #[cfg(not(feature = "pyffi"))]
    pub const fn with(application: Cie94Application, chroma: Float, hue: Float) -> Self {
        Self {
            application,
            chroma,
            hue,
        }
    }

    /// Get the lightness weight `kL`.
    pub const fn lightness(&self) -> Float {
        self.application.lightness()
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl Default for Cie94Weights {
    fn default() -> Self {
        Self::with(Cie94Application::GraphicArts, 1.0, 1.0)
    }
}

// ====================================================================================================================

/// The weights for CIEDE2000.
///
/// Unlike CIE94, all three weights may be arbitrary positive numbers. The
/// default weights are 1:1:1.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "deltae"))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ciede2000Weights {
    /// The lightness weight `kL`.
    #[cfg_attr(feature = "pyffi", pyo3(get))]
    pub lightness: Float,
    /// The chroma weight `kC`.
    #[cfg_attr(feature = "pyffi", pyo3(get))]
    pub chroma: Float,
    /// The hue weight `kH`.
    #[cfg_attr(feature = "pyffi", pyo3(get))]
    pub hue: Float,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Ciede2000Weights {
    /// Create new CIEDE2000 weights.
    #[cfg(feature = "pyffi")]
    #[new]
    #[pyo3(signature = (lightness = 1.0, chroma = 1.0, hue = 1.0))]
    pub const fn new(lightness: Float, chroma: Float, hue: Float) -> Self {
        Self {
            lightness,
            chroma,
            hue,
        }
    }

    /// Create new CIEDE2000 weights.
    #[cfg(not(feature = "pyffi"))]
    pub const fn new(lightness: Float, chroma: Float, hue: Float) -> Self {
        Self {
            lightness,
            chroma,
            hue,
        }
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl Default for Ciede2000Weights {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

#[cfg(test)]
mod test {
    use super::{Cie94Application, Cie94Weights, Ciede2000Weights, CmcWeights};
    use crate::Float;

    #[test]
    fn test_defaults() {
        assert_eq!(CmcWeights::default(), CmcWeights::new(2.0, 1.0), "CMC 2:1");
        assert_eq!(
            Cie94Weights::default(),
            Cie94Weights::with(Cie94Application::GraphicArts, 1.0, 1.0),
            "CIE94 1:1:1"
        );
        assert_eq!(Cie94Weights::default().lightness(), 1.0, "graphic arts kL");
        assert_eq!(
            Ciede2000Weights::default(),
            Ciede2000Weights::new(1.0, 1.0, 1.0),
            "CIEDE2000 1:1:1"
        );
    }

    #[test]
    fn test_cie94_selector() {
        assert_eq!(
            Cie94Application::Textiles.constants(),
            (0.048, 0.014),
            "textile constants"
        );

        for value in [0.0, 1.5, 3.0, -1.0, Float::NAN, Float::INFINITY] {
            let result = Cie94Weights::new(value, 1.0, 1.0);
            let error = result.expect_err("lightness should be rejected");
            assert!(
                error.value == value || value.is_nan(),
                "error should carry rejected value"
            );
        }
    }
}

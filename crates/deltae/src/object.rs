#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    chroma, delta_e_cie76, delta_e_cie94, delta_e_ciede2000, delta_e_cmc, hue, to_eq_coordinates,
};
use crate::{Cie94Application, Cie94Weights, Ciede2000Weights, CmcWeights, Float};

/// A color in CIELAB.
///
/// Every color has three coordinates: lightness L, nominally `0..=100`, and
/// the unbounded a and b axes, which span green to red and blue to yellow,
/// respectively. This struct does not validate coordinates. Colors outside
/// the human visual gamut as well as not-a-numbers are accepted as is and
/// processed arithmetically.
///
/// # Color Differences
///
/// The `delta_e_*` methods compute the difference between this color, which
/// serves as reference, and another color, the sample. CIE76 is symmetric.
/// CIEDE2000 is symmetric, too, unless the two colors' corrected hue angles
/// are exactly 180° apart. CMC l:c and CIE94 are not, since they weight
/// differences by the reference color's chroma (and hue).
///
/// # Equality Testing and Hashing
///
/// Equality testing and hashing first normalize coordinates by replacing
/// not-a-numbers with zero, reducing resolution, and dropping the sign of
/// negative zero. Two colors that differ only in their least significant
/// digits hence compare as equal.
///
/// # Coordinate Access
///
/// Both Rust and Python code can access individual coordinates by indexing a
/// color with integers `0..=2`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, sequence, module = "deltae")
)]
#[derive(Copy, Clone)]
pub struct Lab {
    coordinates: [Float; 3],
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Lab {
    /// Instantiate a new CIELAB color with the given lightness L, a, and b.
    ///
    /// ```
    /// # use deltae::Lab;
    /// let orange = Lab::new(70.0, 35.0, 70.0);
    /// assert_eq!(orange.as_ref(), &[70.0, 35.0, 70.0]);
    /// ```
    #[cfg(feature = "pyffi")]
    #[new]
    #[inline]
    pub const fn new(l: Float, a: Float, b: Float) -> Self {
        Self {
            coordinates: [l, a, b],
        }
    }

    /// Instantiate a new CIELAB color with the given lightness L, a, and b.
    ///
    /// ```
    /// # use deltae::Lab;
    /// let orange = Lab::new(70.0, 35.0, 70.0);
    /// assert_eq!(orange.as_ref(), &[70.0, 35.0, 70.0]);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub const fn new(l: Float, a: Float, b: Float) -> Self {
        Self {
            coordinates: [l, a, b],
        }
    }

    /// Access the coordinates. <i class=python-only>Python only!</i>
    ///
    /// This method returns the coordinates by value instead of by reference,
    /// as [`AsRef<[Float; 3]> as Lab`](struct.Lab.html) does.
    #[cfg(feature = "pyffi")]
    pub fn coordinates(&self) -> [Float; 3] {
        self.coordinates
    }

    /// Get this color's length, which is 3. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __len__(&self) -> usize {
        3
    }

    /// Read coordinates by index. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __getitem__(&self, index: isize) -> PyResult<Float> {
        match index {
            -3..=-1 => Ok(self.coordinates[(3 + index) as usize]),
            0..=2 => Ok(self.coordinates[index as usize]),
            _ => Err(pyo3::exceptions::PyIndexError::new_err(
                "Invalid coordinate index",
            )),
        }
    }

    /// Get the lightness L.
    #[inline]
    pub const fn lightness(&self) -> Float {
        self.coordinates[0]
    }

    /// Get the green-red coordinate a.
    #[inline]
    pub const fn a(&self) -> Float {
        self.coordinates[1]
    }

    /// Get the blue-yellow coordinate b.
    #[inline]
    pub const fn b(&self) -> Float {
        self.coordinates[2]
    }

    /// Compute the chroma, i.e., the length of the a/b vector.
    ///
    /// ```
    /// # use deltae::Lab;
    /// assert_eq!(Lab::new(50.0, 3.0, 4.0).chroma(), 5.0);
    /// ```
    #[inline]
    pub fn chroma(&self) -> Float {
        chroma(self.coordinates[1], self.coordinates[2])
    }

    /// Compute the hue angle in degrees `0..360`.
    ///
    /// The hue of an achromatic color is undefined. This method returns zero
    /// for such colors.
    ///
    /// ```
    /// # use deltae::Lab;
    /// assert_eq!(Lab::new(50.0, 0.0, -10.0).hue(), 270.0);
    /// assert_eq!(Lab::new(50.0, 0.0, 0.0).hue(), 0.0);
    /// ```
    #[inline]
    pub fn hue(&self) -> Float {
        hue(self.coordinates[1], self.coordinates[2])
    }

    /// Determine whether this color is achromatic, i.e., has zero chroma.
    #[inline]
    pub fn is_achromatic(&self) -> bool {
        self.coordinates[1] == 0.0 && self.coordinates[2] == 0.0
    }

    /// Compute the CIE76 difference between this and the other color.
    ///
    /// CIE76 is the Euclidean distance in CIELAB.
    ///
    /// ```
    /// # use deltae::{assert_close_enough, Lab};
    /// let c1 = Lab::new(36.0, 60.0, 41.0);
    /// let c2 = Lab::new(55.0, 66.0, 77.0);
    /// assert_close_enough!(c1.delta_e_cie76(&c2), 41.14608122288197);
    /// ```
    #[inline]
    pub fn delta_e_cie76(&self, other: &Self) -> Float {
        delta_e_cie76(&self.coordinates, &other.coordinates)
    }

    /// Compute the CMC l:c difference between this and the other color.
    ///
    /// This color is the reference color, whose chroma and hue weight the
    /// differences. Without weights, this method uses CMC 2:1.
    #[cfg(feature = "pyffi")]
    #[pyo3(signature = (other, weights = None))]
    pub fn delta_e_cmc(&self, other: &Self, weights: Option<CmcWeights>) -> Float {
        delta_e_cmc(&self.coordinates, &other.coordinates, &weights.unwrap_or_default())
    }

    /// Compute the CMC l:c difference between this and the other color.
    ///
    /// This color is the reference color, whose chroma and hue weight the
    /// differences.
    ///
    /// ```
    /// # use deltae::{assert_close_to, CmcWeights, Lab};
    /// let c1 = Lab::new(36.0, 60.0, 41.0);
    /// let c2 = Lab::new(55.0, 66.0, 77.0);
    /// let d = c1.delta_e_cmc(&c2, CmcWeights::default());
    /// assert_close_to!(d, 20.585495546195663, 1e-12);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub fn delta_e_cmc(&self, other: &Self, weights: CmcWeights) -> Float {
        delta_e_cmc(&self.coordinates, &other.coordinates, &weights)
    }

    /// Compute the CIE94 difference between this and the other color.
    ///
    /// This color is the reference color, whose chroma weights the
    /// differences. Without weights, this method uses graphic arts 1:1:1.
    #[cfg(feature = "pyffi")]
    #[pyo3(signature = (other, weights = None))]
    pub fn delta_e_cie94(&self, other: &Self, weights: Option<Cie94Weights>) -> Float {
        delta_e_cie94(&self.coordinates, &other.coordinates, &weights.unwrap_or_default())
    }

    /// Compute the CIE94 difference between this and the other color.
    ///
    /// This color is the reference color, whose chroma weights the
    /// differences.
    ///
    /// ```
    /// # use deltae::{assert_close_to, Cie94Weights, Lab};
    /// let c1 = Lab::new(36.0, 60.0, 41.0);
    /// let c2 = Lab::new(55.0, 66.0, 77.0);
    /// let d = c1.delta_e_cie94(&c2, Cie94Weights::default());
    /// assert_close_to!(d, 22.849281934529994, 1e-12);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub fn delta_e_cie94(&self, other: &Self, weights: Cie94Weights) -> Float {
        delta_e_cie94(&self.coordinates, &other.coordinates, &weights)
    }

    /// Compute the CIEDE2000 difference between this and the other color.
    ///
    /// Without weights, this method uses 1:1:1.
    #[cfg(feature = "pyffi")]
    #[pyo3(signature = (other, weights = None))]
    pub fn delta_e_ciede2000(&self, other: &Self, weights: Option<Ciede2000Weights>) -> Float {
        delta_e_ciede2000(&self.coordinates, &other.coordinates, &weights.unwrap_or_default())
    }

    /// Compute the CIEDE2000 difference between this and the other color.
    ///
    /// ```
    /// # use deltae::{assert_close_to, Ciede2000Weights, Lab};
    /// let white = Lab::new(100.0, 0.0, 0.0);
    /// let black = Lab::new(0.0, 0.0, 0.0);
    /// assert_eq!(white.delta_e_ciede2000(&black, Ciede2000Weights::default()), 100.0);
    ///
    /// let c1 = Lab::new(36.0, 60.0, 41.0);
    /// let c2 = Lab::new(55.0, 66.0, 77.0);
    /// let d = c1.delta_e_ciede2000(&c2, Ciede2000Weights::default());
    /// assert_close_to!(d, 22.394506952417903, 1e-12);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub fn delta_e_ciede2000(&self, other: &Self, weights: Ciede2000Weights) -> Float {
        delta_e_ciede2000(&self.coordinates, &other.coordinates, &weights)
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl Lab {
    /// Compute the difference between this and the other color with the given
    /// formula. <i class=rust-only>Rust only!</i>
    ///
    /// ```
    /// # use deltae::{DeltaE, Lab};
    /// let c1 = Lab::new(50.0, 2.5, 0.0);
    /// let c2 = Lab::new(50.0, 0.0, -2.5);
    /// assert_eq!(c1.delta_e(&c2, DeltaE::default()), c1.delta_e(&c2, DeltaE::CIEDE2000));
    /// ```
    #[inline]
    pub fn delta_e(&self, other: &Self, formula: DeltaE) -> Float {
        formula.compute(self, other)
    }
}

impl From<[Float; 3]> for Lab {
    fn from(value: [Float; 3]) -> Self {
        Self { coordinates: value }
    }
}

impl From<Lab> for [Float; 3] {
    fn from(value: Lab) -> Self {
        value.coordinates
    }
}

impl AsRef<[Float; 3]> for Lab {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl core::ops::Index<usize> for Lab {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use deltae::Lab;
    /// let teal = Lab::new(48.0, -28.0, -8.0);
    /// assert_eq!(teal[0], 48.0);
    /// assert_eq!(teal[2], -8.0);
    /// ```
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl core::hash::Hash for Lab {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        let [n1, n2, n3] = to_eq_coordinates(&self.coordinates);
        n1.hash(state);
        n2.hash(state);
        n3.hash(state);
    }
}

impl PartialEq for Lab {
    /// Determine whether this color equals the other color.
    ///
    /// Since [`Lab`] also implements `Hash`, equality testing normalizes the
    /// coordinates exactly like hashing does: not-a-numbers become zero,
    /// resolution is reduced by rounding, and negative zeros become positive.
    ///
    /// ```
    /// # use deltae::{Float, Lab};
    /// assert_eq!(Lab::new(Float::NAN, -0.0, 0.1 + 0.2), Lab::new(0.0, 0.0, 0.3));
    /// assert_ne!(Lab::new(50.0, 0.0, 0.0), Lab::new(50.0, 0.0, 0.001));
    /// ```
    fn eq(&self, other: &Self) -> bool {
        if self.coordinates == other.coordinates {
            return true;
        }

        to_eq_coordinates(&self.coordinates) == to_eq_coordinates(&other.coordinates)
    }
}

impl Eq for Lab {}

impl core::fmt::Debug for Lab {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [l, a, b] = self.coordinates;
        f.write_fmt(format_args!("Lab({}, {}, {})", l, a, b))
    }
}

// ====================================================================================================================

/// A choice of color difference formula. <i class=rust-only>Rust only!</i>
///
/// Each variant carries the weights for its formula. The default is
/// [`DeltaE::CIEDE2000`], i.e., CIEDE2000 with 1:1:1 weights.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DeltaE {
    /// The Euclidean distance in CIELAB.
    Cie76,
    /// CMC l:c (1984) with lightness and chroma weights.
    Cmc(CmcWeights),
    /// CIE94 with application and chroma and hue weights.
    Cie94(Cie94Weights),
    /// CIEDE2000 with lightness, chroma, and hue weights.
    Ciede2000(Ciede2000Weights),
}

impl DeltaE {
    /// CMC l:c with the acceptability weights 2:1.
    pub const CMC: Self = Self::Cmc(CmcWeights::ACCEPTABILITY);

    /// CIE94 with the graphic arts weights 1:1:1.
    pub const CIE94: Self =
        Self::Cie94(Cie94Weights::with(Cie94Application::GraphicArts, 1.0, 1.0));

    /// CIEDE2000 with the weights 1:1:1.
    pub const CIEDE2000: Self = Self::Ciede2000(Ciede2000Weights::new(1.0, 1.0, 1.0));

    /// Get a human-readable name for the formula.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Cie76 => "CIE76",
            Self::Cmc(_) => "CMC l:c",
            Self::Cie94(_) => "CIE94",
            Self::Ciede2000(_) => "CIEDE2000",
        }
    }

    /// Compute the difference between the reference and the sample color.
    ///
    /// ```
    /// # use deltae::{assert_close_to, Cie94Weights, DeltaE, Lab};
    /// let reference = Lab::new(36.0, 60.0, 41.0);
    /// let sample = Lab::new(55.0, 66.0, 77.0);
    /// let cie94 = DeltaE::Cie94(Cie94Weights::default());
    /// assert_close_to!(cie94.compute(&reference, &sample), 22.849281934529994, 1e-12);
    /// ```
    pub fn compute(&self, reference: &Lab, sample: &Lab) -> Float {
        let (c1, c2) = (&reference.coordinates, &sample.coordinates);
        match *self {
            Self::Cie76 => delta_e_cie76(c1, c2),
            Self::Cmc(ref weights) => delta_e_cmc(c1, c2, weights),
            Self::Cie94(ref weights) => delta_e_cie94(c1, c2, weights),
            Self::Ciede2000(ref weights) => delta_e_ciede2000(c1, c2, weights),
        }
    }
}

impl Default for DeltaE {
    fn default() -> Self {
        Self::CIEDE2000
    }
}

use crate::core::math::{chroma, hue_difference};
use crate::{Cie94Weights, Float};

/// Compute CIE94 Delta-E.
///
/// Like CMC l:c, this formula weights chroma and hue differences by the first
/// color's chroma and hence is not symmetric. The lightness weighting function
/// is fixed at one, so that the lightness term only divides by the
/// application's lightness factor.
#[allow(non_snake_case)]
pub fn delta_e_cie94(
    coordinates1: &[Float; 3],
    coordinates2: &[Float; 3],
    weights: &Cie94Weights,
) -> Float {
    let [L1, a1, b1] = *coordinates1;
    let [L2, a2, b2] = *coordinates2;

    let kL = weights.application.lightness();
    let (K1, K2) = weights.application.constants();

    let ΔL = L1 - L2;
    let Δa = a1 - a2;
    let Δb = b1 - b2;

    let C1 = chroma(a1, b1);
    let C2 = chroma(a2, b2);
    let ΔC = C1 - C2;
    let ΔH = hue_difference(Δa, Δb, ΔC);

    let SC = 1.0 + K1 * C1;
    let SH = 1.0 + K2 * C1;

    let L = ΔL / kL;
    let C = ΔC / (weights.chroma * SC);
    let H = ΔH / (weights.hue * SH);

    (L * L + C * C + H * H).sqrt()
}

use crate::core::math::{chroma, hue_difference, signed_hue, to_radians};
use crate::{CmcWeights, Float};

/// Compute CMC l:c (1984) Delta-E.
///
/// The formula weights chroma and hue differences by the *first* color's
/// chroma and hue angle. Hence swapping the two colors generally changes the
/// result. The hue angle is taken in `-180..=180` degrees, so that the rotation
/// term's `164..=345` band only ever matches angles up to 180.
#[allow(non_snake_case)]
pub fn delta_e_cmc(
    coordinates1: &[Float; 3],
    coordinates2: &[Float; 3],
    weights: &CmcWeights,
) -> Float {
    let [L1, a1, b1] = *coordinates1;
    let [L2, a2, b2] = *coordinates2;

    let ΔL = L2 - L1;
    let Δa = a2 - a1;
    let Δb = b2 - b1;

    let C1 = chroma(a1, b1);
    let C2 = chroma(a2, b2);
    let ΔC = C2 - C1;
    let ΔH = hue_difference(Δa, Δb, ΔC);

    let h1 = signed_hue(a1, b1);

    // Hue rotation
    let T = if (164.0..=345.0).contains(&h1) {
        0.56 + (0.2 * to_radians(h1 + 168.0).cos()).abs()
    } else {
        0.36 + (0.4 * to_radians(h1 + 35.0).cos()).abs()
    };

    let C1_4 = C1.powi(4);
    let F = (C1_4 / (C1_4 + 1900.0)).sqrt();

    // Weighting functions
    let SL = if L1 < 16.0 {
        0.511
    } else {
        (0.040975 * L1) / (1.0 + 0.01765 * L1)
    };
    let SC = (0.0638 * C1) / (1.0 + 0.0131 * C1) + 0.638;
    let SH = SC * (F * T + 1.0 - F);

    let L = ΔL / (weights.lightness * SL);
    let C = ΔC / (weights.chroma * SC);
    let H = ΔH / SH;

    (L * L + C * C + H * H).sqrt()
}

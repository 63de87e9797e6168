use crate::Float;

/// Compute CIE76 Delta-E, i.e., the Euclidean distance in CIELAB.
#[allow(non_snake_case)]
pub fn delta_e_cie76(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [L1, a1, b1] = *coordinates1;
    let [L2, a2, b2] = *coordinates2;

    let ΔL = L2 - L1;
    let Δa = a2 - a1;
    let Δb = b2 - b1;

    (ΔL * ΔL + Δa * Δa + Δb * Δb).sqrt()
}

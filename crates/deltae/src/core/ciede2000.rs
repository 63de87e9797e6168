use crate::core::math::{chroma, hue, to_radians, POW25_7};
use crate::{Ciede2000Weights, Float};

/// Compute CIEDE2000 Delta-E.
///
/// This function follows the procedure published by the CIE in Technical
/// Report 142-2001, with the implementation notes by [Sharma, Wu, and
/// Dalal](https://hajim.rochester.edu/ece/sites/gsharma/papers/CIEDE2000CRNAFeb05.pdf).
/// Hue angles are normalized to `0..360` degrees and the hue difference to
/// `-180..180` degrees.
///
/// The formula is symmetric except when the corrected hue angles are exactly
/// 180° apart. Then the hue difference is always taken as −180°, so the mean
/// hue depends on argument order and swapping the two colors changes the
/// result, e.g., 7.1792 vs 7.2195 for `[50, 2.49, -0.001]` and
/// `[50, -2.49, 0.001]`.
///
/// If either color has zero (corrected) chroma, its hue is undefined. In that
/// case, the hue difference is zero and the mean hue is the *sum* of both hue
/// angles. The mean hue still feeds into the T and RT terms, though the latter
/// is multiplied by a zero hue difference.
#[allow(non_snake_case)]
pub fn delta_e_ciede2000(
    coordinates1: &[Float; 3],
    coordinates2: &[Float; 3],
    weights: &Ciede2000Weights,
) -> Float {
    let [L1, a1, b1] = *coordinates1;
    let [L2, a2, b2] = *coordinates2;

    let ΔLp = L2 - L1;

    let C1 = chroma(a1, b1);
    let C2 = chroma(a2, b2);

    let L_mean = (L1 + L2) / 2.0;
    let C_mean = (C1 + C2) / 2.0;

    // G factor for a
    let C_mean_7 = C_mean.powi(7);
    let G = 0.5 * (1.0 - (C_mean_7 / (C_mean_7 + POW25_7)).sqrt());

    let a1p = a1 * (1.0 + G);
    let a2p = a2 * (1.0 + G);

    let C1p = chroma(a1p, b1);
    let C2p = chroma(a2p, b2);
    let Cp_mean = (C1p + C2p) / 2.0;
    let ΔCp = C2p - C1p;

    let h1p = hue(a1p, b1);
    let h2p = hue(a2p, b2);

    let (ΔHp, hp_mean) = if C1p == 0.0 || C2p == 0.0 {
        (0.0, h1p + h2p)
    } else {
        // Half the shortest signed arc from h1p to h2p
        let half_Δhp = ((h2p - h1p + 540.0).rem_euclid(360.0) - 180.0) / 2.0;
        let ΔHp = 2.0 * (C1p * C2p).sqrt() * to_radians(half_Δhp).sin();
        let hp_mean = (h1p + half_Δhp + 360.0).rem_euclid(360.0);
        (ΔHp, hp_mean)
    };

    // Hue rotation
    let T = 1.0 - 0.17 * to_radians(hp_mean - 30.0).cos()
        + 0.24 * to_radians(2.0 * hp_mean).cos()
        + 0.32 * to_radians(3.0 * hp_mean + 6.0).cos()
        - 0.2 * to_radians(4.0 * hp_mean - 63.0).cos();

    // Weighting functions
    let ΔL_mean_2 = (L_mean - 50.0) * (L_mean - 50.0);
    let SL = 1.0 + (0.015 * ΔL_mean_2) / (20.0 + ΔL_mean_2).sqrt();
    let SC = 1.0 + 0.045 * Cp_mean;
    let SH = 1.0 + 0.015 * Cp_mean * T;

    // Interaction between chroma and hue
    let Cp_mean_7 = Cp_mean.powi(7);
    let RC = 2.0 * (Cp_mean_7 / (Cp_mean_7 + POW25_7)).sqrt();
    let RT = -to_radians(60.0 * (-((hp_mean - 275.0) / 25.0).powi(2)).exp()).sin() * RC;

    let L = ΔLp / (weights.lightness * SL);
    let C = ΔCp / (weights.chroma * SC);
    let H = ΔHp / (weights.hue * SH);

    (L * L + C * C + H * H + RT * C * H).sqrt()
}

#[cfg(test)]
mod test {
    use super::delta_e_ciede2000;
    use crate::{assert_close_to, Ciede2000Weights, Float};

    const INT1: [Float; 3] = [36.0, 60.0, 41.0];
    const INT2: [Float; 3] = [55.0, 66.0, 77.0];
    const FRAC1: [Float; 3] = [36.23288178584245, 60.10930952982204, 41.22006831026425];
    const FRAC2: [Float; 3] = [55.9588099835815, 66.47798295202801, 77.01211079141827];

    #[test]
    fn test_ciede2000_vectors() {
        let weights = Ciede2000Weights::default();
        assert_close_to!(delta_e_ciede2000(&INT1, &INT2, &weights), 22.394506952417903, 1e-12);
        assert_close_to!(delta_e_ciede2000(&FRAC1, &FRAC2, &weights), 22.9922547320809, 1e-12);
    }

    #[test]
    fn test_ciede2000_weights() {
        for (weights, int_expected, frac_expected) in [
            (Ciede2000Weights::new(2.0, 1.0, 1.0), 15.966839123149132, 16.064048964165973),
            (Ciede2000Weights::new(1.0, 2.0, 1.0), 21.814747434250933, 22.426524253369486),
            (Ciede2000Weights::new(1.0, 1.0, 2.0), 19.939488746945784, 20.698933318795095),
        ] {
            assert_close_to!(delta_e_ciede2000(&INT1, &INT2, &weights), int_expected, 1e-12);
            assert_close_to!(delta_e_ciede2000(&FRAC1, &FRAC2, &weights), frac_expected, 1e-12);
        }
    }

    #[test]
    fn test_ciede2000_boundaries() {
        let weights = Ciede2000Weights::default();
        assert_eq!(
            delta_e_ciede2000(&[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0], &weights),
            0.0,
            "identical black"
        );
        assert_eq!(
            delta_e_ciede2000(&[99.5, 0.005, -0.01], &[99.5, 0.005, -0.01], &weights),
            0.0,
            "identical near-white"
        );
        assert_eq!(
            delta_e_ciede2000(&[100.0, 0.0, 0.0], &[0.0, 0.0, 0.0], &weights),
            100.0,
            "white vs black"
        );
    }

    /// The test data from Table I of Sharma, Wu, and Dalal (2004).
    const SHARMA_2004: [(Float, [Float; 3], [Float; 3]); 34] = [
        (2.0425, [50.0, 2.6772, -79.7751], [50.0, 0.0, -82.7485]),
        (2.8615, [50.0, 3.1571, -77.2803], [50.0, 0.0, -82.7485]),
        (3.4412, [50.0, 2.8361, -74.02], [50.0, 0.0, -82.7485]),
        (1.0, [50.0, -1.3802, -84.2814], [50.0, 0.0, -82.7485]),
        (1.0, [50.0, -1.1848, -84.8006], [50.0, 0.0, -82.7485]),
        (1.0, [50.0, -0.9009, -85.5211], [50.0, 0.0, -82.7485]),
        (2.3669, [50.0, 0.0, 0.0], [50.0, -1.0, 2.0]),
        (2.3669, [50.0, -1.0, 2.0], [50.0, 0.0, 0.0]),
        (7.1792, [50.0, 2.49, -0.001], [50.0, -2.49, 0.0009]),
        (7.1792, [50.0, 2.49, -0.001], [50.0, -2.49, 0.001]),
        (7.2195, [50.0, 2.49, -0.001], [50.0, -2.49, 0.0011]),
        (7.2195, [50.0, 2.49, -0.001], [50.0, -2.49, 0.0012]),
        (4.8045, [50.0, -0.001, 2.49], [50.0, 0.0009, -2.49]),
        (4.7461, [50.0, -0.001, 2.49], [50.0, 0.001, -2.49]),
        (4.7461, [50.0, -0.001, 2.49], [50.0, 0.0011, -2.49]),
        (4.3065, [50.0, 2.5, 0.0], [50.0, 0.0, -2.5]),
        (27.1492, [50.0, 2.5, 0.0], [73.0, 25.0, -18.0]),
        (22.8977, [50.0, 2.5, 0.0], [61.0, -5.0, 29.0]),
        (31.903, [50.0, 2.5, 0.0], [56.0, -27.0, -3.0]),
        (19.4535, [50.0, 2.5, 0.0], [58.0, 24.0, 15.0]),
        (1.0, [50.0, 2.5, 0.0], [50.0, 3.1736, 0.5854]),
        (1.0, [50.0, 2.5, 0.0], [50.0, 3.2972, 0.0]),
        (1.0, [50.0, 2.5, 0.0], [50.0, 1.8634, 0.5757]),
        (1.0, [50.0, 2.5, 0.0], [50.0, 3.2592, 0.335]),
        (1.2644, [60.2574, -34.0099, 36.2677], [60.4626, -34.1751, 39.4387]),
        (1.263, [63.0109, -31.0961, -5.8663], [62.8187, -29.7946, -4.0864]),
        (1.8731, [61.2901, 3.7196, -5.3901], [61.4292, 2.248, -4.962]),
        (1.8645, [35.0831, -44.1164, 3.7933], [35.0232, -40.0716, 1.5901]),
        (2.0373, [22.7233, 20.0904, -46.694], [23.0331, 14.973, -42.5619]),
        (1.4146, [36.4612, 47.858, 18.3852], [36.2715, 50.5065, 21.2231]),
        (1.4441, [90.8027, -2.0831, 1.441], [91.1528, -1.6435, 0.0447]),
        (1.5381, [90.9257, -0.5406, -0.9208], [88.6381, -0.8985, -0.7239]),
        (0.6377, [6.7747, -0.2908, -2.4247], [5.8714, -0.0985, -2.2286]),
        (0.9082, [2.0776, 0.0795, -1.135], [0.9033, -0.0636, -0.5514]),
    ];

    /// Determine whether the a/b vectors point in exactly opposite directions,
    /// which makes the corrected hue angles exactly 180° apart.
    fn is_opposite(c1: &[Float; 3], c2: &[Float; 3]) -> bool {
        c1[1] == -c2[1] && c1[2] == -c2[2]
    }

    #[test]
    fn test_ciede2000_sharma() {
        let weights = Ciede2000Weights::default();
        for (expected, c1, c2) in SHARMA_2004 {
            assert_close_to!(delta_e_ciede2000(&c1, &c2, &weights), expected, 1e-4);
            if !is_opposite(&c1, &c2) {
                assert_close_to!(delta_e_ciede2000(&c2, &c1, &weights), expected, 1e-4);
            }
        }
    }

    #[test]
    fn test_ciede2000_opposite_hues() {
        let weights = Ciede2000Weights::default();

        let c1 = [50.0, 2.49, -0.001];
        let c2 = [50.0, -2.49, 0.001];
        assert_close_to!(delta_e_ciede2000(&c1, &c2, &weights), 7.179162640001562, 1e-9);
        assert_close_to!(delta_e_ciede2000(&c2, &c1, &weights), 7.219470093152853, 1e-9);

        let c1 = [50.0, -0.001, 2.49];
        let c2 = [50.0, 0.001, -2.49];
        assert_close_to!(delta_e_ciede2000(&c1, &c2, &weights), 4.74606645303926, 1e-9);
        assert_close_to!(delta_e_ciede2000(&c2, &c1, &weights), 4.8045245082117685, 1e-9);

        // Just short of opposite, the order does not matter.
        let c1 = [50.0, 2.49, -0.001];
        let c2 = [50.0, -2.49, 0.0009];
        let forward = delta_e_ciede2000(&c1, &c2, &weights);
        assert_close_to!(delta_e_ciede2000(&c2, &c1, &weights), forward, 1e-12);
        assert_close_to!(forward, 7.179172011348979, 1e-9);
    }

    #[test]
    fn test_ciede2000_achromatic() {
        let weights = Ciede2000Weights::default();
        let gray = [50.0, 0.0, 0.0];
        for other in [[50.0, -1.0, 2.0], [70.0, 0.0, 0.0], [20.0, 40.0, -60.0]] {
            let forward = delta_e_ciede2000(&gray, &other, &weights);
            let backward = delta_e_ciede2000(&other, &gray, &weights);
            assert!(!forward.is_nan() && !backward.is_nan(), "no NaN for achromatic");
            assert_close_to!(forward, backward, 1e-12);
        }
    }

    #[test]
    fn test_ciede2000_lightness_weight() {
        // Pure lightness differences isolate the lightness term.
        let c1 = [30.0, 10.0, 10.0];
        let c2 = [45.0, 10.0, 10.0];
        let unit = delta_e_ciede2000(&c1, &c2, &Ciede2000Weights::default());
        let half = delta_e_ciede2000(&c1, &c2, &Ciede2000Weights::new(2.0, 1.0, 1.0));
        assert!(half < unit, "larger lightness weight shrinks lightness term");
        assert_close_to!(half * 2.0, unit, 1e-12);
    }
}

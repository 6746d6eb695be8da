//! Closed-form inductance of planar rectangular spirals.
use crate::{MM_PER_M, MU_0};

/// Self-inductance of a sharp-cornered rectangular spiral by the current-sheet
/// approximation of Mohan et al., using arithmetic-mean "diameters" of the
/// rectangular outline.
///
/// # Arguments
///
/// * `a_in`, `b_in`:   (mm) inner side lengths
/// * `a_out`, `b_out`: (mm) outer side lengths
/// * `turns`:          number of turns `N`
///
/// # Commentary
///
/// With $D = (A + B) / 2$ for each outline, fill ratio
/// $\rho = (D_{out} - D_{in}) / (D_{out} + D_{in})$ and mean diameter
/// $d_{avg} = (D_{out} + D_{in}) / 2$,
///
/// $$
/// L = \mu_0 N^2 \frac{d_{avg}}{2} \left( \ln \frac{2.46}{\rho} + 0.2 \rho^2 \right)
/// $$
///
/// The `N^2` factor is already included. `rho` is kept inside `(0, 1)` so that
/// very thin windings stay finite. Returns zero when the outline does not grow
/// (`D_out <= D_in`) or there are no turns.
///
/// # References
///
///   \[1\] S. S. Mohan, M. del Mar Hershenson, S. P. Boyd and T. H. Lee,
///         “Simple accurate expressions for planar spiral inductances,”
///         IEEE Journal of Solid-State Circuits, vol. 34, no. 10, pp. 1419-1424, Oct. 1999,
///         doi: [10.1109/4.792620](https://doi.org/10.1109/4.792620).
pub fn inductance_mohan_rectangular_spiral(
    a_in: f64,
    b_in: f64,
    a_out: f64,
    b_out: f64,
    turns: usize,
) -> f64 {
    let d_out = (a_out + b_out) / 2.0; // [mm]
    let d_in = (a_in + b_in) / 2.0; // [mm]
    if d_out <= d_in || turns == 0 {
        return 0.0;
    }

    let rho = ((d_out - d_in) / (d_out + d_in)).clamp(1e-6, 0.999_999); // [nondim]
    let d_avg = ((d_out + d_in) / 2.0) / MM_PER_M; // [m]
    let n = turns as f64;
    let bracket = (2.46 / rho).ln() + 0.2 * rho * rho;

    MU_0 * n * n * (d_avg / 2.0) * bracket
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mohan_reference() {
        // 20 x 15 mm form, 5 turns of 1 mm wire without spacing
        let l = inductance_mohan_rectangular_spiral(20.0, 15.0, 30.0, 25.0, 5);

        let (d_in, d_out) = (17.5, 27.5);
        let rho: f64 = 10.0 / 45.0;
        let expected = MU_0 * 25.0 * (22.5e-3 / 2.0) * ((2.46 / rho).ln() + 0.2 * rho * rho);
        assert!(d_out > d_in);
        assert_relative_eq!(l, expected, max_relative = 1e-12);

        // A few hundred nH for a coil this size
        assert!(l > 1e-7 && l < 1e-6);
    }

    #[test]
    fn test_mohan_scales_with_turns_squared() {
        let l1 = inductance_mohan_rectangular_spiral(20.0, 15.0, 30.0, 25.0, 5);
        let l2 = inductance_mohan_rectangular_spiral(20.0, 15.0, 30.0, 25.0, 10);
        assert_relative_eq!(l2, 4.0 * l1, max_relative = 1e-12);
    }

    #[test]
    fn test_mohan_degenerate() {
        assert_eq!(inductance_mohan_rectangular_spiral(20.0, 15.0, 20.0, 15.0, 5), 0.0);
        assert_eq!(inductance_mohan_rectangular_spiral(20.0, 15.0, 10.0, 10.0, 5), 0.0);
        assert_eq!(inductance_mohan_rectangular_spiral(20.0, 15.0, 30.0, 25.0, 0), 0.0);
    }

    #[test]
    fn test_mohan_fill_ratio_is_clamped() {
        // Vanishingly thin winding still gives a finite, positive value
        let l = inductance_mohan_rectangular_spiral(20.0, 20.0, 20.0 + 1e-9, 20.0, 1);
        let expected = MU_0 * (20.0e-3 / 2.0) * ((2.46 / 1e-6f64).ln() + 0.2e-12);
        assert!(l.is_finite() && l > 0.0);
        assert_relative_eq!(l, expected, max_relative = 1e-6);
    }
}

//! Inductance of coaxial circular current filaments.
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::{Error, Result};
use crate::math::{ellipe, ellipk};
use crate::MU_0;

/// Self-inductance of a single circular loop of round wire.
///
/// # Arguments
///
/// * `r`:           (m) loop radius, to the wire centerline
/// * `wire_radius`: (m) conductor radius
///
/// # Commentary
///
/// Thin-wire loop formula
///
/// $$
/// L = \mu_0 r \left( \ln \frac{8 r}{a} - 1.75 \right)
/// $$
///
/// which assumes `r >> a`. Non-positive inputs give zero.
///
/// # References
///
///   \[1\] F. W. Grover, *Inductance Calculations: Working Formulas and Tables*. New York: Van Nostrand, 1946.
#[inline]
pub fn self_inductance_circular_filament(r: f64, wire_radius: f64) -> f64 {
    if r <= 0.0 || wire_radius <= 0.0 {
        return 0.0;
    }

    MU_0 * r * ((8.0 * r / wire_radius).ln() - 1.75)
}

/// Mutual inductance between two coaxial circular filaments.
///
/// # Arguments
///
/// * `r1`: (m) radius of the first loop
/// * `r2`: (m) radius of the second loop
/// * `z`:  (m) axial separation between the loop planes
///
/// # Commentary
///
/// Maxwell's formula with $k^2 = 4 r_1 r_2 / ((r_1 + r_2)^2 + z^2)$:
///
/// $$
/// M = \frac{\mu_0 \sqrt{r_1 r_2}}{k} \left( (2 - k^2) K(k^2) - 2 E(k^2) \right)
/// $$
///
/// Coincident loops (`k^2 >= 1`) and non-positive radii give zero rather than
/// evaluating the elliptic integrals at their singularity. Never negative.
///
/// # References
///
///   \[1\] J. C. Maxwell, *A Treatise on Electricity and Magnetism*, vol. 2, art. 701. 1873.
#[inline]
pub fn mutual_inductance_circular_filaments(r1: f64, r2: f64, z: f64) -> f64 {
    if r1 <= 0.0 || r2 <= 0.0 {
        return 0.0;
    }

    let r1r2 = r1 * r2;
    let r_plus = r1 + r2;
    let k2 = 4.0 * r1r2 / r_plus.mul_add(r_plus, z * z);
    if k2 >= 1.0 {
        return 0.0;
    }

    // Weakly coupled loops leave a bracket smaller than the fit error of the elliptic integrals
    let bracket = (2.0 - k2).mul_add(ellipk(k2), -2.0 * ellipe(k2)).max(0.0);
    let k = k2.sqrt();
    (MU_0 * r1r2.sqrt() / k) * bracket
}

/// Contribution of filament `i` to the total: its self term plus twice its
/// mutual coupling to every later filament.
#[inline]
fn filament_row(i: usize, rfil: &[f64], zfil: &[f64], wire_radius: f64) -> f64 {
    let ri = rfil[i];
    let zi = zfil[i];
    let mut row = self_inductance_circular_filament(ri, wire_radius);
    for j in (i + 1)..rfil.len() {
        let z = (zi - zfil[j]).abs();
        row = 2.0f64.mul_add(mutual_inductance_circular_filaments(ri, rfil[j], z), row);
    }

    row
}

fn check_lengths(rfil: &[f64], zfil: &[f64]) -> Result<()> {
    if rfil.len() != zfil.len() {
        return Err(Error::LengthMismatch(
            "filament r and z coordinates must have the same length",
        ));
    }
    Ok(())
}

/// Total inductance of a set of series-connected coaxial circular filaments.
///
/// # Arguments
///
/// * `rfil`:        (m) radius of each filament, length `n`
/// * `zfil`:        (m) axial position of each filament, length `n`
/// * `wire_radius`: (m) conductor radius used for every self term
///
/// # Commentary
///
/// Exact double sum over all pairs,
///
/// $$
/// L = \sum_i L_i + \sum_{i < j} 2 M(r_i, r_j, |z_i - z_j|)
/// $$
///
/// at O(n^2) cost. The result does not depend on filament ordering beyond roundoff.
pub fn inductance_circular_filaments(rfil: &[f64], zfil: &[f64], wire_radius: f64) -> Result<f64> {
    check_lengths(rfil, zfil)?;

    let inductance = (0..rfil.len())
        .map(|i| filament_row(i, rfil, zfil, wire_radius))
        .sum();

    Ok(inductance)
}

/// Parallel variant of [`inductance_circular_filaments`], parallelized over filaments.
///
/// Per-filament partial sums are gathered in order before the final reduction,
/// so the result is bitwise identical to the serial function.
pub fn inductance_circular_filaments_par(
    rfil: &[f64],
    zfil: &[f64],
    wire_radius: f64,
) -> Result<f64> {
    check_lengths(rfil, zfil)?;

    let rows: Vec<f64> = (0..rfil.len())
        .into_par_iter()
        .map(|i| filament_row(i, rfil, zfil, wire_radius))
        .collect();

    Ok(rows.into_iter().sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_self_inductance_reference() {
        // 10 cm loop of 1 mm radius wire
        let l = self_inductance_circular_filament(0.1, 1e-3);
        assert_relative_eq!(l, MU_0 * 0.1 * (800.0f64.ln() - 1.75), max_relative = 1e-14);
        assert!(l > 0.0);
    }

    #[test]
    fn test_self_inductance_degenerate() {
        assert_eq!(self_inductance_circular_filament(0.0, 1e-3), 0.0);
        assert_eq!(self_inductance_circular_filament(-0.1, 1e-3), 0.0);
        assert_eq!(self_inductance_circular_filament(0.1, 0.0), 0.0);
    }

    #[test]
    fn test_mutual_inductance_coincident_is_zero() {
        for r in [1e-4, 5.25e-3, 0.3, 12.0] {
            assert_eq!(mutual_inductance_circular_filaments(r, r, 0.0), 0.0);
        }
        assert_eq!(mutual_inductance_circular_filaments(0.0, 0.1, 0.0), 0.0);
        assert_eq!(mutual_inductance_circular_filaments(0.1, -0.1, 0.01), 0.0);
    }

    #[test]
    fn test_mutual_inductance_far_field() {
        // Two small loops far apart behave as coaxial dipoles:
        // M ~ mu0 pi r1^2 r2^2 / (2 z^3)
        let (r1, r2, z): (f64, f64, f64) = (0.01, 0.02, 2.0);
        let dipole = MU_0 * core::f64::consts::PI * r1 * r1 * r2 * r2 / (2.0 * z.powi(3));
        let m = mutual_inductance_circular_filaments(r1, r2, z);
        assert_relative_eq!(m, dipole, max_relative = 2e-2);
    }

    #[test]
    fn test_mutual_inductance_decays_with_separation() {
        let mut prev = f64::INFINITY;
        for i in 1..20 {
            let m = mutual_inductance_circular_filaments(0.05, 0.05, i as f64 * 1e-3);
            assert!(m > 0.0);
            assert!(m < prev);
            prev = m;
        }
    }

    #[test]
    fn test_filament_sum_single_loop_is_self_inductance() {
        let l = inductance_circular_filaments(&[0.05], &[0.0], 1e-3).unwrap();
        assert_eq!(l, self_inductance_circular_filament(0.05, 1e-3));
    }

    #[test]
    fn test_filament_sum_two_loops() {
        let (r1, r2, z) = (0.05, 0.06, 0.01);
        let a = 1e-3;
        let expected = self_inductance_circular_filament(r1, a)
            + self_inductance_circular_filament(r2, a)
            + 2.0 * mutual_inductance_circular_filaments(r1, r2, z);
        let l = inductance_circular_filaments(&[r1, r2], &[0.0, z], a).unwrap();
        assert_relative_eq!(l, expected, max_relative = 1e-14);

        // Order independence
        let l_rev = inductance_circular_filaments(&[r2, r1], &[z, 0.0], a).unwrap();
        assert_relative_eq!(l, l_rev, max_relative = 1e-14);
    }

    #[test]
    fn test_filament_sum_length_mismatch() {
        let err = inductance_circular_filaments(&[0.1, 0.2], &[0.0], 1e-3).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch(_)));
        assert!(inductance_circular_filaments_par(&[0.1], &[], 1e-3).is_err());
    }

    #[test]
    fn test_filament_sum_par_matches_serial() {
        let n = 300;
        let rfil: Vec<f64> = (0..n).map(|i| 0.01 + 1e-4 * (i % 30) as f64).collect();
        let zfil: Vec<f64> = (0..n).map(|i| 2e-4 * (i / 30) as f64).collect();

        let serial = inductance_circular_filaments(&rfil, &zfil, 5e-5).unwrap();
        let par = inductance_circular_filaments_par(&rfil, &zfil, 5e-5).unwrap();
        assert_eq!(serial, par);
        assert!(serial > 0.0);
    }

    #[test]
    fn test_filament_sum_empty() {
        assert_eq!(inductance_circular_filaments(&[], &[], 1e-3).unwrap(), 0.0);
    }

    proptest! {
        #[test]
        fn mutual_inductance_is_symmetric(
            r1 in 1e-4f64..1.0,
            r2 in 1e-4f64..1.0,
            z in 0.0f64..1.0,
        ) {
            let m12 = mutual_inductance_circular_filaments(r1, r2, z);
            let m21 = mutual_inductance_circular_filaments(r2, r1, z);
            prop_assert_eq!(m12, m21);
            prop_assert!(m12.is_finite());
            prop_assert!(m12 >= 0.0);
        }

        #[test]
        fn self_inductance_increases_with_radius(
            wire_radius in 1e-5f64..1e-2,
            scale in 1.0f64..1e3,
            step in 1e-3f64..1.0,
        ) {
            let r = wire_radius * scale;
            let l0 = self_inductance_circular_filament(r, wire_radius);
            let l1 = self_inductance_circular_filament(r * (1.0 + step), wire_radius);
            prop_assert!(l1 > l0);
        }
    }
}

//! DC resistance and mass of the wound conductor.
use crate::MM_PER_M;

/// (mm^2) per (m^2)
const MM2_PER_M2: f64 = MM_PER_M * MM_PER_M;

/// (ohm) DC resistance of a uniform conductor, $R = \rho \ell / A$.
///
/// # Arguments
///
/// * `resistivity`: (ohm-m) conductor resistivity
/// * `length`:      (m) conductor length
/// * `area`:        (mm^2) conductor cross-section, must be positive
pub fn dc_resistance(resistivity: f64, length: f64, area: f64) -> f64 {
    resistivity * length / (area / MM2_PER_M2)
}

/// (g) mass of a uniform conductor.
///
/// # Arguments
///
/// * `density`: (g/cm^3) conductor density
/// * `area`:    (mm^2) conductor cross-section
/// * `length`:  (mm) conductor length
pub fn wire_mass(density: f64, area: f64, length: f64) -> f64 {
    // mm^3 -> cm^3
    density * area * length / 1000.0
}

//! Filamentization and wound-length functions for coil windings.
//!
//! Inputs are in (mm) like the rest of the coil description; filament
//! coordinates are returned in (m) for the physics kernels.
use core::f64::consts::PI;

use crate::MM_PER_M;

/// Filamentize a circular winding into one coaxial loop per turn and layer.
///
/// # Arguments
///
/// * `inner_diameter`:   (mm) diameter of the winding form
/// * `wire_width`:       (mm) radial extent of the conductor
/// * `horizontal_pitch`: (mm) center-to-center spacing between turns of a layer
/// * `vertical_pitch`:   (mm) center-to-center spacing between layers
/// * `turns`:            turns per layer
/// * `layers`:           number of layers
///
/// # Commentary
///
/// Returns `(rfil, zfil)` in (m), each length `turns * layers`, layer-major.
/// Each loop sits on the conductor centerline, so the first turn is offset
/// from the form by half a wire width. Layers are stacked axially starting at `z = 0`.
pub fn filament_circular_winding(
    inner_diameter: f64,
    wire_width: f64,
    horizontal_pitch: f64,
    vertical_pitch: f64,
    turns: usize,
    layers: usize,
) -> (Vec<f64>, Vec<f64>) {
    let nfil = turns * layers;
    let mut rfil = Vec::with_capacity(nfil);
    let mut zfil = Vec::with_capacity(nfil);

    for j in 0..layers {
        let z = j as f64 * vertical_pitch; // [mm]
        for i in 0..turns {
            let r = (i as f64).mul_add(horizontal_pitch, inner_diameter / 2.0) + wire_width / 2.0;
            rfil.push(r / MM_PER_M);
            zfil.push(z / MM_PER_M);
        }
    }

    (rfil, zfil)
}

/// (mm) distance from the winding form to the centerline of turn `i`
#[inline]
fn turn_offset(i: usize, wire_width: f64, pitch: f64) -> f64 {
    (i as f64).mul_add(pitch, wire_width / 2.0)
}

/// (mm) centerline length of turn `i` of a rounded-rectangle winding.
///
/// # Arguments
///
/// * `a`, `b`:      (mm) inner side lengths of the form
/// * `r`:           (mm) inner corner radius of the form
/// * `wire_width`:  (mm) radial extent of the conductor
/// * `pitch`:       (mm) center-to-center spacing between turns
/// * `i`:           turn index, counting outward from the form
///
/// # Commentary
///
/// The turn is offset outward from the form by `off = i * pitch + wire_width / 2`,
/// growing each side by `2 off` and the corner radius by `off`. Straight runs
/// are whatever is left after the four quarter-circle corners, floored at zero.
pub fn turn_length_rounded_rectangle(
    a: f64,
    b: f64,
    r: f64,
    wire_width: f64,
    pitch: f64,
    i: usize,
) -> f64 {
    let off = turn_offset(i, wire_width, pitch);
    let cur_a = 2.0f64.mul_add(off, a);
    let cur_b = 2.0f64.mul_add(off, b);
    let cur_r = r + off;

    let straight_a = 2.0f64.mul_add(-cur_r, cur_a).max(0.0);
    let straight_b = 2.0f64.mul_add(-cur_r, cur_b).max(0.0);

    2.0f64.mul_add(straight_a + straight_b, 2.0 * PI * cur_r)
}

/// (mm) centerline length of turn `i` of a circular winding
pub fn turn_length_circular(inner_diameter: f64, wire_width: f64, pitch: f64, i: usize) -> f64 {
    let off = turn_offset(i, wire_width, pitch);
    PI * 2.0f64.mul_add(off, inner_diameter)
}

/// (mm) wire length of one layer of a rounded-rectangle winding with `turns` turns
pub fn layer_length_rounded_rectangle(
    a: f64,
    b: f64,
    r: f64,
    wire_width: f64,
    pitch: f64,
    turns: usize,
) -> f64 {
    (0..turns)
        .map(|i| turn_length_rounded_rectangle(a, b, r, wire_width, pitch, i))
        .sum()
}

/// (mm) wire length of one layer of a circular winding with `turns` turns
pub fn layer_length_circular(
    inner_diameter: f64,
    wire_width: f64,
    pitch: f64,
    turns: usize,
) -> f64 {
    (0..turns)
        .map(|i| turn_length_circular(inner_diameter, wire_width, pitch, i))
        .sum()
}

/// (mm) radial build of the winding, from the form to the outside of the last turn.
///
/// Spacing is only counted between turns, not outside the first or last one.
pub fn radial_thickness(turns: usize, wire_width: f64, horizontal_spacing: f64) -> f64 {
    let gaps = turns.saturating_sub(1) as f64 * horizontal_spacing;
    (turns as f64).mul_add(wire_width, gaps.max(0.0))
}

/// (mm) axial height of the winding
pub fn winding_height(layers: usize, wire_thickness: f64, vertical_spacing: f64) -> f64 {
    let gaps = layers.saturating_sub(1) as f64 * vertical_spacing;
    (layers as f64).mul_add(wire_thickness, gaps.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_filament_circular_winding_layout() {
        let (rfil, zfil) = filament_circular_winding(10.0, 0.5, 0.6, 0.7, 3, 2);
        assert_eq!(rfil.len(), 6);
        assert_eq!(zfil.len(), 6);

        // Layer-major ordering, radius repeats per layer
        let expected_r = [5.25e-3, 5.85e-3, 6.45e-3];
        for j in 0..2 {
            for i in 0..3 {
                let k = j * 3 + i;
                assert_relative_eq!(rfil[k], expected_r[i], epsilon = 1e-15);
                assert_relative_eq!(zfil[k], j as f64 * 0.7e-3, epsilon = 1e-15);
            }
        }
    }

    #[test]
    fn test_filament_circular_winding_empty() {
        let (rfil, zfil) = filament_circular_winding(10.0, 0.5, 0.6, 0.7, 0, 4);
        assert!(rfil.is_empty() && zfil.is_empty());
    }

    #[test]
    fn test_rounded_rectangle_turn_length() {
        // Sharp corners: perimeter of the offset rectangle, plus the
        // full circle contributed by the offset corner radius
        let len = turn_length_rounded_rectangle(20.0, 15.0, 0.0, 1.0, 1.0, 0);
        let off = 0.5;
        let expected = 2.0 * (20.0 + 15.0) + 2.0 * PI * off;
        assert_relative_eq!(len, expected, epsilon = 1e-12);

        // Second turn is pushed out one pitch
        let len1 = turn_length_rounded_rectangle(20.0, 15.0, 2.0, 1.0, 1.5, 1);
        let off = 2.0;
        let (ca, cb, cr) = (20.0 + 2.0 * off, 15.0 + 2.0 * off, 2.0 + off);
        let expected = 2.0 * ((ca - 2.0 * cr) + (cb - 2.0 * cr)) + 2.0 * PI * cr;
        assert_relative_eq!(len1, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_rounded_rectangle_straight_runs_floor_at_zero() {
        // Oversized corner radius collapses the straights
        let len = turn_length_rounded_rectangle(4.0, 4.0, 10.0, 1.0, 1.0, 0);
        assert_relative_eq!(len, 2.0 * PI * 10.5, epsilon = 1e-12);
    }

    #[test]
    fn test_circular_length_matches_closed_form() {
        // pi * sum(d_in + w + 2 i p)
        let len = layer_length_circular(10.0, 0.5, 0.6, 10);
        let expected: f64 = (0..10).map(|i| PI * (10.5 + 1.2 * i as f64)).sum();
        assert_relative_eq!(len, expected, max_relative = 1e-12);
        assert_relative_eq!(len, PI * 159.0, max_relative = 1e-12);
    }

    #[test]
    fn test_circular_is_limit_of_rounded_rectangle() {
        let circ = layer_length_circular(10.0, 0.5, 0.6, 7);
        let rr = layer_length_rounded_rectangle(10.0, 10.0, 5.0, 0.5, 0.6, 7);
        assert_relative_eq!(circ, rr, max_relative = 1e-12);
    }

    #[test]
    fn test_envelope_dimensions() {
        assert_relative_eq!(radial_thickness(10, 0.5, 0.1), 5.9, epsilon = 1e-12);
        assert_relative_eq!(radial_thickness(1, 0.5, 0.1), 0.5, epsilon = 1e-12);
        assert_relative_eq!(winding_height(3, 0.5, 0.2), 1.9, epsilon = 1e-12);
        assert_relative_eq!(winding_height(1, 0.5, 0.2), 0.5, epsilon = 1e-12);
    }
}

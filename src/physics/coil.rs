//! Whole-coil inductance from winding geometry.
//!
//! Circular windings are summed exactly over their circular filaments.
//! Rounded-rectangle windings have no closed-form filament sum, so their
//! single-layer inductance is blended between the sharp-cornered Mohan spiral
//! and the equivalent circular winding as the corner radius grows, then scaled
//! for inter-layer coupling.
use core::fmt;

use serde::Serialize;

use super::circular_filament::{inductance_circular_filaments, inductance_circular_filaments_par};
use super::mohan::inductance_mohan_rectangular_spiral;
use crate::error::Result;
use crate::math::smoothstep;
use crate::mesh::{filament_circular_winding, radial_thickness};
use crate::params::{CoilSpec, WindingSpec, WireSpec};
use crate::MM_PER_M;

/// Filament count above which the pairwise sum is spread over the rayon pool
pub const PAR_FILAMENT_THRESHOLD: usize = 256;

/// How the inductance of a coil was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InductanceMethod {
    /// Exact self + mutual sum over circular filaments
    FilamentSum,
    /// Rounded rectangle whose corners meet, summed as the equivalent circle
    CircularCollapse,
    /// Mohan spiral to circular filament-sum blend with multilayer coupling
    MohanCircularBlend,
}

impl fmt::Display for InductanceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FilamentSum => f.write_str("Filament method (self + mutual) for circular loops"),
            Self::CircularCollapse => f.write_str(
                "Filament method (self + mutual) for circular loops; \
                 R >= min(A,B)/2 makes the inner shape a circle",
            ),
            Self::MohanCircularBlend => f.write_str(
                "Mohan (rectangular, arithmetic-mean diameters) ↔ Circular (filament) \
                 smooth blending by R; multilayer coupling applied",
            ),
        }
    }
}

/// Intermediate values of the rounded-rectangle blend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlendedInductance {
    /// (H) sharp-cornered Mohan spiral, single layer
    pub square: f64,
    /// (H) single-layer filament sum of the circle at full corner radius
    pub circle_end: f64,
    /// Corner-radius progress `R / (min(A, B) / 2)`, unclamped
    pub progress: f64,
    /// Smoothstep weight of `circle_end`
    pub weight: f64,
    /// (H) blended single-layer inductance
    pub single_layer: f64,
    /// Multilayer coupling factor applied to `single_layer`
    pub coupling_scale: f64,
    /// (H) final inductance
    pub total: f64,
}

/// Effective `N^2`-like multiplier for `layers` identical layers stacked at `vertical_pitch`.
///
/// # Arguments
///
/// * `layers`:         number of layers `m`
/// * `d_avg`:          (mm) mean coil diameter
/// * `vertical_pitch`: (mm) center-to-center layer spacing
///
/// # Commentary
///
/// Each layer contributes itself once, and each pair of layers at offset
/// $\Delta$ contributes twice with a coupling that decays with their axial
/// separation relative to the coil size:
///
/// $$
/// s = m + \sum_{\Delta = 1}^{m - 1} 2 (m - \Delta) \frac{1}{1 + (\Delta \, dz / d)^{1.5}}
/// $$
///
/// This is `m^2` for coincident layers and tends to `m` for widely separated ones.
pub fn multilayer_coupling_scale(layers: usize, d_avg: f64, vertical_pitch: f64) -> f64 {
    if layers <= 1 {
        return 1.0;
    }

    let m = layers as f64;
    let d = d_avg.max(1e-9);
    (1..layers).fold(m, |scale, delta| {
        let delta = delta as f64;
        let kz = 1.0 / (1.0 + (delta * vertical_pitch / d).powf(1.5));
        (2.0 * (m - delta)).mul_add(kz, scale)
    })
}

fn sum_filaments(rfil: &[f64], zfil: &[f64], wire_radius: f64) -> Result<f64> {
    if rfil.len() >= PAR_FILAMENT_THRESHOLD {
        inductance_circular_filaments_par(rfil, zfil, wire_radius)
    } else {
        inductance_circular_filaments(rfil, zfil, wire_radius)
    }
}

/// (H) inductance of a circular winding by exact filament summation over every turn and layer.
///
/// # Arguments
///
/// * `inner_diameter`: (mm) diameter of the winding form
/// * `wire`:           conductor; its equal-area radius is used for the self terms
/// * `winding`:        turns, layers and spacing
pub fn inductance_circular_coil(
    inner_diameter: f64,
    wire: &WireSpec,
    winding: &WindingSpec,
) -> Result<f64> {
    let (rfil, zfil) = filament_circular_winding(
        inner_diameter,
        wire.width_mm(),
        winding.horizontal_pitch_mm(wire),
        winding.vertical_pitch_mm(wire),
        winding.turns,
        winding.layers,
    );

    sum_filaments(&rfil, &zfil, wire.effective_radius_mm() / MM_PER_M)
}

/// Inductance of a rounded-rectangle winding by blending its two limiting shapes.
///
/// # Arguments
///
/// * `a`, `b`:   (mm) inner side lengths of the form
/// * `r`:        (mm) inner corner radius, `0 <= r < min(a, b) / 2`
/// * `wire`:     conductor
/// * `winding`:  turns, layers and spacing
///
/// # Commentary
///
/// The single-layer value moves from the Mohan spiral at `r = 0` to the
/// filament sum of a circle of diameter `min(a, b)` as `r` reaches half the
/// short side, weighted by a smoothstep of the corner-radius progress so that
/// both ends are met exactly and without a kink. Layers are then accounted for
/// with [`multilayer_coupling_scale`] at the mean rectangular diameter.
///
/// Outlines with `2 r >= min(a, b)` are circles; [`coil_inductance`] routes
/// those to [`inductance_circular_coil`] instead, which sums all layers exactly.
pub fn inductance_rounded_rectangle_coil(
    a: f64,
    b: f64,
    r: f64,
    wire: &WireSpec,
    winding: &WindingSpec,
) -> Result<BlendedInductance> {
    let wire_width = wire.width_mm();
    let horizontal_pitch = winding.horizontal_pitch_mm(wire);
    let turns = winding.turns;

    let build = radial_thickness(turns, wire_width, winding.horizontal_spacing_mm);
    let a_out = 2.0f64.mul_add(build, a);
    let b_out = 2.0f64.mul_add(build, b);

    // Sharp-cornered limit
    let square = inductance_mohan_rectangular_spiral(a, b, a_out, b_out, turns);

    // Full-circle limit, single layer in one plane
    let min_side = a.min(b);
    let (rfil, zfil) =
        filament_circular_winding(min_side, wire_width, horizontal_pitch, 0.0, turns, 1);
    let circle_end = sum_filaments(&rfil, &zfil, wire.effective_radius_mm() / MM_PER_M)?;

    let progress = r / (min_side / 2.0);
    let weight = smoothstep(progress);
    let single_layer = (square - circle_end).mul_add(-weight, square);

    let d_avg = 0.5 * ((a + b) / 2.0 + (a_out + b_out) / 2.0); // [mm]
    let coupling_scale =
        multilayer_coupling_scale(winding.layers, d_avg, winding.vertical_pitch_mm(wire));

    Ok(BlendedInductance {
        square,
        circle_end,
        progress,
        weight,
        single_layer,
        coupling_scale,
        total: single_layer * coupling_scale,
    })
}

/// (H) inductance of any supported coil, and the method used to get it.
pub fn coil_inductance(
    coil: &CoilSpec,
    wire: &WireSpec,
    winding: &WindingSpec,
) -> Result<(f64, InductanceMethod)> {
    match *coil {
        CoilSpec::Circular { inner_diameter_mm } => Ok((
            inductance_circular_coil(inner_diameter_mm, wire, winding)?,
            InductanceMethod::FilamentSum,
        )),
        CoilSpec::RoundedRectangular {
            inner_a_mm,
            inner_b_mm,
            corner_radius_mm,
        } => match coil.circular_diameter_mm() {
            Some(d) => Ok((
                inductance_circular_coil(d, wire, winding)?,
                InductanceMethod::CircularCollapse,
            )),
            None => {
                let blend = inductance_rounded_rectangle_coil(
                    inner_a_mm,
                    inner_b_mm,
                    corner_radius_mm,
                    wire,
                    winding,
                )?;
                Ok((blend.total, InductanceMethod::MohanCircularBlend))
            }
        },
    }
}

//! End-to-end coil calculation: validated input record in, result record out.
use core::fmt;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::Result;
use crate::mesh::{
    layer_length_circular, layer_length_rounded_rectangle, radial_thickness, winding_height,
};
use crate::params::{CoilInput, Outline};
use crate::physics::coil::{coil_inductance, InductanceMethod};
use crate::physics::electrical::{dc_resistance, wire_mass};
use crate::MM_PER_M;

/// Outer dimensions of the finished winding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Envelope {
    Circular {
        outer_diameter_mm: f64,
        height_mm: f64,
    },
    RoundedRectangular {
        outer_a_mm: f64,
        outer_b_mm: f64,
        height_mm: f64,
    },
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Circular {
                outer_diameter_mm,
                height_mm,
            } => write!(f, "⌀ {outer_diameter_mm:.2} × {height_mm:.2} mm"),
            Self::RoundedRectangular {
                outer_a_mm,
                outer_b_mm,
                height_mm,
            } => write!(f, "{outer_a_mm:.2} × {outer_b_mm:.2} × {height_mm:.2} mm"),
        }
    }
}

/// Everything computed for one coil.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoilResult {
    pub envelope: Envelope,
    /// (m) conductor length over all turns and layers
    pub total_wire_length_m: f64,
    /// (ohm) at the input temperature
    pub dc_resistance_ohm: f64,
    /// (g)
    pub wire_mass_g: f64,
    /// (H)
    pub inductance_h: f64,
    pub method: InductanceMethod,
}

impl CoilResult {
    pub fn envelope_description(&self) -> String {
        self.envelope.to_string()
    }

    pub fn method_description(&self) -> String {
        self.method.to_string()
    }
}

/// Compute length, envelope, resistance, mass and inductance of a coil.
///
/// The input is validated first; the first out-of-range field aborts the
/// calculation with [`crate::Error::InvalidGeometry`]. Geometries that are
/// valid but numerically degenerate give zero inductance rather than an error.
pub fn calculate(input: &CoilInput) -> Result<CoilResult> {
    input.validate()?;

    let CoilInput {
        material,
        wire,
        coil,
        winding,
        temperature_c,
    } = *input;

    let wire_width = wire.width_mm();
    let pitch = winding.horizontal_pitch_mm(&wire);
    let build = radial_thickness(winding.turns, wire_width, winding.horizontal_spacing_mm);
    let height_mm = winding_height(
        winding.layers,
        wire.thickness_mm(),
        winding.vertical_spacing_mm,
    );

    let (layer_length_mm, envelope) = match coil.outline() {
        Outline::Circle { diameter_mm } => (
            layer_length_circular(diameter_mm, wire_width, pitch, winding.turns),
            Envelope::Circular {
                outer_diameter_mm: 2.0f64.mul_add(build, diameter_mm),
                height_mm,
            },
        ),
        Outline::RoundedRectangle {
            a_mm,
            b_mm,
            corner_radius_mm,
        } => (
            layer_length_rounded_rectangle(
                a_mm,
                b_mm,
                corner_radius_mm,
                wire_width,
                pitch,
                winding.turns,
            ),
            Envelope::RoundedRectangular {
                outer_a_mm: 2.0f64.mul_add(build, a_mm),
                outer_b_mm: 2.0f64.mul_add(build, b_mm),
                height_mm,
            },
        ),
    };

    // Every layer is taken to be as long as the first
    let total_length_mm = layer_length_mm * winding.layers as f64;
    let total_length_m = total_length_mm / MM_PER_M;

    let (inductance_h, method) = coil_inductance(&coil, &wire, &winding)?;
    debug!(
        ?method,
        turns = winding.turns,
        layers = winding.layers,
        "coil inductance evaluated"
    );

    let mat = material.material();
    let area_mm2 = wire.cross_section_area_mm2();
    let resistivity = mat.resistivity_at(temperature_c);
    let result = CoilResult {
        envelope,
        total_wire_length_m: total_length_m,
        dc_resistance_ohm: dc_resistance(resistivity, total_length_m, area_mm2),
        wire_mass_g: wire_mass(mat.density, area_mm2, total_length_mm),
        inductance_h,
        method,
    };
    trace!(?result, "coil calculation complete");

    Ok(result)
}

/// Evaluate many independent coils in parallel, e.g. for a parameter sweep.
///
/// Results are returned in input order, one per input, each validated on its own.
pub fn calculate_batch(inputs: &[CoilInput]) -> Vec<Result<CoilResult>> {
    inputs.par_iter().map(calculate).collect()
}

//! Input records for a coil calculation.
//!
//! All lengths are in millimeters. Records deserialize from any serde format, e.g.
//!
//! ```json
//! {
//!   "material": "copper",
//!   "wire": { "shape": "round", "diameter_mm": 0.5 },
//!   "coil": { "shape": "circular", "inner_diameter_mm": 10.0 },
//!   "winding": {
//!     "turns": 10, "layers": 1,
//!     "horizontal_spacing_mm": 0.1, "vertical_spacing_mm": 0.0
//!   }
//! }
//! ```
use core::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::materials::{MaterialName, REFERENCE_TEMPERATURE_C};

/// Conductor cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum WireSpec {
    Round { diameter_mm: f64 },
    Rectangular { width_mm: f64, thickness_mm: f64 },
}

impl WireSpec {
    /// (mm) extent in the radial (turn-to-turn) direction
    pub fn width_mm(&self) -> f64 {
        match *self {
            Self::Round { diameter_mm } => diameter_mm,
            Self::Rectangular { width_mm, .. } => width_mm,
        }
    }

    /// (mm) extent in the axial (layer-to-layer) direction
    pub fn thickness_mm(&self) -> f64 {
        match *self {
            Self::Round { diameter_mm } => diameter_mm,
            Self::Rectangular { thickness_mm, .. } => thickness_mm,
        }
    }

    /// (mm^2) conductor cross-section area
    pub fn cross_section_area_mm2(&self) -> f64 {
        match *self {
            Self::Round { diameter_mm } => PI * (diameter_mm / 2.0).powi(2),
            Self::Rectangular {
                width_mm,
                thickness_mm,
            } => width_mm * thickness_mm,
        }
    }

    /// (mm) radius of the round wire with the same cross-section area.
    ///
    /// This is the wire radius seen by the filament self-inductance term for either shape.
    pub fn effective_radius_mm(&self) -> f64 {
        match *self {
            Self::Round { diameter_mm } => diameter_mm / 2.0,
            Self::Rectangular { .. } => (self.cross_section_area_mm2() / PI).sqrt(),
        }
    }
}

/// Inner outline of the coil form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum CoilSpec {
    Circular {
        inner_diameter_mm: f64,
    },
    RoundedRectangular {
        inner_a_mm: f64,
        inner_b_mm: f64,
        #[serde(default)]
        corner_radius_mm: f64,
    },
}

/// Coil outline after applying the degenerate-shape rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outline {
    Circle {
        diameter_mm: f64,
    },
    /// Non-degenerate rounded rectangle, `2 corner_radius_mm < min(a_mm, b_mm)`
    RoundedRectangle {
        a_mm: f64,
        b_mm: f64,
        corner_radius_mm: f64,
    },
}

impl CoilSpec {
    /// Resolve the outline this coil form actually has.
    ///
    /// A rounded rectangle whose corners meet (`2R >= min(A, B)`) is a circle of
    /// diameter `min(A, B)` and gets handled as one.
    pub fn outline(&self) -> Outline {
        match *self {
            Self::Circular { inner_diameter_mm } => Outline::Circle {
                diameter_mm: inner_diameter_mm,
            },
            Self::RoundedRectangular {
                inner_a_mm,
                inner_b_mm,
                corner_radius_mm,
            } => {
                let min_side = inner_a_mm.min(inner_b_mm);
                if 2.0 * corner_radius_mm >= min_side {
                    Outline::Circle {
                        diameter_mm: min_side,
                    }
                } else {
                    Outline::RoundedRectangle {
                        a_mm: inner_a_mm,
                        b_mm: inner_b_mm,
                        corner_radius_mm,
                    }
                }
            }
        }
    }

    /// (mm) diameter of the circle this outline is equivalent to, if any.
    pub fn circular_diameter_mm(&self) -> Option<f64> {
        match self.outline() {
            Outline::Circle { diameter_mm } => Some(diameter_mm),
            Outline::RoundedRectangle { .. } => None,
        }
    }
}

/// Turn and layer arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindingSpec {
    /// Turns per layer
    pub turns: usize,
    pub layers: usize,
    /// (mm) gap between adjacent turns of a layer
    #[serde(default)]
    pub horizontal_spacing_mm: f64,
    /// (mm) gap between adjacent layers
    #[serde(default)]
    pub vertical_spacing_mm: f64,
}

impl WindingSpec {
    /// (mm) center-to-center distance between adjacent turns
    pub fn horizontal_pitch_mm(&self, wire: &WireSpec) -> f64 {
        wire.width_mm() + self.horizontal_spacing_mm
    }

    /// (mm) center-to-center distance between adjacent layers
    pub fn vertical_pitch_mm(&self, wire: &WireSpec) -> f64 {
        wire.thickness_mm() + self.vertical_spacing_mm
    }
}

/// Complete description of one coil calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoilInput {
    pub material: MaterialName,
    pub wire: WireSpec,
    pub coil: CoilSpec,
    pub winding: WindingSpec,
    /// (degC) conductor temperature for the resistance calc
    #[serde(default = "reference_temperature")]
    pub temperature_c: f64,
}

fn reference_temperature() -> f64 {
    REFERENCE_TEMPERATURE_C
}

impl CoilInput {
    /// Check every parameter, in the order a form would present them, and
    /// report the first one that is out of range.
    pub fn validate(&self) -> Result<()> {
        let w = &self.winding;
        require_at_least_one("winding.turns", w.turns)?;
        require_at_least_one("winding.layers", w.layers)?;

        match self.wire {
            WireSpec::Round { diameter_mm } => require_positive("wire.diameter_mm", diameter_mm)?,
            WireSpec::Rectangular {
                width_mm,
                thickness_mm,
            } => {
                require_positive("wire.width_mm", width_mm)?;
                require_positive("wire.thickness_mm", thickness_mm)?;
            }
        }

        match self.coil {
            CoilSpec::Circular { inner_diameter_mm } => {
                require_positive("coil.inner_diameter_mm", inner_diameter_mm)?
            }
            CoilSpec::RoundedRectangular {
                inner_a_mm,
                inner_b_mm,
                corner_radius_mm,
            } => {
                require_positive("coil.inner_a_mm", inner_a_mm)?;
                require_positive("coil.inner_b_mm", inner_b_mm)?;
                require_non_negative("coil.corner_radius_mm", corner_radius_mm)?;
            }
        }

        require_non_negative("winding.horizontal_spacing_mm", w.horizontal_spacing_mm)?;
        require_non_negative("winding.vertical_spacing_mm", w.vertical_spacing_mm)?;

        if !(self.temperature_c.is_finite() && self.temperature_c >= -273.15) {
            return Err(Error::InvalidGeometry {
                field: "temperature_c",
                requirement: "at least -273.15",
                value: self.temperature_c,
            });
        }

        Ok(())
    }
}

fn require_at_least_one(field: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(Error::InvalidGeometry {
            field,
            requirement: "greater than 0",
            value: value as f64,
        });
    }
    Ok(())
}

fn require_positive(field: &'static str, value: f64) -> Result<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(Error::InvalidGeometry {
            field,
            requirement: "greater than 0",
            value,
        });
    }
    Ok(())
}

fn require_non_negative(field: &'static str, value: f64) -> Result<()> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(Error::InvalidGeometry {
            field,
            requirement: "at least 0",
            value,
        });
    }
    Ok(())
}

//! Conductor material constants at the 20 degC reference temperature.
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// (degC) Temperature at which the tabulated constants apply
pub const REFERENCE_TEMPERATURE_C: f64 = 20.0;

/// Bulk properties of a winding conductor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    pub name: &'static str,
    /// (ohm-m) electrical resistivity at 20 degC
    pub resistivity: f64,
    /// (g/cm^3) mass density
    pub density: f64,
    /// (1/degC) linear temperature coefficient of resistivity around 20 degC
    pub temperature_coefficient: f64,
}

pub const COPPER: Material = Material {
    name: "Copper",
    resistivity: 1.724e-8,
    density: 8.96,
    temperature_coefficient: 0.00393,
};

pub const ALUMINUM: Material = Material {
    name: "Aluminum",
    resistivity: 2.82e-8,
    density: 2.70,
    temperature_coefficient: 0.00403,
};

pub const SILVER: Material = Material {
    name: "Silver",
    resistivity: 1.59e-8,
    density: 10.49,
    temperature_coefficient: 0.0038,
};

impl Material {
    /// (ohm-m) resistivity corrected linearly to `temperature_c`.
    ///
    /// Returns the tabulated value unchanged at the 20 degC reference.
    pub fn resistivity_at(&self, temperature_c: f64) -> f64 {
        let dt = temperature_c - REFERENCE_TEMPERATURE_C;
        self.resistivity * self.temperature_coefficient.mul_add(dt, 1.0)
    }
}

/// Key into the material table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialName {
    Copper,
    Aluminum,
    Silver,
}

impl MaterialName {
    pub const ALL: [MaterialName; 3] = [Self::Copper, Self::Aluminum, Self::Silver];

    pub fn material(self) -> &'static Material {
        match self {
            Self::Copper => &COPPER,
            Self::Aluminum => &ALUMINUM,
            Self::Silver => &SILVER,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Copper => "copper",
            Self::Aluminum => "aluminum",
            Self::Silver => "silver",
        }
    }
}

impl FromStr for MaterialName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownMaterial(s.to_owned()))
    }
}

impl fmt::Display for MaterialName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

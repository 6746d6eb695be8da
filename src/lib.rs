pub mod calc;
pub mod error;
pub mod materials;
pub mod math;
pub mod mesh;
pub mod params;
pub mod physics;

pub use calc::{calculate, calculate_batch, CoilResult, Envelope};
pub use error::{Error, Result};
pub use materials::{Material, MaterialName};
pub use params::{CoilInput, CoilSpec, Outline, WindingSpec, WireSpec};
pub use physics::coil::InductanceMethod;

/// (H/m) vacuum magnetic permeability, using the exact pre-2019 SI definition
/// $4 \pi \times 10^{-7}$.
pub const MU_0: f64 = 4e-7 * core::f64::consts::PI; // [H/m]

/// (mm) per (m)
pub(crate) const MM_PER_M: f64 = 1e3;

//! Electromagnetics calculations.
pub mod circular_filament;
pub mod coil;
pub mod electrical;
pub mod mohan;

pub use circular_filament::{
    inductance_circular_filaments, inductance_circular_filaments_par,
    mutual_inductance_circular_filaments, self_inductance_circular_filament,
};
pub use coil::{coil_inductance, multilayer_coupling_scale, BlendedInductance, InductanceMethod};
pub use mohan::inductance_mohan_rectangular_spiral;

//! Energy state estimation.
//!
//! Derives a physical/mental/spiritual state from the current time and,
//! optionally, a personal profile.

mod state;

pub use state::{estimate_energy_state, EnergyState3D, TimeBucket, Trend};

//! Parameters structure for the subsystem command layer

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Power scaling constants for each subsystem.
///
/// All constants shall be in `(0, 1]` and are read-only during a match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Scale applied to both sides of every tank drive demand.
    pub drive_power_factor: f64,

    /// Magnitude of the arm power used to raise or lower the arm.
    pub arm_power: f64,

    /// Magnitude of the intake power used to run the intake forward or in reverse.
    pub intake_power: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            drive_power_factor: 0.5,
            arm_power: 0.25,
            intake_power: 0.25,
        }
    }
}

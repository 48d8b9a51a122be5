//! Parameters for the autonomous routines

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Timing and power of the autonomous routines.
///
/// All times are measured from autonomous entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Power sent to both sides of the drivebase while driving, before the drive power factor is
    /// applied. Negative drives backwards.
    pub drive_power: f64,

    /// Time at which CrossLine stops driving.
    ///
    /// Units: seconds
    pub cross_line_drive_end_s: f64,

    /// Time at which CubeCrossLine stops raising the arm.
    ///
    /// Units: seconds
    pub arm_raise_end_s: f64,

    /// Time at which CubeCrossLine stops running the intake in reverse.
    ///
    /// Units: seconds
    pub intake_reverse_end_s: f64,

    /// Time at which CubeCrossLine stops driving.
    ///
    /// Units: seconds
    pub cube_drive_end_s: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            drive_power: -0.5,
            cross_line_drive_end_s: 4.0,
            arm_raise_end_s: 1.5,
            intake_reverse_end_s: 3.0,
            cube_drive_end_s: 7.0,
        }
    }
}

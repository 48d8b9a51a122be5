//! # Input device frames
//!
//! Raw device polling is performed outside the control core, which is fed one [`InputData`]
//! frame per tick. There is no buffering, the last frame read wins.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Axes read from the driver's controller.
///
/// Axis values are in `[-1, 1]`, with pushing the stick away from the driver being negative.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq)]
#[serde(default)]
pub struct DriverInput {
    /// Left stick Y axis, drives the left side of the drivebase.
    pub left_y: f64,

    /// Right stick Y axis, drives the right side of the drivebase.
    pub right_y: f64,
}

/// Buttons read from the operator's controller.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OperatorInput {
    /// Lower the arm
    pub lower: bool,

    /// Raise the arm
    pub raise: bool,

    /// Run the intake forward (eject)
    pub forward: bool,

    /// Run the intake in reverse (intake)
    pub reverse: bool,
}

/// One tick's worth of input from both devices.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq)]
pub struct InputData {
    pub driver: DriverInput,
    pub operator: OperatorInput,
}

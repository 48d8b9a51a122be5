//! Teleop input mapper
//!
//! Maps the driver's axes onto tank drive, and the operator's buttons onto the arm and intake.
//! Every subsystem receives exactly one command per tick.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod params;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use comms_if::eqpt::{
    input::{DriverInput, InputData, OperatorInput},
    motor::MotorDriver,
};
use util::maths::apply_deadband;

use crate::subsys::CmdLayer;

pub use params::Params;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct TeleopMapper {
    params: Params,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl TeleopMapper {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    /// Map one tick of input into subsystem commands.
    pub fn step<D: MotorDriver>(&self, input: &InputData, cmd: &mut CmdLayer<D>) {
        self.map_drive(&input.driver, cmd);
        Self::map_arm(&input.operator, cmd);
        Self::map_intake(&input.operator, cmd);
    }

    /// Stick forward reads negative but should drive the robot forward, hence the negation.
    fn map_drive<D: MotorDriver>(&self, driver: &DriverInput, cmd: &mut CmdLayer<D>) {
        let left = -apply_deadband(driver.left_y, self.params.deadband);
        let right = -apply_deadband(driver.right_y, self.params.deadband);

        // Avoid issuing -0.0 for a centred stick
        cmd.drive_tank(left + 0.0, right + 0.0);
    }

    /// Lower takes priority if both arm buttons are held.
    fn map_arm<D: MotorDriver>(operator: &OperatorInput, cmd: &mut CmdLayer<D>) {
        if operator.lower {
            cmd.arm_lower();
        } else if operator.raise {
            cmd.arm_raise();
        } else {
            cmd.arm_stop();
        }
    }

    /// Forward takes priority if both intake buttons are held.
    fn map_intake<D: MotorDriver>(operator: &OperatorInput, cmd: &mut CmdLayer<D>) {
        if operator.forward {
            cmd.intake_forward();
        } else if operator.reverse {
            cmd.intake_reverse();
        } else {
            cmd.intake_stop();
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

//! # CubeCrossLine routine
//!
//! Three phases, each checked every tick against the same gate:
//!
//! - raise the arm until `arm_raise_end_s`,
//! - run the intake in reverse until `intake_reverse_end_s`,
//! - drive backwards until `cube_drive_end_s`.
//!
//! The phases are not chained, each one ends at its own time regardless of the others.

use comms_if::eqpt::motor::MotorDriver;

use super::{ElapsedTimeGate, Params};
use crate::{clock::Clock, subsys::CmdLayer};

/// Step the routine for one tick.
pub(super) fn step<D, C>(gate: &ElapsedTimeGate<C>, params: &Params, cmd: &mut CmdLayer<D>)
where
    D: MotorDriver,
    C: Clock,
{
    // Arm
    if gate.has_elapsed(params.arm_raise_end_s) {
        cmd.arm_stop();
    } else {
        cmd.arm_raise();
    }

    // Intake
    if gate.has_elapsed(params.intake_reverse_end_s) {
        cmd.intake_stop();
    } else {
        cmd.intake_reverse();
    }

    // Drive
    if gate.has_elapsed(params.cube_drive_end_s) {
        cmd.drive_stop();
    } else {
        cmd.drive_tank(params.drive_power, params.drive_power);
    }
}

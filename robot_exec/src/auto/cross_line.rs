//! # CrossLine routine
//!
//! Drive backwards across the line, then stop for the rest of the period.

use comms_if::eqpt::motor::MotorDriver;

use super::{ElapsedTimeGate, Params};
use crate::{clock::Clock, subsys::CmdLayer};

/// Step the routine for one tick.
pub(super) fn step<D, C>(gate: &ElapsedTimeGate<C>, params: &Params, cmd: &mut CmdLayer<D>)
where
    D: MotorDriver,
    C: Clock,
{
    if gate.has_elapsed(params.cross_line_drive_end_s) {
        cmd.drive_stop();
    } else {
        cmd.drive_tank(params.drive_power, params.drive_power);
    }
}

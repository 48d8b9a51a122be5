//! # Robot library.
//!
//! The periodic control core of the robot. The [`robot_ctrl::RobotCtrl`] lifecycle controller is
//! driven once per tick by an external runtime and, depending on the current mode, runs either a
//! timed autonomous routine or maps operator input into subsystem commands.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Autonomous sequencer - time gated routines run during the autonomous period
pub mod auto;

/// Clock sources used to measure elapsed time
pub mod clock;

/// Data store - the executable's cycle-to-cycle state
pub mod data_store;

/// Robot control - the mode state machine which drives everything else
pub mod robot_ctrl;

/// Simulated motor driver - stands in for the motor controllers when running off-robot
pub mod sim_driver;

/// Parameters for the executable
pub mod params;

/// Subsystem command layer - power/stop primitives for the drivebase, arm and intake
pub mod subsys;

/// Telecommand processor - applies TCs from the runtime to the data store
pub mod tc_processor;

/// Teleop input mapper - converts controller input into subsystem commands
pub mod teleop;

#[cfg(test)]
pub(crate) mod test_util;

//! # Motor Equipment Commands
//!
//! The motor driver is an external collaborator which is responsible for inversion, brake/coast
//! behaviour and any follower wiring of the motor controllers. The control core only ever sends
//! it [`SubsystemCommand`]s.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// A driver which actuates subsystem commands on the motor controllers.
///
/// Execution is fire-and-forget: a driver must never fail back into the caller. Drivers are
/// responsible for clamping powers into `[-1, 1]`.
pub trait MotorDriver {
    /// Execute the given command.
    fn execute(&mut self, cmd: SubsystemCommand);
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// IDs of all actuators available to the robot
#[derive(Serialize, Deserialize, Debug, Hash, Eq, PartialEq, Copy, Clone)]
pub enum ActId {
    DrvLeft,
    DrvRight,
    Arm,
    Intake,
}

/// The independently commandable subsystems of the robot.
#[derive(Serialize, Deserialize, Debug, Hash, Eq, PartialEq, Copy, Clone)]
pub enum Subsystem {
    Drive,
    Arm,
    Intake,
}

/// A command to a single subsystem.
///
/// Powers are signed and normalised, nominally in `[-1, 1]`.
#[derive(Serialize, Deserialize, Debug, PartialEq, Copy, Clone)]
pub enum SubsystemCommand {
    /// Drive the left and right sides of the drivebase independently.
    DriveTank { left: f64, right: f64 },

    /// Stop the drivebase.
    DriveStop,

    /// Set the arm power. Positive lowers the arm, negative raises it.
    ArmSet(f64),

    /// Stop the arm.
    ArmStop,

    /// Set the intake power. Positive ejects (forward), negative intakes (reverse).
    IntakeSet(f64),

    /// Stop the intake.
    IntakeStop,
}

/// A demand on an individual actuator.
#[derive(Serialize, Deserialize, Debug, PartialEq, Copy, Clone)]
pub enum MotorDem {
    /// Signed normalised power
    Power(f64),

    /// Explicit stop
    Stop,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl SubsystemCommand {
    /// The subsystem this command targets.
    pub fn subsystem(&self) -> Subsystem {
        match self {
            SubsystemCommand::DriveTank { .. } | SubsystemCommand::DriveStop => Subsystem::Drive,
            SubsystemCommand::ArmSet(_) | SubsystemCommand::ArmStop => Subsystem::Arm,
            SubsystemCommand::IntakeSet(_) | SubsystemCommand::IntakeStop => Subsystem::Intake,
        }
    }

    /// Returns true if this is a stop command.
    pub fn is_stop(&self) -> bool {
        matches!(
            self,
            SubsystemCommand::DriveStop | SubsystemCommand::ArmStop | SubsystemCommand::IntakeStop
        )
    }

    /// Split the command into the demands on each actuator it drives.
    pub fn act_dems(&self) -> Vec<(ActId, MotorDem)> {
        match *self {
            SubsystemCommand::DriveTank { left, right } => vec![
                (ActId::DrvLeft, MotorDem::Power(left)),
                (ActId::DrvRight, MotorDem::Power(right)),
            ],
            SubsystemCommand::DriveStop => vec![
                (ActId::DrvLeft, MotorDem::Stop),
                (ActId::DrvRight, MotorDem::Stop),
            ],
            SubsystemCommand::ArmSet(p) => vec![(ActId::Arm, MotorDem::Power(p))],
            SubsystemCommand::ArmStop => vec![(ActId::Arm, MotorDem::Stop)],
            SubsystemCommand::IntakeSet(p) => vec![(ActId::Intake, MotorDem::Power(p))],
            SubsystemCommand::IntakeStop => vec![(ActId::Intake, MotorDem::Stop)],
        }
    }
}

impl<D: MotorDriver + ?Sized> MotorDriver for Box<D> {
    fn execute(&mut self, cmd: SubsystemCommand) {
        (**self).execute(cmd)
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_drive_tank_splits_sides() {
        let dems = SubsystemCommand::DriveTank {
            left: -0.25,
            right: 0.5,
        }
        .act_dems();

        assert_eq!(
            dems,
            vec![
                (ActId::DrvLeft, MotorDem::Power(-0.25)),
                (ActId::DrvRight, MotorDem::Power(0.5))
            ]
        );
    }

    #[test]
    fn test_subsystem_and_stop() {
        assert_eq!(SubsystemCommand::DriveStop.subsystem(), Subsystem::Drive);
        assert_eq!(SubsystemCommand::ArmSet(0.25).subsystem(), Subsystem::Arm);
        assert_eq!(SubsystemCommand::IntakeStop.subsystem(), Subsystem::Intake);

        assert!(SubsystemCommand::ArmStop.is_stop());
        assert!(!SubsystemCommand::IntakeSet(0.0).is_stop());
    }
}

//! Implementations for the CmdLayer state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::trace;
use serde::Serialize;

// Internal
use super::Params;
use comms_if::eqpt::motor::{MotorDriver, SubsystemCommand};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Subsystem command layer.
///
/// Owns the motor driver. Every command is forwarded to the driver immediately, nothing is
/// buffered between ticks.
pub struct CmdLayer<D: MotorDriver> {
    pub(crate) params: Params,

    driver: D,

    dems: SubsystemDems,
}

/// The last demand sent to each subsystem.
///
/// Powers are the values sent to the driver, i.e. after scaling. A stopped subsystem has zero
/// power and its stopped flag raised.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct SubsystemDems {
    pub drive_left: f64,
    pub drive_right: f64,
    pub drive_stopped: bool,

    pub arm: f64,
    pub arm_stopped: bool,

    pub intake: f64,
    pub intake_stopped: bool,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<D: MotorDriver> CmdLayer<D> {
    /// Create a new command layer around the given driver.
    pub fn new(params: Params, driver: D) -> Self {
        Self {
            params,
            driver,
            dems: SubsystemDems::default(),
        }
    }

    /// The last demand sent to each subsystem.
    pub fn dems(&self) -> SubsystemDems {
        self.dems
    }

    /// The power constants in use.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The underlying motor driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Stop every subsystem, drive first.
    pub fn stop_all(&mut self) {
        self.drive_stop();
        self.arm_stop();
        self.intake_stop();
    }

    /// Record and forward a command to the driver.
    pub(crate) fn issue(&mut self, cmd: SubsystemCommand) {
        trace!("{:?}", cmd);

        self.dems.update(&cmd);
        self.driver.execute(cmd);
    }
}

impl SubsystemDems {
    fn update(&mut self, cmd: &SubsystemCommand) {
        match *cmd {
            SubsystemCommand::DriveTank { left, right } => {
                self.drive_left = left;
                self.drive_right = right;
                self.drive_stopped = false;
            }
            SubsystemCommand::DriveStop => {
                self.drive_left = 0.0;
                self.drive_right = 0.0;
                self.drive_stopped = true;
            }
            SubsystemCommand::ArmSet(p) => {
                self.arm = p;
                self.arm_stopped = false;
            }
            SubsystemCommand::ArmStop => {
                self.arm = 0.0;
                self.arm_stopped = true;
            }
            SubsystemCommand::IntakeSet(p) => {
                self.intake = p;
                self.intake_stopped = false;
            }
            SubsystemCommand::IntakeStop => {
                self.intake = 0.0;
                self.intake_stopped = true;
            }
        }
    }
}

/// Motor controllers power up idle, so every subsystem starts stopped.
impl Default for SubsystemDems {
    fn default() -> Self {
        Self {
            drive_left: 0.0,
            drive_right: 0.0,
            drive_stopped: true,
            arm: 0.0,
            arm_stopped: true,
            intake: 0.0,
            intake_stopped: true,
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

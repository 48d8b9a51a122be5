//! Intake commands

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use super::CmdLayer;
use comms_if::eqpt::motor::{MotorDriver, SubsystemCommand};

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<D: MotorDriver> CmdLayer<D> {
    /// Set the intake power directly. Positive ejects, negative intakes.
    pub fn intake_set(&mut self, power: f64) {
        self.issue(SubsystemCommand::IntakeSet(power))
    }

    /// Run the intake forward (eject) at the configured intake power.
    pub fn intake_forward(&mut self) {
        self.intake_set(self.params.intake_power)
    }

    /// Run the intake in reverse (intake) at the configured intake power.
    pub fn intake_reverse(&mut self) {
        self.intake_set(-self.params.intake_power)
    }

    pub fn intake_stop(&mut self) {
        self.issue(SubsystemCommand::IntakeStop)
    }
}

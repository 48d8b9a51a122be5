//! Arm commands
//!
//! The arm's sign convention is positive to lower and negative to raise. This depends on the
//! gearbox and motor orientation and must be kept as is.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use super::CmdLayer;
use comms_if::eqpt::motor::{MotorDriver, SubsystemCommand};

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<D: MotorDriver> CmdLayer<D> {
    /// Set the arm power directly.
    pub fn arm_set(&mut self, power: f64) {
        self.issue(SubsystemCommand::ArmSet(power))
    }

    /// Lower the arm at the configured arm power.
    pub fn arm_lower(&mut self) {
        self.arm_set(self.params.arm_power)
    }

    /// Raise the arm at the configured arm power.
    pub fn arm_raise(&mut self) {
        self.arm_set(-self.params.arm_power)
    }

    pub fn arm_stop(&mut self) {
        self.issue(SubsystemCommand::ArmStop)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{subsys::Params, test_util::RecordingDriver};

    #[test]
    fn test_arm_sign_convention() {
        let (driver, log) = RecordingDriver::new();
        let mut cmd = CmdLayer::new(
            Params {
                arm_power: 0.3,
                ..Default::default()
            },
            driver,
        );

        cmd.arm_lower();
        cmd.arm_raise();
        cmd.arm_stop();

        assert_eq!(
            *log.borrow(),
            vec![
                SubsystemCommand::ArmSet(0.3),
                SubsystemCommand::ArmSet(-0.3),
                SubsystemCommand::ArmStop
            ]
        );
    }
}

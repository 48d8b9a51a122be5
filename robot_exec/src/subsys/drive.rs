//! Drivebase commands

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use super::CmdLayer;
use comms_if::eqpt::motor::{MotorDriver, SubsystemCommand};

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<D: MotorDriver> CmdLayer<D> {
    /// Drive the left and right sides of the drivebase at the given powers.
    ///
    /// Both powers are scaled by the drive power factor. Magnitudes are not limited here, the
    /// driver is responsible for clamping.
    pub fn drive_tank(&mut self, left: f64, right: f64) {
        let factor = self.params.drive_power_factor;

        self.issue(SubsystemCommand::DriveTank {
            left: left * factor,
            right: right * factor,
        })
    }

    /// Stop the drivebase. Whether the wheels brake or coast is driver configuration.
    pub fn drive_stop(&mut self) {
        self.issue(SubsystemCommand::DriveStop)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{subsys::Params, test_util::RecordingDriver};

    #[test]
    fn test_drive_tank_scaling() {
        let (driver, log) = RecordingDriver::new();
        let mut cmd = CmdLayer::new(Params::default(), driver);

        cmd.drive_tank(-0.5, 1.0);
        cmd.drive_tank(2.0, 0.0);

        assert_eq!(
            *log.borrow(),
            vec![
                SubsystemCommand::DriveTank {
                    left: -0.25,
                    right: 0.5
                },
                // No clamping in the command layer
                SubsystemCommand::DriveTank {
                    left: 1.0,
                    right: 0.0
                },
            ]
        );
    }
}

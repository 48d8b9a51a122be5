//! # Data Store

use comms_if::{
    eqpt::{input::InputData, motor::MotorDriver},
    tc::RobotMode,
};

use crate::{clock::Clock, robot_ctrl::RobotCtrl};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Global data store for the executable.
pub struct DataStore<D: MotorDriver, C: Clock + Clone> {
    // Cycle management
    /// Number of cycles already executed
    pub num_cycles: u128,

    /// True if this cycle falls on a 1Hz boundary
    pub is_1_hz_cycle: bool,

    // Runtime inputs
    /// Mode the runtime wants the robot to be in. Holds its value until the next mode TC.
    pub desired_mode: RobotMode,

    /// Latest driver and operator input. Last read wins.
    pub inputs: InputData,

    // RobotCtrl
    pub robot_ctrl: RobotCtrl<D, C>,

    // Monitoring Counters
    /// Number of consecutive cycle overruns
    pub num_consec_cycle_overruns: u64,
}

// ---------------------------------------------------------------------------
// IMPLS
// ---------------------------------------------------------------------------

impl<D: MotorDriver, C: Clock + Clone> DataStore<D, C> {
    /// Create a new data store around the given controller.
    ///
    /// The robot is held disabled until told otherwise.
    pub fn new(robot_ctrl: RobotCtrl<D, C>) -> Self {
        Self {
            num_cycles: 0,
            is_1_hz_cycle: false,
            desired_mode: RobotMode::Disabled,
            inputs: InputData::default(),
            robot_ctrl,
            num_consec_cycle_overruns: 0,
        }
    }

    /// Perform actions required at the start of a cycle.
    ///
    /// Sets the 1Hz cycle flag. Inputs are not cleared, they hold until the next input TC.
    pub fn cycle_start(&mut self, cycle_frequency_hz: f64) {
        let cycles_per_s = (cycle_frequency_hz.round() as u128).max(1);

        self.is_1_hz_cycle = self.num_cycles % cycles_per_s == 0;
    }

    /// Perform actions required at the end of a cycle.
    pub fn cycle_end(&mut self) {
        self.num_cycles += 1;
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

//! # Robot Executable Parameters
//!
//! This module provide parameters for the robot executable, loaded from `robot_exec.toml`.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

use crate::{auto, sim_driver, subsys, teleop};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RobotExecParams {
    pub exec: ExecParams,

    pub subsys: subsys::Params,

    pub auto: auto::Params,

    pub teleop: teleop::Params,

    #[serde(default)]
    pub sim_driver: sim_driver::Params,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecParams {
    /// Target period of one cycle.
    ///
    /// Units: seconds
    pub cycle_period_s: f64,

    /// Number of consecutive cycle overruns after which the executable disables the robot and
    /// aborts.
    pub max_consec_cycle_overruns: u64,
}

impl Default for ExecParams {
    fn default() -> Self {
        Self {
            cycle_period_s: 0.02,
            max_consec_cycle_overruns: 500,
        }
    }
}

impl ExecParams {
    /// Number of cycles per second
    pub fn cycle_frequency_hz(&self) -> f64 {
        1.0 / self.cycle_period_s
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use comms_if::eqpt::motor::ActId;

    #[test]
    fn test_shipped_params() {
        let params: RobotExecParams =
            util::params::from_str(include_str!("../../params/robot_exec.toml")).unwrap();

        assert_eq!(params.exec.cycle_period_s, 0.02);
        assert_eq!(params.exec.cycle_frequency_hz().round(), 50.0);
        assert_eq!(params.exec.max_consec_cycle_overruns, 500);
        assert_eq!(params.subsys, subsys::Params::default());
        assert_eq!(params.auto, auto::Params::default());
        assert_eq!(params.teleop, teleop::Params::default());
        assert_eq!(params.sim_driver.inverted, vec![ActId::DrvRight, ActId::Arm]);
    }

    #[test]
    fn test_missing_table() {
        let res: Result<RobotExecParams, _> = util::params::from_str("[exec]\ncycle_period_s = 0.1\n");

        assert!(res.is_err());
    }
}

//! # Simulated Motor Driver
//!
//! Stands in for the motor controllers when the executable is run off-robot. Each command is split
//! into per-actuator demands, powers are limited to `[-1, 1]` and the configured inversion is
//! applied before the result is held as the actuator's output.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

mod params;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::collections::HashMap;

use comms_if::eqpt::motor::{ActId, MotorDem, MotorDriver, SubsystemCommand};
use log::debug;
use util::maths::clamp;

pub use params::*;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Motor driver which keeps the applied output of each actuator in memory.
#[derive(Debug, Default)]
pub struct SimMotorDriver {
    params: Params,

    /// Applied output of each actuator, absent until first commanded.
    outputs: HashMap<ActId, MotorDem>,

    num_cmds: u64,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl SimMotorDriver {
    pub fn new(params: Params) -> Self {
        Self {
            params,
            outputs: HashMap::new(),
            num_cmds: 0,
        }
    }

    /// The demand currently applied to the given actuator.
    pub fn output(&self, act: ActId) -> Option<MotorDem> {
        self.outputs.get(&act).copied()
    }

    /// The power currently applied to the given actuator, zero if it is stopped or has never been
    /// commanded.
    pub fn power(&self, act: ActId) -> f64 {
        match self.output(act) {
            Some(MotorDem::Power(p)) => p,
            Some(MotorDem::Stop) | None => 0.0,
        }
    }

    /// Number of commands executed so far.
    pub fn num_cmds(&self) -> u64 {
        self.num_cmds
    }

    fn apply(&self, act: ActId, dem: MotorDem) -> MotorDem {
        match dem {
            MotorDem::Power(p) => {
                let limited = clamp(&p, &-1.0, &1.0);

                if self.params.inverted.contains(&act) {
                    MotorDem::Power(-limited)
                } else {
                    MotorDem::Power(limited)
                }
            }
            MotorDem::Stop => MotorDem::Stop,
        }
    }
}

impl MotorDriver for SimMotorDriver {
    fn execute(&mut self, cmd: SubsystemCommand) {
        self.num_cmds += 1;

        for (act, dem) in cmd.act_dems() {
            let applied = self.apply(act, dem);
            debug!("{:?} <- {:?}", act, applied);
            self.outputs.insert(act, applied);
        }
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

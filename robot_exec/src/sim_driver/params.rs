//! Parameters for the simulated motor driver

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use comms_if::eqpt::motor::ActId;
use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Actuators which are mounted such that a positive power turns them backwards.
    pub inverted: Vec<ActId>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            inverted: vec![ActId::DrvRight, ActId::Arm],
        }
    }
}

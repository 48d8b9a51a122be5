//! # Telecommand processor module
//!
//! The telecommand processor handles the TCs coming from the match runtime.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::debug;

// Internal
use crate::{clock::Clock, data_store::DataStore};
use comms_if::{eqpt::motor::MotorDriver, tc::Tc};

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Execute a telecommand.
///
/// Mutates the datastore, the effect is picked up when the controller is next stepped.
pub fn exec<D, C>(ds: &mut DataStore<D, C>, tc: &Tc)
where
    D: MotorDriver,
    C: Clock + Clone,
{
    // Handle different Tcs
    match tc {
        Tc::Mode(m) => {
            debug!("Recieved Mode({:?}) command", m);
            ds.desired_mode = *m;
        }
        Tc::AutoSelect(key) => {
            debug!("Recieved AutoSelect(\"{}\") command", key);
            ds.robot_ctrl.select_routine(key.as_str());
        }
        Tc::DriverInput(i) => ds.inputs.driver = *i,
        Tc::OperatorInput(i) => ds.inputs.operator = *i,
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

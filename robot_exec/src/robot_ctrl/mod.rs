//! Robot control module
//!
//! The [`RobotCtrl`] lifecycle controller is the robot's mode state machine. The external runtime
//! decides which mode the robot is in, the controller only reacts to the entry and periodic
//! callbacks for each mode:
//!
//! | Mode         | Entry                                | Periodic                  |
//! |--------------|--------------------------------------|---------------------------|
//! | `Disabled`   | stop all subsystems                  | nothing                   |
//! | `Autonomous` | stop all, restart gate, latch routine| step the latched routine  |
//! | `Teleop`     | stop all subsystems                  | map operator input        |
//! | `Test`       | stop all subsystems                  | nothing                   |

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use state::*;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during RobotCtrl operation.
///
/// Control itself never fails, only the archiving around it can.
#[derive(Debug, thiserror::Error)]
pub enum RobotCtrlError {
    #[error("Could not initialise the RobotCtrl archives: {0}")]
    ArchiveInitError(util::archive::ArchiveError),
}

//! # Autonomous module
//!
//! This module implements the autonomous sequencer. A routine is selected once, on entry to
//! autonomous, and then stepped every tick. Routines never block: every phase of a routine is
//! gated on an [`ElapsedTimeGate`] which is restarted on autonomous entry, and re-evaluated on
//! every tick.
//!
//! Available routines:
//!
//! - `DoNothing` - Keep the drivebase stopped for the whole period.
//! - `CrossLine` - Drive backwards for a fixed time then stop.
//! - `CubeCrossLine` - Raise the arm, eject the cube, and drive backwards, each phase ending at its
//!   own time measured from the start of the period.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

mod cross_line;
mod cube_cross_line;
mod gate;
mod params;
mod routine;

// ------------------------------------------------------------------------------------------------
// EXPORTS
// ------------------------------------------------------------------------------------------------

pub use gate::{ElapsedTimeGate, GateState};
pub use params::Params;
pub use routine::{AutonomousRoutine, RoutineChooser};

//! Subsystem command layer
//!
//! The [`CmdLayer`] is the only route from the control core to the motor driver. It provides
//! stateless power/stop primitives for each subsystem, scaling by the configured power constants,
//! and remembers the last demand sent to each subsystem.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod arm;
mod drive;
mod intake;
mod params;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use params::*;
pub use state::*;

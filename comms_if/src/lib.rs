//! # Communications interface crate.
//!
//! Provides all common interfaces between the robot control core and the collaborators which
//! surround it (the match runtime, input devices and motor drivers).

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

pub mod tc;

/// Command and input definitions for equipment (motor drivers and input devices)
pub mod eqpt;

//! Parameters structure for the teleop mapper

use serde::{Deserialize, Serialize};

/// Parameters for teleop input mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Axis inputs with a magnitude less than or equal to this are treated as zero, suppressing
    /// controller drift.
    pub deadband: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self { deadband: 0.01 }
    }
}

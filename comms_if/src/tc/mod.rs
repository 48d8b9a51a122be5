//! # Telecommand module
//!
//! Telecommands are the messages delivered to the robot executable by the external match runtime.
//! They carry mode transitions, the autonomous routine selection and input device frames.
//!
//! A TC is a JSON object with a `type` string and a `payload`, for example:
//!
//! ```json
//! {"type": "MODE", "payload": "Autonomous"}
//! {"type": "AUTO_SELECT", "payload": "CrossLine"}
//! {"type": "DRIVER_INPUT", "payload": {"left_y": -0.5, "right_y": -0.5}}
//! {"type": "OPERATOR_INPUT", "payload": {"lower": true}}
//! ```

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};
use serde_json::{self, Value};
use thiserror::Error;

// Internal
use crate::eqpt::input::{DriverInput, OperatorInput};

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// The robot's top level operating mode.
///
/// Transitions between modes are driven by the external runtime, never by the robot itself.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Copy, Clone, Hash)]
pub enum RobotMode {
    Disabled,
    Autonomous,
    Teleop,
    Test,
}

/// A telecommand.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", content = "payload")]
pub enum Tc {
    /// Transition the robot into the given mode.
    #[serde(rename = "MODE")]
    Mode(RobotMode),

    /// Select the autonomous routine to run on the next autonomous entry.
    #[serde(rename = "AUTO_SELECT")]
    AutoSelect(String),

    /// New driver controller frame.
    #[serde(rename = "DRIVER_INPUT")]
    DriverInput(DriverInput),

    /// New operator controller frame.
    #[serde(rename = "OPERATOR_INPUT")]
    OperatorInput(OperatorInput),
}

/// Possible parsing errors.
#[derive(Debug, Error)]
pub enum TcParseError {
    #[error("TC contains invalid JSON: {0}")]
    InvalidJson(serde_json::Error),

    #[error("TC has an invalid type ({0})")]
    InvalidType(String),

    #[error("TC of type {0} is expected to have a payload but it doesn't")]
    MissingPayload(String),

    #[error("TC of type {0} has an invalid payload: {1}")]
    InvalidPayload(String, serde_json::Error),
}

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// All recognised TC type strings.
const TC_TYPES: [&str; 4] = ["MODE", "AUTO_SELECT", "DRIVER_INPUT", "OPERATOR_INPUT"];

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Tc {
    /// Parse a new TC from a JSON packet
    pub fn from_json(json_str: &str) -> Result<Self, TcParseError> {
        // Parse the JSON string into a value
        let val: Value = serde_json::from_str(json_str).map_err(TcParseError::InvalidJson)?;

        // Check the type before handing over to serde so that errors are more helpful than
        // "unknown variant"
        let tc_type = match val["type"].as_str() {
            Some(s) => s.to_string(),
            None => {
                return Err(TcParseError::InvalidType(String::from(
                    "Expected \"type\" to be a string",
                )))
            }
        };

        if !TC_TYPES.contains(&tc_type.as_str()) {
            return Err(TcParseError::InvalidType(format!(
                "{} is not a recognised TC type",
                tc_type
            )));
        }

        // Every TC carries a payload
        if val["payload"].is_null() {
            return Err(TcParseError::MissingPayload(tc_type));
        }

        serde_json::from_value(val).map_err(|e| TcParseError::InvalidPayload(tc_type, e))
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_mode() {
        let tc = Tc::from_json(r#"{"type": "MODE", "payload": "Autonomous"}"#).unwrap();
        assert_eq!(tc, Tc::Mode(RobotMode::Autonomous));
    }

    #[test]
    fn test_parse_inputs_with_defaults() {
        let tc = Tc::from_json(r#"{"type": "OPERATOR_INPUT", "payload": {"raise": true}}"#)
            .unwrap();
        assert_eq!(
            tc,
            Tc::OperatorInput(OperatorInput {
                raise: true,
                ..Default::default()
            })
        );

        let tc = Tc::from_json(
            r#"{"type": "DRIVER_INPUT", "payload": {"left_y": 0.5, "right_y": -0.5}}"#,
        )
        .unwrap();
        assert_eq!(
            tc,
            Tc::DriverInput(DriverInput {
                left_y: 0.5,
                right_y: -0.5
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Tc::from_json("{not json"),
            Err(TcParseError::InvalidJson(_))
        ));
        assert!(matches!(
            Tc::from_json(r#"{"type": "LAUNCH", "payload": 1}"#),
            Err(TcParseError::InvalidType(_))
        ));
        assert!(matches!(
            Tc::from_json(r#"{"type": "MODE"}"#),
            Err(TcParseError::MissingPayload(_))
        ));
        assert!(matches!(
            Tc::from_json(r#"{"type": "MODE", "payload": "Sleeping"}"#),
            Err(TcParseError::InvalidPayload(_, _))
        ));
    }
}

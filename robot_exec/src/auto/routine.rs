//! # Routine selection and dispatch

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::fmt::Display;

use comms_if::eqpt::motor::MotorDriver;
use log::warn;
use serde::{Deserialize, Serialize};

use super::{cross_line, cube_cross_line, ElapsedTimeGate, Params};
use crate::{clock::Clock, subsys::CmdLayer};

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// The routines which can be run during the autonomous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AutonomousRoutine {
    DoNothing,
    CrossLine,
    CubeCrossLine,
}

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Holds the routine selection made by the operator.
///
/// The selection is a free-form key supplied by the runtime, and is only resolved into a routine
/// when [`RoutineChooser::resolve`] is called on autonomous entry.
#[derive(Debug, Clone)]
pub struct RoutineChooser {
    default: AutonomousRoutine,
    selected: Option<String>,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl AutonomousRoutine {
    /// Every available routine.
    pub const ALL: [AutonomousRoutine; 3] = [
        AutonomousRoutine::DoNothing,
        AutonomousRoutine::CrossLine,
        AutonomousRoutine::CubeCrossLine,
    ];

    /// The selection key of this routine.
    pub fn key(&self) -> &'static str {
        match self {
            AutonomousRoutine::DoNothing => "DoNothing",
            AutonomousRoutine::CrossLine => "CrossLine",
            AutonomousRoutine::CubeCrossLine => "CubeCrossLine",
        }
    }

    /// Find the routine with the given selection key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.key() == key)
    }

    /// Step the routine for one tick.
    pub fn step<D, C>(&self, gate: &ElapsedTimeGate<C>, params: &Params, cmd: &mut CmdLayer<D>)
    where
        D: MotorDriver,
        C: Clock,
    {
        match self {
            AutonomousRoutine::DoNothing => cmd.drive_stop(),
            AutonomousRoutine::CrossLine => cross_line::step(gate, params, cmd),
            AutonomousRoutine::CubeCrossLine => cube_cross_line::step(gate, params, cmd),
        }
    }
}

impl Default for AutonomousRoutine {
    fn default() -> Self {
        AutonomousRoutine::DoNothing
    }
}

impl Display for AutonomousRoutine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AutonomousRoutine::{}", self.key())
    }
}

impl RoutineChooser {
    /// Create a chooser which resolves to `default` until a selection is made.
    pub fn new(default: AutonomousRoutine) -> Self {
        Self {
            default,
            selected: None,
        }
    }

    /// Record a new selection, replacing any previous one.
    pub fn select<S: Into<String>>(&mut self, key: S) {
        self.selected = Some(key.into());
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Resolve the current selection into a routine.
    ///
    /// An unrecognised selection falls back to `DoNothing`.
    pub fn resolve(&self) -> AutonomousRoutine {
        match self.selected {
            None => self.default,
            Some(ref key) => match AutonomousRoutine::from_key(key) {
                Some(r) => r,
                None => {
                    warn!(
                        "Unrecognised autonomous selection \"{}\", falling back to {}",
                        key,
                        AutonomousRoutine::DoNothing
                    );
                    AutonomousRoutine::DoNothing
                }
            },
        }
    }
}

impl Default for RoutineChooser {
    fn default() -> Self {
        Self::new(AutonomousRoutine::DoNothing)
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        subsys,
        test_util::{drain, CmdLog, ManualClock, RecordingDriver},
    };
    use comms_if::eqpt::motor::SubsystemCommand::{self, *};

    struct Fixture {
        clock: ManualClock,
        gate: ElapsedTimeGate<ManualClock>,
        cmd: CmdLayer<RecordingDriver>,
        log: CmdLog,
    }

    impl Fixture {
        fn new() -> Self {
            let clock = ManualClock::default();
            let mut gate = ElapsedTimeGate::new(clock.clone());
            let (driver, log) = RecordingDriver::new();

            gate.reset();
            gate.start();

            Self {
                clock,
                gate,
                cmd: CmdLayer::new(subsys::Params::default(), driver),
                log,
            }
        }

        /// Step the routine at time `t` and return the commands it issued.
        fn tick(&mut self, routine: AutonomousRoutine, t: f64) -> Vec<SubsystemCommand> {
            self.clock.set(t);
            routine.step(&self.gate, &Params::default(), &mut self.cmd);
            drain(&self.log)
        }
    }

    const BACKWARDS: SubsystemCommand = DriveTank {
        left: -0.25,
        right: -0.25,
    };

    #[test]
    fn test_cross_line_ticks() {
        let mut f = Fixture::new();

        for &t in &[0.0, 1.0, 3.0, 3.999] {
            assert_eq!(f.tick(AutonomousRoutine::CrossLine, t), vec![BACKWARDS]);
        }
        for &t in &[4.0, 5.0, 15.0] {
            assert_eq!(f.tick(AutonomousRoutine::CrossLine, t), vec![DriveStop]);
        }
    }

    #[test]
    fn test_cube_cross_line_phases() {
        let mut f = Fixture::new();
        let r = AutonomousRoutine::CubeCrossLine;

        for &t in &[0.0, 1.0, 1.49] {
            assert_eq!(
                f.tick(r, t),
                vec![ArmSet(-0.25), IntakeSet(-0.25), BACKWARDS]
            );
        }
        for &t in &[1.5, 2.0, 2.99] {
            assert_eq!(f.tick(r, t), vec![ArmStop, IntakeSet(-0.25), BACKWARDS]);
        }
        for &t in &[3.0, 5.0, 6.99] {
            assert_eq!(f.tick(r, t), vec![ArmStop, IntakeStop, BACKWARDS]);
        }
        for &t in &[7.0, 10.0, 15.0] {
            assert_eq!(f.tick(r, t), vec![ArmStop, IntakeStop, DriveStop]);
        }
    }

    #[test]
    fn test_do_nothing_only_stops() {
        let mut f = Fixture::new();

        for &t in &[0.0, 4.0, 7.0, 15.0] {
            assert_eq!(f.tick(AutonomousRoutine::DoNothing, t), vec![DriveStop]);
        }
    }

    #[test]
    fn test_chooser_resolution() {
        let mut chooser = RoutineChooser::default();
        assert_eq!(chooser.resolve(), AutonomousRoutine::DoNothing);
        assert!(chooser.selected_key().is_none());

        chooser.select("CubeCrossLine");
        assert_eq!(chooser.resolve(), AutonomousRoutine::CubeCrossLine);

        chooser.select("DropCubeAndDance");
        assert_eq!(chooser.resolve(), AutonomousRoutine::DoNothing);

        // Unknown selections fall back to DoNothing even with a different default
        let mut chooser = RoutineChooser::new(AutonomousRoutine::CrossLine);
        assert_eq!(chooser.resolve(), AutonomousRoutine::CrossLine);
        chooser.select("");
        assert_eq!(chooser.resolve(), AutonomousRoutine::DoNothing);
    }

    #[test]
    fn test_keys_round_trip() {
        for r in AutonomousRoutine::ALL.iter() {
            assert_eq!(AutonomousRoutine::from_key(r.key()), Some(*r));
        }
    }
}

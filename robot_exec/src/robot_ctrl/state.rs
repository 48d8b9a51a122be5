//! Implementations for the RobotCtrl state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info};
use serde::Serialize;

// Internal
use super::RobotCtrlError;
use crate::{
    auto::{self, AutonomousRoutine, ElapsedTimeGate, RoutineChooser},
    clock::Clock,
    subsys::{self, CmdLayer, SubsystemDems},
    teleop::{self, TeleopMapper},
};
use comms_if::{
    eqpt::{input::InputData, motor::MotorDriver},
    tc::RobotMode,
};
use util::{
    archive::{ArchiveError, Archived, Archiver},
    session::Session,
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Robot lifecycle controller.
///
/// Owns the subsystem command layer (and through it the motor driver), so nothing can command an
/// actuator except through the controller.
pub struct RobotCtrl<D: MotorDriver, C: Clock + Clone> {
    cmd: CmdLayer<D>,

    clock: C,

    /// Gate restarted on every autonomous entry, shared by all phases of the routine.
    gate: ElapsedTimeGate<C>,

    auto_params: auto::Params,

    teleop: TeleopMapper,

    chooser: RoutineChooser,

    /// Current mode, `None` until the runtime delivers the first mode.
    mode: Option<RobotMode>,

    /// Routine latched on autonomous entry, `None` outside of autonomous.
    routine: Option<AutonomousRoutine>,

    num_mode_entries: u64,

    report: StatusReport,
    arch_report: Archiver,
    arch_dems: Archiver,
}

/// Status report for RobotCtrl processing.
#[derive(Clone, Copy, Default, Serialize, Debug, PartialEq)]
pub struct StatusReport {
    /// Controller clock time at which the report was made.
    ///
    /// Units: seconds
    pub time_s: f64,

    pub mode: Option<RobotMode>,

    pub routine: Option<AutonomousRoutine>,

    /// Time since autonomous entry, zero outside of autonomous.
    ///
    /// Units: seconds
    pub auto_elapsed_s: f64,

    /// Number of mode entries since startup.
    pub num_mode_entries: u64,
}

/// Archive record of the subsystem demands.
#[derive(Serialize)]
struct DemsRecord {
    time_s: f64,
    drive_left: f64,
    drive_right: f64,
    drive_stopped: bool,
    arm: f64,
    arm_stopped: bool,
    intake: f64,
    intake_stopped: bool,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<D: MotorDriver, C: Clock + Clone> RobotCtrl<D, C> {
    /// Create a new controller.
    ///
    /// No mode is active and nothing is commanded until the first call to [`RobotCtrl::step`]
    /// or [`RobotCtrl::enter_mode`].
    pub fn new(
        subsys_params: subsys::Params,
        auto_params: auto::Params,
        teleop_params: teleop::Params,
        driver: D,
        clock: C,
    ) -> Self {
        Self {
            cmd: CmdLayer::new(subsys_params, driver),
            gate: ElapsedTimeGate::new(clock.clone()),
            clock,
            auto_params,
            teleop: TeleopMapper::new(teleop_params),
            chooser: RoutineChooser::default(),
            mode: None,
            routine: None,
            num_mode_entries: 0,
            report: StatusReport::default(),
            arch_report: Archiver::default(),
            arch_dems: Archiver::default(),
        }
    }

    /// Open the archives for this controller inside the session.
    ///
    /// Until this is called archiving is a no-op.
    pub fn init_archives(&mut self, session: &Session) -> Result<(), RobotCtrlError> {
        self.arch_report = Archiver::from_path(session, "robot_ctrl/status_report.csv")
            .map_err(RobotCtrlError::ArchiveInitError)?;
        self.arch_dems = Archiver::from_path(session, "robot_ctrl/dems.csv")
            .map_err(RobotCtrlError::ArchiveInitError)?;

        Ok(())
    }

    /// Record the operator's routine selection. It is only read on the next autonomous entry.
    pub fn select_routine<S: Into<String>>(&mut self, key: S) {
        self.chooser.select(key);
        debug!("Autonomous selection set to {:?}", self.chooser.selected_key());
    }

    /// Step the controller for one tick.
    ///
    /// If `desired` differs from the current mode the entry action for `desired` is run first,
    /// then the periodic action of the (new) mode.
    pub fn step(&mut self, desired: RobotMode, input: &InputData) -> StatusReport {
        if self.mode != Some(desired) {
            self.enter_mode(desired);
        }

        self.periodic(input);

        self.report
    }

    /// Run the entry action for `mode`.
    ///
    /// Every entry begins by stopping all subsystems, so no demand survives a mode boundary.
    pub fn enter_mode(&mut self, mode: RobotMode) {
        info!("RobotCtrl mode change: {:?} -> {:?}", self.mode, mode);

        self.cmd.stop_all();
        self.routine = None;

        if let RobotMode::Autonomous = mode {
            self.gate.reset();
            self.gate.start();

            let routine = self.chooser.resolve();
            info!("Running {}", routine);
            self.routine = Some(routine);
        }

        self.mode = Some(mode);
        self.num_mode_entries += 1;

        self.update_report();
    }

    /// Run the periodic action for the current mode.
    pub fn periodic(&mut self, input: &InputData) {
        match self.mode {
            Some(RobotMode::Autonomous) => self.routine.unwrap_or_default().step(
                &self.gate,
                &self.auto_params,
                &mut self.cmd,
            ),
            Some(RobotMode::Teleop) => self.teleop.step(input, &mut self.cmd),
            Some(RobotMode::Disabled) | Some(RobotMode::Test) | None => (),
        }

        self.update_report();
    }

    pub fn mode(&self) -> Option<RobotMode> {
        self.mode
    }

    pub fn routine(&self) -> Option<AutonomousRoutine> {
        self.routine
    }

    pub fn report(&self) -> StatusReport {
        self.report
    }

    /// The last demand sent to each subsystem.
    pub fn dems(&self) -> SubsystemDems {
        self.cmd.dems()
    }

    pub fn cmd_layer(&self) -> &CmdLayer<D> {
        &self.cmd
    }

    fn update_report(&mut self) {
        self.report = StatusReport {
            time_s: self.clock.now_s(),
            mode: self.mode,
            routine: self.routine,
            auto_elapsed_s: match self.mode {
                Some(RobotMode::Autonomous) => self.gate.elapsed_s(),
                _ => 0.0,
            },
            num_mode_entries: self.num_mode_entries,
        };
    }
}

impl<D: MotorDriver, C: Clock + Clone> Archived for RobotCtrl<D, C> {
    fn write(&mut self) -> Result<(), ArchiveError> {
        let dems = self.cmd.dems();

        self.arch_report.serialise(self.report)?;
        self.arch_dems.serialise(DemsRecord {
            time_s: self.report.time_s,
            drive_left: dems.drive_left,
            drive_right: dems.drive_right,
            drive_stopped: dems.drive_stopped,
            arm: dems.arm,
            arm_stopped: dems.arm_stopped,
            intake: dems.intake,
            intake_stopped: dems.intake_stopped,
        })?;

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_util::{drain, CmdLog, ManualClock, RecordingDriver};
    use comms_if::eqpt::{
        input::{DriverInput, OperatorInput},
        motor::SubsystemCommand::{self, *},
    };

    const STOP_ALL: [SubsystemCommand; 3] = [DriveStop, ArmStop, IntakeStop];

    const BACKWARDS: SubsystemCommand = DriveTank {
        left: -0.25,
        right: -0.25,
    };

    fn new_ctrl() -> (RobotCtrl<RecordingDriver, ManualClock>, ManualClock, CmdLog) {
        let clock = ManualClock::default();
        let (driver, log) = RecordingDriver::new();

        let ctrl = RobotCtrl::new(
            subsys::Params::default(),
            auto::Params::default(),
            teleop::Params::default(),
            driver,
            clock.clone(),
        );

        (ctrl, clock, log)
    }

    fn idle() -> InputData {
        InputData::default()
    }

    /// Run an autonomous period with the given selection and return the commands from each tick.
    fn run_auto(selection: Option<&str>, ticks_s: &[f64]) -> Vec<Vec<SubsystemCommand>> {
        let (mut ctrl, clock, log) = new_ctrl();

        if let Some(s) = selection {
            ctrl.select_routine(s);
        }

        ctrl.step(RobotMode::Disabled, &idle());
        drain(&log);

        ticks_s
            .iter()
            .map(|&t| {
                clock.set(t);
                ctrl.step(RobotMode::Autonomous, &idle());
                drain(&log)
            })
            .collect()
    }

    #[test]
    fn test_no_commands_before_first_mode() {
        let (mut ctrl, _clock, log) = new_ctrl();

        ctrl.periodic(&idle());

        assert!(log.borrow().is_empty());
        assert_eq!(ctrl.mode(), None);
        assert_eq!(ctrl.report().num_mode_entries, 0);
    }

    #[test]
    fn test_disabled_entry_stops_everything() {
        let (mut ctrl, _clock, log) = new_ctrl();

        ctrl.step(RobotMode::Disabled, &idle());
        assert_eq!(drain(&log), STOP_ALL.to_vec());

        // Disabled periodic does nothing
        ctrl.step(RobotMode::Disabled, &idle());
        assert!(drain(&log).is_empty());
        assert_eq!(ctrl.report().num_mode_entries, 1);
    }

    #[test]
    fn test_teleop_entry_stops_before_mapping() {
        let (mut ctrl, _clock, log) = new_ctrl();

        let input = InputData {
            driver: DriverInput {
                left_y: 0.5,
                right_y: -0.5,
            },
            operator: OperatorInput::default(),
        };

        ctrl.step(RobotMode::Teleop, &input);

        let mut expected = STOP_ALL.to_vec();
        expected.extend_from_slice(&[
            DriveTank {
                left: -0.25,
                right: 0.25,
            },
            ArmStop,
            IntakeStop,
        ]);
        assert_eq!(drain(&log), expected);

        // The next tick only maps input
        ctrl.step(RobotMode::Teleop, &input);
        assert_eq!(drain(&log), expected[3..].to_vec());
    }

    #[test]
    fn test_leaving_teleop_cancels_demands() {
        let (mut ctrl, _clock, log) = new_ctrl();

        let input = InputData {
            driver: DriverInput {
                left_y: -1.0,
                right_y: -1.0,
            },
            operator: OperatorInput {
                raise: true,
                reverse: true,
                ..Default::default()
            },
        };

        ctrl.step(RobotMode::Teleop, &input);
        assert!(!ctrl.dems().drive_stopped);
        assert_eq!(ctrl.dems().arm, -0.25);
        drain(&log);

        // Input is still held but disabled must not pass it through
        ctrl.step(RobotMode::Disabled, &input);
        assert_eq!(drain(&log), STOP_ALL.to_vec());
        assert_eq!(ctrl.dems(), SubsystemDems::default());
    }

    #[test]
    fn test_cross_line_scenario() {
        let ticks = run_auto(Some("CrossLine"), &[0.0, 1.0, 3.0, 4.0, 5.0]);

        let mut first = STOP_ALL.to_vec();
        first.push(BACKWARDS);

        assert_eq!(ticks[0], first);
        assert_eq!(ticks[1], vec![BACKWARDS]);
        assert_eq!(ticks[2], vec![BACKWARDS]);
        assert_eq!(ticks[3], vec![DriveStop]);
        assert_eq!(ticks[4], vec![DriveStop]);
    }

    #[test]
    fn test_gate_restarts_on_each_autonomous_entry() {
        let (mut ctrl, clock, log) = new_ctrl();
        ctrl.select_routine("CrossLine");

        clock.set(0.0);
        ctrl.step(RobotMode::Autonomous, &idle());
        clock.set(5.0);
        ctrl.step(RobotMode::Autonomous, &idle());
        assert_eq!(drain(&log).last(), Some(&DriveStop));

        clock.set(6.0);
        ctrl.step(RobotMode::Disabled, &idle());
        clock.set(20.0);
        let report = ctrl.step(RobotMode::Autonomous, &idle());

        assert_eq!(drain(&log).last(), Some(&BACKWARDS));
        assert_eq!(report.auto_elapsed_s, 0.0);
        assert_eq!(report.routine, Some(AutonomousRoutine::CrossLine));
    }

    #[test]
    fn test_routine_latched_at_entry() {
        let (mut ctrl, clock, log) = new_ctrl();
        ctrl.select_routine("CrossLine");

        ctrl.step(RobotMode::Autonomous, &idle());
        ctrl.select_routine("CubeCrossLine");

        clock.set(1.0);
        ctrl.step(RobotMode::Autonomous, &idle());

        assert_eq!(ctrl.routine(), Some(AutonomousRoutine::CrossLine));
        assert_eq!(drain(&log).last(), Some(&BACKWARDS));
    }

    #[test]
    fn test_unknown_selection_matches_do_nothing() {
        let ticks_s = [0.0, 0.02, 1.5, 4.0, 7.0, 15.0];

        let unknown = run_auto(Some("SpinInCircles"), &ticks_s);
        let do_nothing = run_auto(Some("DoNothing"), &ticks_s);
        let unselected = run_auto(None, &ticks_s);

        assert_eq!(unknown, do_nothing);
        assert_eq!(unselected, do_nothing);
        assert_eq!(do_nothing[1], vec![DriveStop]);
    }

    #[test]
    fn test_cube_cross_line_report() {
        let (mut ctrl, clock, _log) = new_ctrl();
        ctrl.select_routine("CubeCrossLine");

        clock.set(10.0);
        ctrl.step(RobotMode::Autonomous, &idle());
        clock.set(12.0);
        let report = ctrl.step(RobotMode::Autonomous, &idle());

        assert_eq!(report.mode, Some(RobotMode::Autonomous));
        assert_eq!(report.routine, Some(AutonomousRoutine::CubeCrossLine));
        assert_eq!(report.auto_elapsed_s, 2.0);
        assert_eq!(report.time_s, 12.0);

        let dems = ctrl.dems();
        assert!(dems.arm_stopped);
        assert_eq!(dems.intake, -0.25);
        assert_eq!((dems.drive_left, dems.drive_right), (-0.25, -0.25));
    }

    #[test]
    fn test_test_mode_is_idle() {
        let (mut ctrl, _clock, log) = new_ctrl();

        let input = InputData {
            operator: OperatorInput {
                lower: true,
                ..Default::default()
            },
            ..Default::default()
        };

        ctrl.step(RobotMode::Test, &input);
        assert_eq!(drain(&log), STOP_ALL.to_vec());

        ctrl.step(RobotMode::Test, &input);
        assert!(drain(&log).is_empty());
        assert_eq!(ctrl.routine(), None);
    }

    #[test]
    fn test_explicit_reentry_runs_entry_again() {
        let (mut ctrl, _clock, log) = new_ctrl();

        ctrl.enter_mode(RobotMode::Disabled);
        ctrl.enter_mode(RobotMode::Disabled);

        assert_eq!(drain(&log).len(), 6);
        assert_eq!(ctrl.report().num_mode_entries, 2);
    }
}

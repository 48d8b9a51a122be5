//! Test doubles for the motor driver and clock collaborators.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use comms_if::eqpt::motor::{MotorDriver, SubsystemCommand};

use crate::clock::Clock;

/// Shared log of every command a [`RecordingDriver`] has received.
pub type CmdLog = Rc<RefCell<Vec<SubsystemCommand>>>;

/// Motor driver which records every command it is given.
pub struct RecordingDriver {
    log: CmdLog,
}

/// Clock which only moves when told to.
#[derive(Clone, Default)]
pub struct ManualClock {
    now_s: Rc<Cell<f64>>,
}

impl RecordingDriver {
    /// Create a new driver, returning a handle to its log.
    pub fn new() -> (Self, CmdLog) {
        let log = CmdLog::default();
        (Self { log: log.clone() }, log)
    }
}

impl MotorDriver for RecordingDriver {
    fn execute(&mut self, cmd: SubsystemCommand) {
        self.log.borrow_mut().push(cmd)
    }
}

impl ManualClock {
    pub fn set(&self, now_s: f64) {
        self.now_s.set(now_s)
    }
}

impl Clock for ManualClock {
    fn now_s(&self) -> f64 {
        self.now_s.get()
    }
}

/// Take every command logged so far, leaving the log empty.
pub fn drain(log: &CmdLog) -> Vec<SubsystemCommand> {
    log.borrow_mut().drain(..).collect()
}

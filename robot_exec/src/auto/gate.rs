//! # Elapsed-time gate
//!
//! A restartable stopwatch which answers "has this much time passed since I was started?". Used
//! to sequence autonomous phases across ticks without ever blocking.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Serialize;

use crate::clock::Clock;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ElapsedTimeGate<C: Clock> {
    clock: C,
    state: GateState,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GateState {
    /// Not counting, nothing has elapsed.
    Idle,

    /// Counting from the given clock time.
    Running { start_s: f64 },
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl<C: Clock> ElapsedTimeGate<C> {
    /// Create a new, idle, gate.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            state: GateState::Idle,
        }
    }

    /// Clear any elapsed time, returning the gate to idle.
    pub fn reset(&mut self) {
        self.state = GateState::Idle;
    }

    /// Begin counting from now.
    ///
    /// Starting an already running gate restarts it.
    pub fn start(&mut self) {
        self.state = GateState::Running {
            start_s: self.clock.now_s(),
        };
    }

    /// Returns true if at least `threshold_s` seconds have passed since the gate was started.
    ///
    /// An idle gate never elapses.
    pub fn has_elapsed(&self, threshold_s: f64) -> bool {
        match self.state {
            GateState::Idle => false,
            GateState::Running { start_s } => self.clock.now_s() - start_s >= threshold_s,
        }
    }

    /// Seconds since the gate was started, or zero if idle.
    pub fn elapsed_s(&self) -> f64 {
        match self.state {
            GateState::Idle => 0.0,
            GateState::Running { start_s } => self.clock.now_s() - start_s,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, GateState::Running { .. })
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_util::ManualClock;

    #[test]
    fn test_idle_never_elapses() {
        let clock = ManualClock::default();
        let gate = ElapsedTimeGate::new(clock.clone());

        clock.set(1000.0);

        assert!(!gate.is_running());
        assert!(!gate.has_elapsed(0.0));
        assert!(!gate.has_elapsed(1.0));
        assert_eq!(gate.elapsed_s(), 0.0);
    }

    #[test]
    fn test_elapsed_is_monotonic() {
        let clock = ManualClock::default();
        let mut gate = ElapsedTimeGate::new(clock.clone());

        clock.set(10.0);
        gate.reset();
        gate.start();

        assert!(gate.has_elapsed(0.0));
        assert!(!gate.has_elapsed(1.5));

        clock.set(11.5);
        assert!(gate.has_elapsed(1.5));
        assert!(!gate.has_elapsed(3.0));

        // Repeated queries with different thresholds don't change the answer
        for _ in 0..3 {
            clock.set(13.0);
            assert!(gate.has_elapsed(3.0));
            assert!(gate.has_elapsed(1.5));
            assert!(!gate.has_elapsed(7.0));
        }

        clock.set(100.0);
        assert!(gate.has_elapsed(1.5));
        assert!(gate.has_elapsed(3.0));
        assert!(gate.has_elapsed(7.0));
        assert_eq!(gate.elapsed_s(), 90.0);
    }

    #[test]
    fn test_reset_clears_elapsed() {
        let clock = ManualClock::default();
        let mut gate = ElapsedTimeGate::new(clock.clone());

        gate.start();
        clock.set(5.0);
        assert!(gate.has_elapsed(4.0));

        gate.reset();
        assert_eq!(gate.state(), GateState::Idle);
        assert!(!gate.has_elapsed(4.0));

        gate.start();
        assert_eq!(gate.state(), GateState::Running { start_s: 5.0 });
        assert!(!gate.has_elapsed(4.0));
    }
}

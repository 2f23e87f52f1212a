//! Start/stop/clear controller around a [`SingleRun`].
//!
//! The controller collects the emitted points and events. At most one run is
//! active; starting a new one discards the previous run and its history.

use super::single_run::{SimEvent, SimPoint, SingleRun};
use rand::Rng;
use tracing::{debug, trace};

/// How the last run left the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunEnd {
    pub complete: bool,
    pub drawn: u32,
}

impl RunEnd {
    fn of(run: &SingleRun) -> Self {
        Self {
            complete: run.is_complete(),
            drawn: run.drawn(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Replay {
    active: Option<SingleRun>,
    ended: Option<RunEnd>,
    points: Vec<SimPoint>,
    events: Vec<SimEvent>,
}

impl Replay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin `run`, cancelling whatever was running before.
    pub fn start(&mut self, run: SingleRun) {
        self.clear();
        debug!(horizon = run.horizon(), "replay started");
        self.active = Some(run);
    }

    /// Halt the active run, keeping what it emitted so far.
    pub fn stop(&mut self) {
        if let Some(run) = self.active.take() {
            debug!(drawn = run.drawn(), "replay stopped");
            self.ended = Some(RunEnd::of(&run));
        }
    }

    /// Halt the active run and forget its history.
    pub fn clear(&mut self) {
        self.stop();
        self.ended = None;
        self.points.clear();
        self.events.clear();
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Advance the active run by one draw. Returns whether it is still running.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let Some(run) = self.active.as_mut() else {
            return false;
        };
        let outcome = run.step(rng);
        if let Some(point) = outcome.point {
            trace!(n = point.n, luck = point.success_probability, "replay point");
            self.points.push(point);
        }
        self.events.extend(outcome.events);

        if outcome.done {
            let end = RunEnd::of(run);
            self.active = None;
            self.ended = Some(end);
            debug!(drawn = end.drawn, complete = end.complete, "replay finished");
            return false;
        }
        true
    }

    /// Tick until the active run finishes. Returns the number of ticks taken.
    pub fn run_to_end<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u32 {
        let mut ticks = 0;
        while self.is_running() {
            self.tick(rng);
            ticks += 1;
        }
        ticks
    }

    /// Completion and draw count of the last run, once it finished or was
    /// stopped. Holds even when the run emitted no points.
    pub fn ended(&self) -> Option<RunEnd> {
        self.ended
    }

    pub fn points(&self) -> &[SimPoint] {
        &self.points
    }

    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }
}

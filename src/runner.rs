//! Frame scheduler
//!
//! Wraps a [`GameSession`] with a [`SimulationClock`] and a time source.
//! Each host frame runs exactly one tick; the host keeps requesting frames
//! while [`FrameStatus::Continue`] comes back.

use crate::platform::{InputSource, InputState, ManualTime, TimeSource};
use crate::sim::{GameEvent, GameSession, SimulationClock};

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Stopped,
}

/// Drives a session from a time source
#[derive(Debug)]
pub struct Runner<T: TimeSource> {
    session: GameSession,
    clock: SimulationClock,
    input: InputState,
    time: T,
    frames: u64,
}

impl<T: TimeSource> Runner<T> {
    pub fn new(session: GameSession, time: T) -> Self {
        let clock = SimulationClock::new(session.tuning());
        Self {
            session,
            clock,
            input: InputState::default(),
            time,
            frames: 0,
        }
    }

    /// Feed one source's button state, timestamped now
    pub fn press(&mut self, source: InputSource, down: bool) -> bool {
        let now = self.time.now();
        self.press_at(source, down, now)
    }

    /// Feed one source's button state with a host timestamp.
    ///
    /// Returns whether this press started a run.
    pub fn press_at(&mut self, source: InputSource, down: bool, now: f64) -> bool {
        let pressed = self.input.set(source, down);
        let started = self.session.press(pressed);
        if started {
            self.clock.reset(now);
        }
        started
    }

    /// Run one frame at the time source's current time
    pub fn frame(&mut self) -> FrameStatus {
        let now = self.time.now();
        self.frame_at(now)
    }

    /// Run one frame with a host timestamp
    pub fn frame_at(&mut self, now: f64) -> FrameStatus {
        if !self.session.is_active() {
            return FrameStatus::Stopped;
        }

        let dt = self.clock.on_frame(now);
        self.session.tick(dt);
        self.frames += 1;

        if self.session.is_active() {
            FrameStatus::Continue
        } else {
            FrameStatus::Stopped
        }
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.session.drain_events()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn time(&self) -> &T {
        &self.time
    }

    /// Frames that actually ticked
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Runner<ManualTime> {
    /// Headless loop at a fixed frame period.
    ///
    /// `policy` decides the keyboard button each frame from the session state.
    /// Stops early once the session goes inactive. Returns frames ticked.
    pub fn run_simulated(
        &mut self,
        max_frames: u64,
        frame_period: f64,
        mut policy: impl FnMut(&GameSession) -> bool,
    ) -> u64 {
        let start = self.frames;
        for _ in 0..max_frames {
            let down = policy(&self.session);
            self.press(InputSource::Keyboard, down);
            self.time.advance(frame_period);
            if self.frame() == FrameStatus::Stopped {
                break;
            }
        }
        self.frames - start
    }
}

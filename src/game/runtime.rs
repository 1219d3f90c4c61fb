//! Session runtime
//!
//! Owns one run of the game from start to stop: the state machine around the
//! road simulation, the frame-rate cap on simulation work, and the wiring of
//! input and sound cues. Rendering stays outside - the main loop draws
//! whatever the session currently holds.

use macroquad::prelude::get_time;

use crate::audio::SoundBank;
use crate::input::{action_pressed, Action};
use crate::profile::{CarKind, LevelKind};

use super::road::{RoadSimulation, StepSignal, StopReason};

/// Where a session is in its one-way lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Built but not yet begun
    Idle,
    /// Frame loop is live
    Running,
    /// Terminal: a fresh session rebuilds everything
    Stopped,
}

/// Cap on how often simulation work runs, independent of how often the host
/// presents frames.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FpsLimit {
    Fps30,
    #[default]
    Fps60,
    Unlocked,
}

impl FpsLimit {
    /// Target seconds per simulated frame (None = every presented frame).
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }
}

/// One run: simulation plus the session-scoped bookkeeping around it.
pub struct GameSession {
    pub car: CarKind,
    pub level: LevelKind,
    sim: RoadSimulation,
    phase: SessionPhase,
    fps_limit: FpsLimit,
    /// Wall-clock time of the last simulated frame
    last_frame: f64,
    stop_reason: Option<StopReason>,
}

impl GameSession {
    pub fn new(car: CarKind, level: LevelKind) -> Self {
        Self {
            car,
            level,
            sim: RoadSimulation::new(car, level),
            phase: SessionPhase::Idle,
            fps_limit: FpsLimit::default(),
            last_frame: 0.0,
            stop_reason: None,
        }
    }

    /// Idle -> Running: kick off the engine/music cues and the clock.
    pub fn begin(&mut self, sounds: &SoundBank) {
        if self.phase != SessionPhase::Idle {
            return;
        }
        sounds.music.play();
        sounds.starting.play();
        sounds.idle.play();
        self.last_frame = get_time();
        self.phase = SessionPhase::Running;
    }

    /// Run one host frame: poll input, maybe step the simulation.
    ///
    /// Simulation work is throttled to the FPS cap; a frame arriving too
    /// early only re-presents the current state.
    pub fn frame(&mut self, sounds: &SoundBank) {
        if self.phase != SessionPhase::Running {
            return;
        }

        if action_pressed(Action::SteerLeft) {
            self.sim.move_left();
        }
        if action_pressed(Action::SteerRight) {
            self.sim.move_right();
        }
        if action_pressed(Action::Horn) {
            sounds.horn.play();
        }
        if action_pressed(Action::Quit) {
            self.stop(StopReason::Quit, sounds);
            return;
        }

        let now = get_time();
        if let Some(target) = self.fps_limit.frame_time() {
            if now - self.last_frame < target {
                return;
            }
        }
        let dt = (now - self.last_frame) as f32;
        self.last_frame = now;

        match self.sim.step(dt) {
            StepSignal::Continue => {}
            StepSignal::Stop(StopReason::Collision) => {
                sounds.collision.play();
                self.stop(StopReason::Collision, sounds);
            }
            StepSignal::Stop(reason) => self.stop(reason, sounds),
        }
    }

    /// Running -> Stopped, one-way. Looped cues go quiet; the collision cue
    /// keeps ringing if it was just triggered.
    fn stop(&mut self, reason: StopReason, sounds: &SoundBank) {
        self.phase = SessionPhase::Stopped;
        self.stop_reason = Some(reason);
        sounds.pause_all_but_collision();
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn is_stopped(&self) -> bool {
        self.phase == SessionPhase::Stopped
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    pub fn score(&self) -> u32 {
        self.sim.score()
    }

    /// Read access for the renderer.
    pub fn simulation(&self) -> &RoadSimulation {
        &self.sim
    }
}

//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Player movement mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    /// Ground-bound: gravity plus a discrete jump
    #[default]
    Cube,
    /// Free flight: lift/gravity balance, velocity capped
    Ship,
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    /// Waiting for the first press
    Idle,
    /// Active gameplay (deaths respawn instantly)
    Running,
    /// Level finished, waiting for a press to run again
    Complete,
}

/// Things that happened during a tick, drained by the host for UI/audio
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameEvent {
    Started,
    /// Carries the new attempt number
    Died { attempt: u32 },
    ModeChanged { mode: Mode },
    Completed { attempts: u32 },
}

/// The player entity (plain data, see [`reset_player`])
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner in screen space; x never changes
    pub pos: Vec2,
    /// Vertical velocity (units/tick, negative = up)
    pub vel_y: f32,
    /// Cosmetic rotation in degrees
    pub rotation: f32,
    pub mode: Mode,
}

impl Player {
    /// Initial pose: grounded cube at the anchor
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_x, tuning.ground_top()),
            vel_y: 0.0,
            rotation: 0.0,
            mode: Mode::Cube,
        }
    }

    /// Bottom edge in screen space
    #[inline]
    pub fn bottom(&self, tuning: &Tuning) -> f32 {
        self.pos.y + tuning.player_size
    }
}

/// Restore the initial pose in place
pub fn reset_player(player: &mut Player, tuning: &Tuning) {
    *player = Player::spawn(tuning);
}

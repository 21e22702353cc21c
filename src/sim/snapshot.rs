//! Read-only render snapshot
//!
//! Everything a renderer or HUD needs for one frame, copied out of the
//! session so the host never holds a borrow across its draw calls.

use serde::Serialize;

use super::level::ObstacleKind;
use super::session::GameSession;
use super::state::{GamePhase, Mode};

/// Player as drawn (screen space, top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerView {
    pub x: f32,
    pub y: f32,
    /// Degrees, clockwise
    pub rotation: f32,
    pub size: f32,
    pub mode: Mode,
}

/// An obstacle inside the drawable range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstacleView {
    /// Screen-relative x (world x minus distance)
    pub x: f32,
    pub kind: ObstacleKind,
}

/// One frame of render/HUD data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub player: PlayerView,
    pub obstacles: Vec<ObstacleView>,
    /// Level progress in [0, 1]
    pub progress: f32,
    pub attempts: u32,
    pub distance: f32,
    pub phase: GamePhase,
    pub ground_y: f32,
    /// Background grid scroll (in (-spacing, 0])
    pub grid_offset: f32,
}

impl RenderSnapshot {
    pub fn capture(session: &GameSession) -> Self {
        let tuning = session.tuning();
        let player = session.player();
        let distance = session.distance();

        let obstacles = session
            .level()
            .visible(distance, tuning)
            .map(|(x, o)| ObstacleView { x, kind: o.kind })
            .collect();

        Self {
            player: PlayerView {
                x: player.pos.x,
                y: player.pos.y,
                rotation: player.rotation,
                size: tuning.player_size,
                mode: player.mode,
            },
            obstacles,
            progress: session.progress().clamp(0.0, 1.0),
            attempts: session.attempts(),
            distance,
            phase: session.phase(),
            ground_y: tuning.ground_y,
            grid_offset: -(distance % tuning.grid_spacing),
        }
    }
}

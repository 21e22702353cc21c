//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through the `dt` handed to `GameSession::tick`
//! - Input is read once per tick
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod level;
pub mod physics;
pub mod session;
pub mod snapshot;
pub mod state;

pub use clock::SimulationClock;
pub use collision::{CollisionOutcome, check};
pub use level::{Level, Obstacle, ObstacleKind};
pub use physics::{advance, hull_breached};
pub use session::GameSession;
pub use snapshot::{ObstacleView, PlayerView, RenderSnapshot};
pub use state::{GameEvent, GamePhase, Mode, Player, reset_player};

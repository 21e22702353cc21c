//! Neon Dash - A side-scrolling cube/ship obstacle runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, session life-cycle)
//! - `runner`: Frame scheduler driving the simulation from a time source
//! - `platform`: Input source merging and time sources
//! - `tuning`: Data-driven game balance
//! - `web`: wasm32 host binding

pub mod error;
pub mod platform;
pub mod runner;
pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::LoadError;
pub use runner::{FrameStatus, Runner};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Downward acceleration applied once per tick
    pub const GRAVITY: f32 = 0.98;
    /// Vertical velocity set when a grounded cube jumps
    pub const JUMP_FORCE: f32 = -16.0;
    /// Upward acceleration per tick while a ship is held
    pub const SHIP_LIFT: f32 = -0.9;
    /// Fraction of gravity a released ship falls with
    pub const SHIP_GRAVITY_SCALE: f32 = 0.6;
    /// Ship vertical speed cap (both directions)
    pub const SHIP_MAX_SPEED: f32 = 8.0;
    /// Ship tilt in degrees per unit of vertical velocity
    pub const SHIP_TILT: f32 = 2.0;
    /// Cube spin while airborne (degrees/second)
    pub const CUBE_SPIN_RATE: f32 = 450.0;

    /// Horizontal scroll speed (units/second)
    pub const SPEED: f32 = 450.0;
    /// Ground line (screen y, grows downward)
    pub const GROUND_Y: f32 = 350.0;
    /// Player box edge length
    pub const PLAYER_SIZE: f32 = 30.0;
    /// Fixed horizontal anchor of the player on screen
    pub const PLAYER_X: f32 = 150.0;

    /// Broad phase window (relative position, exclusive bounds)
    pub const BROAD_PHASE_MIN: f32 = 100.0;
    pub const BROAD_PHASE_MAX: f32 = 200.0;
    /// Spike footprint width
    pub const SPIKE_WIDTH: f32 = 30.0;
    /// A spike only kills when the player's bottom edge is within this of the ground
    pub const SPIKE_CLEARANCE: f32 = 25.0;

    /// Frame gaps above this are treated as a stall (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Step used in place of a stalled frame (seconds)
    pub const NOMINAL_DT: f32 = 1.0 / 60.0;

    /// Visible play area width
    pub const VIEW_WIDTH: f32 = 800.0;
    /// Obstacles stay in snapshots this far outside the view
    pub const CULL_MARGIN: f32 = 100.0;
    /// Background grid spacing
    pub const GRID_SPACING: f32 = 50.0;

    /// Default level length
    pub const LEVEL_LENGTH: f32 = 15_000.0;
}

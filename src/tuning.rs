//! Data-driven game balance
//!
//! Every physics, collision, clock and view constant lives here so a level
//! designer can tweak feel without recompiling. Missing JSON fields fall back
//! to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::LoadError;

/// Tunable constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Cube physics ===
    /// Per-tick downward acceleration
    pub gravity: f32,
    /// Velocity applied when a grounded cube jumps (negative = up)
    pub jump_force: f32,
    /// Airborne spin rate (degrees/second)
    pub spin_rate: f32,

    // === Ship physics ===
    /// Per-tick acceleration while held (negative = up)
    pub ship_lift: f32,
    /// Fraction of gravity applied while released
    pub ship_gravity_scale: f32,
    /// Vertical speed cap
    pub ship_max_speed: f32,
    /// Tilt degrees per unit of vertical velocity
    pub ship_tilt: f32,

    // === World ===
    /// Scroll speed (units/second)
    pub speed: f32,
    pub ground_y: f32,
    pub player_size: f32,
    /// Fixed screen x of the player
    pub player_x: f32,

    // === Collision ===
    pub broad_phase_min: f32,
    pub broad_phase_max: f32,
    pub spike_width: f32,
    pub spike_clearance: f32,

    // === Clock ===
    /// Frame gaps above this are replaced by `nominal_dt`
    pub max_frame_dt: f32,
    pub nominal_dt: f32,

    // === View ===
    pub view_width: f32,
    pub cull_margin: f32,
    pub grid_spacing: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            spin_rate: CUBE_SPIN_RATE,

            ship_lift: SHIP_LIFT,
            ship_gravity_scale: SHIP_GRAVITY_SCALE,
            ship_max_speed: SHIP_MAX_SPEED,
            ship_tilt: SHIP_TILT,

            speed: SPEED,
            ground_y: GROUND_Y,
            player_size: PLAYER_SIZE,
            player_x: PLAYER_X,

            broad_phase_min: BROAD_PHASE_MIN,
            broad_phase_max: BROAD_PHASE_MAX,
            spike_width: SPIKE_WIDTH,
            spike_clearance: SPIKE_CLEARANCE,

            max_frame_dt: MAX_FRAME_DT,
            nominal_dt: NOMINAL_DT,

            view_width: VIEW_WIDTH,
            cull_margin: CULL_MARGIN,
            grid_spacing: GRID_SPACING,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would break simulation invariants
    pub fn validate(&self) -> Result<(), LoadError> {
        let all_finite = [
            self.gravity,
            self.jump_force,
            self.spin_rate,
            self.ship_lift,
            self.ship_gravity_scale,
            self.ship_max_speed,
            self.ship_tilt,
            self.speed,
            self.ground_y,
            self.player_size,
            self.player_x,
            self.broad_phase_min,
            self.broad_phase_max,
            self.spike_width,
            self.spike_clearance,
            self.max_frame_dt,
            self.nominal_dt,
            self.view_width,
            self.cull_margin,
            self.grid_spacing,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err(invalid("all values must be finite"));
        }
        if self.player_size <= 0.0 {
            return Err(invalid("player_size must be positive"));
        }
        if self.ground_y < self.player_size {
            return Err(invalid("ground_y must leave room for the player"));
        }
        if self.broad_phase_min >= self.broad_phase_max {
            return Err(invalid("broad_phase_min must be below broad_phase_max"));
        }
        if self.max_frame_dt <= 0.0 || self.nominal_dt <= 0.0 {
            return Err(invalid("frame time limits must be positive"));
        }
        if self.ship_max_speed <= 0.0 {
            return Err(invalid("ship_max_speed must be positive"));
        }
        if self.grid_spacing <= 0.0 {
            return Err(invalid("grid_spacing must be positive"));
        }
        Ok(())
    }

    /// Screen y of a grounded player's top edge
    #[inline]
    pub fn ground_top(&self) -> f32 {
        self.ground_y - self.player_size
    }
}

fn invalid(msg: &str) -> LoadError {
    LoadError::InvalidTuning(msg.to_string())
}

//! Collision detection against the obstacle track
//!
//! Two phases per obstacle:
//! - Broad phase: the obstacle's relative x must sit inside a short window
//!   ahead of the player anchor.
//! - Narrow phase: portals apply as soon as they pass the broad phase (no
//!   overlap test, deliberately forgiving). Spikes need horizontal overlap
//!   and a player low enough to touch them.

use super::level::Level;
use super::state::{Mode, Player};
use crate::tuning::Tuning;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionOutcome {
    /// Mode requested by a portal (last portal in track order wins)
    pub mode: Option<Mode>,
    /// A hazard was hit
    pub died: bool,
}

/// Horizontal span in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub fn new(min: f32, width: f32) -> Self {
        Self {
            min,
            max: min + width,
        }
    }

    /// Strict overlap; touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Span) -> bool {
        self.min < other.max && self.max > other.min
    }
}

/// Is a relative x inside the broad phase window?
#[inline]
pub fn in_broad_phase(rel_x: f32, tuning: &Tuning) -> bool {
    rel_x > tuning.broad_phase_min && rel_x < tuning.broad_phase_max
}

/// Check the player against every obstacle on the track
///
/// Pure: reports what should happen without touching the player or session.
pub fn check(player: &Player, level: &Level, distance: f32, tuning: &Tuning) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();
    let player_span = Span::new(player.pos.x, tuning.player_size);
    let low_enough = player.bottom(tuning) > tuning.ground_y - tuning.spike_clearance;

    // Every obstacle is evaluated; sortedness is never assumed
    for obstacle in level.obstacles() {
        let rel_x = Level::relative_position(obstacle, distance);
        if !in_broad_phase(rel_x, tuning) {
            continue;
        }

        match obstacle.kind.portal_target() {
            Some(mode) => outcome.mode = Some(mode),
            None => {
                let footprint = Span::new(rel_x, tuning.spike_width);
                if player_span.overlaps(&footprint) && low_enough {
                    outcome.died = true;
                }
            }
        }
    }

    outcome
}

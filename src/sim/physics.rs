//! Player controller: per-mode vertical integration
//!
//! Accelerations are applied once per tick (the game was tuned against a
//! 60 Hz frame callback); only the cosmetic spin scales with `dt`.

use super::state::{Mode, Player};
use crate::tuning::Tuning;

/// Advance the player by one tick and return the new pose
pub fn advance(player: &Player, dt: f32, pressed: bool, tuning: &Tuning) -> Player {
    let mut next = *player;
    let ground_top = tuning.ground_top();

    match next.mode {
        Mode::Cube => {
            next.vel_y += tuning.gravity;
            if next.bottom(tuning) >= tuning.ground_y {
                next.pos.y = ground_top;
                next.vel_y = 0.0;
                next.rotation = 0.0;
                if pressed {
                    next.vel_y = tuning.jump_force;
                }
            } else {
                next.rotation += tuning.spin_rate * dt;
            }
        }
        Mode::Ship => {
            next.vel_y += if pressed {
                tuning.ship_lift
            } else {
                tuning.gravity * tuning.ship_gravity_scale
            };
            next.vel_y = next
                .vel_y
                .clamp(-tuning.ship_max_speed, tuning.ship_max_speed);
            next.rotation = next.vel_y * tuning.ship_tilt;
        }
    }

    next.pos.y += next.vel_y;

    // Ceiling
    if next.pos.y < 0.0 {
        next.pos.y = 0.0;
        next.vel_y = 0.0;
    }

    // A falling cube lands on the ground line instead of sinking into it
    if next.mode == Mode::Cube && next.bottom(tuning) > tuning.ground_y {
        next.pos.y = ground_top;
        next.vel_y = 0.0;
    }

    next
}

/// A ship touching the ground is destroyed
pub fn hull_breached(player: &Player, tuning: &Tuning) -> bool {
    player.mode == Mode::Ship && player.bottom(tuning) > tuning.ground_y
}

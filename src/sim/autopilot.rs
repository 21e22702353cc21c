//! Demo autopilot
//!
//! Produces the pressed signal a reasonable player would, from the same
//! read-only state a renderer sees. Used for attract/demo mode and headless
//! runs; it never mutates the session.

use super::level::Level;
use super::session::GameSession;
use super::state::Mode;

/// How far ahead of the broad phase window a cube starts its jump
const JUMP_LEAD: f32 = 20.0;
/// Ship holds lift while its bottom edge is below this far above the ground
const HOVER_HEIGHT: f32 = 120.0;

/// Should the autopilot be holding the button this frame?
pub fn decide(session: &GameSession) -> bool {
    let tuning = session.tuning();
    let player = session.player();

    match player.mode {
        Mode::Cube => {
            let distance = session.distance();
            let near = tuning.broad_phase_max - JUMP_LEAD;
            let far = tuning.broad_phase_max + JUMP_LEAD;
            session.level().obstacles().iter().any(|o| {
                let rel = Level::relative_position(o, distance);
                o.kind.is_hazard() && rel > near && rel <= far
            })
        }
        Mode::Ship => player.bottom(tuning) > tuning.ground_y - HOVER_HEIGHT,
    }
}

//! Game session: attempt life-cycle and the per-tick pipeline
//!
//! The session exclusively owns the player, the track and all counters.
//! Hosts mutate it only through [`GameSession::press`] and
//! [`GameSession::tick`], and read it through accessors or a
//! [`RenderSnapshot`].

use super::collision;
use super::level::Level;
use super::physics;
use super::snapshot::RenderSnapshot;
use super::state::{GameEvent, GamePhase, Player, reset_player};
use crate::tuning::Tuning;

/// One player's run through a level
#[derive(Debug, Clone)]
pub struct GameSession {
    tuning: Tuning,
    level: Level,
    player: Player,
    /// Scroll offset since the current attempt began
    distance: f32,
    /// Current attempt number (starts at 1, never decreases)
    attempts: u32,
    phase: GamePhase,
    /// Logical input, written between ticks
    pressed: bool,
    /// Fraction of the level covered, in [0, 1]
    progress: f32,
    /// Pending events for the host
    events: Vec<GameEvent>,
}

impl GameSession {
    pub fn new(level: Level, tuning: Tuning) -> Self {
        let player = Player::spawn(&tuning);
        Self {
            tuning,
            level,
            player,
            distance: 0.0,
            attempts: 1,
            phase: GamePhase::Idle,
            pressed: false,
            progress: 0.0,
            events: Vec::new(),
        }
    }

    /// Begin a run. Returns `false` (and does nothing) if already running.
    pub fn start(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => {
                log::debug!("start() ignored: session already running");
                return false;
            }
            GamePhase::Complete => self.attempts += 1,
            GamePhase::Idle => {}
        }

        self.phase = GamePhase::Running;
        self.distance = 0.0;
        self.progress = 0.0;
        reset_player(&mut self.player, &self.tuning);
        self.events.push(GameEvent::Started);
        log::info!("Run started (attempt {})", self.attempts);
        true
    }

    /// Record the input state; a press while waiting starts a run.
    ///
    /// Returns whether this call started a run.
    pub fn press(&mut self, down: bool) -> bool {
        let started = down && !self.is_active() && self.start();
        self.pressed = down;
        started
    }

    /// Advance the simulation by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        if !self.is_active() {
            return;
        }
        // Single read per tick
        let pressed = self.pressed;

        self.distance += self.tuning.speed * dt;
        self.player = physics::advance(&self.player, dt, pressed, &self.tuning);
        log::trace!(
            "tick dt={dt:.4} distance={:.1} y={:.1} vel_y={:.2}",
            self.distance,
            self.player.pos.y,
            self.player.vel_y
        );

        if physics::hull_breached(&self.player, &self.tuning) {
            log::debug!("Ship hit the ground at distance {:.0}", self.distance);
            self.die();
            return;
        }

        let outcome = collision::check(&self.player, &self.level, self.distance, &self.tuning);
        if outcome.died {
            log::debug!("Spike hit at distance {:.0}", self.distance);
            self.die();
            return;
        }
        if let Some(mode) = outcome.mode
            && mode != self.player.mode
        {
            log::debug!("Mode switch {:?} -> {:?}", self.player.mode, mode);
            self.player.mode = mode;
            self.events.push(GameEvent::ModeChanged { mode });
        }

        self.progress = (self.distance / self.level.length()).min(1.0);
        if self.distance >= self.level.length() {
            self.phase = GamePhase::Complete;
            self.events.push(GameEvent::Completed {
                attempts: self.attempts,
            });
            log::info!("Level complete after {} attempts", self.attempts);
        }
    }

    /// End the current attempt and respawn immediately
    pub fn die(&mut self) {
        self.attempts += 1;
        self.distance = 0.0;
        self.progress = 0.0;
        reset_player(&mut self.player, &self.tuning);
        self.events.push(GameEvent::Died {
            attempt: self.attempts,
        });
        log::debug!("Attempt {}", self.attempts);
    }

    /// Take all events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view for renderers
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(self)
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::{Obstacle, ObstacleKind};
    use crate::sim::state::Mode;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn running(level: Level) -> GameSession {
        let mut session = GameSession::new(level, Tuning::default());
        assert!(session.press(true));
        session.press(false);
        session.drain_events();
        session
    }

    fn single(kind: ObstacleKind, x: f32) -> Level {
        Level::new(vec![Obstacle::new(x, kind)], 10_000.0).unwrap()
    }

    #[test]
    fn test_idle_until_first_press() {
        let mut session = GameSession::new(Level::default(), Tuning::default());
        assert_eq!(session.phase(), GamePhase::Idle);
        session.tick(DT);
        assert_eq!(session.distance(), 0.0);

        // Release while idle does not start anything
        assert!(!session.press(false));
        assert_eq!(session.phase(), GamePhase::Idle);

        assert!(session.press(true));
        assert!(session.is_active());
        assert!(session.pressed());
        assert_eq!(session.attempts(), 1);
        assert_eq!(session.drain_events(), vec![GameEvent::Started]);

        // Further presses only update the flag
        assert!(!session.press(true));
        assert!(!session.start());
    }

    #[test]
    fn test_tick_scrolls_at_speed() {
        let mut session = running(Level::default());
        session.tick(0.1);
        assert!((session.distance() - 45.0).abs() < 1e-4);
        assert!((session.progress() - 45.0 / 15_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_cube_jump_on_press() {
        let mut session = running(Level::default());
        let ground_top = session.tuning().ground_top();
        session.press(true);
        session.tick(DT);
        assert_eq!(session.player().vel_y, -16.0);
        assert!(session.player().pos.y < ground_top);
    }

    #[test]
    fn test_spike_collision_kills_once() {
        let mut session = running(single(ObstacleKind::Spike, 800.0));
        // Put the spike at rel 160 after the next tick's scroll
        session.distance = 640.0 - session.tuning().speed * DT;
        session.tick(DT);

        assert_eq!(session.attempts(), 2);
        assert_eq!(session.distance(), 0.0);
        assert_eq!(*session.player(), Player::spawn(session.tuning()));
        assert!(session.is_active());
        assert_eq!(session.drain_events(), vec![GameEvent::Died { attempt: 2 }]);
    }

    #[test]
    fn test_portal_switches_mode() {
        let mut session = running(single(ObstacleKind::PortalToShip, 1800.0));
        session.distance = 1650.0;
        session.tick(DT);
        assert_eq!(session.player().mode, Mode::Ship);
        assert_eq!(
            session.drain_events(),
            vec![GameEvent::ModeChanged { mode: Mode::Ship }]
        );

        // Staying in the window does not re-announce the switch
        session.press(true);
        session.tick(DT);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_ship_ground_breach_dies() {
        let mut session = running(Level::default());
        session.player.mode = Mode::Ship;
        session.player.vel_y = 8.0;
        session.distance = 500.0;
        session.tick(DT);

        assert_eq!(session.attempts(), 2);
        assert_eq!(session.distance(), 0.0);
        assert_eq!(session.player().mode, Mode::Cube);
    }

    #[test]
    fn test_completion_stops_the_run() {
        let level = Level::new(Vec::new(), 100.0).unwrap();
        let mut session = running(level);
        session.tick(0.2);
        session.tick(0.2);
        assert_eq!(session.phase(), GamePhase::Complete);
        assert_eq!(session.progress(), 1.0);
        assert!(!session.is_active());
        assert_eq!(
            session.drain_events(),
            vec![GameEvent::Completed { attempts: 1 }]
        );

        // No further movement once complete
        let distance = session.distance();
        session.tick(0.2);
        assert_eq!(session.distance(), distance);

        // A press starts a fresh attempt
        assert!(session.press(true));
        assert_eq!(session.attempts(), 2);
        assert_eq!(session.distance(), 0.0);
        assert_eq!(session.progress(), 0.0);
    }

    #[test]
    fn test_default_level_without_input_dies_on_first_spike() {
        let mut session = running(Level::default());
        let mut ticks = 0;
        while session.attempts() == 1 && ticks < 600 {
            session.tick(DT);
            ticks += 1;
        }
        assert_eq!(session.attempts(), 2);
        // First spike at 800 reaches the overlap zone after ~620 units
        assert!(ticks > 80 && ticks < 90, "died after {ticks} ticks");
    }

    proptest! {
        #[test]
        fn prop_invariants_hold_for_any_input(
            inputs in proptest::collection::vec((any::<bool>(), 0.0f32..0.1), 1..600)
        ) {
            let level = single(ObstacleKind::Spike, 800.0);
            let mut session = GameSession::new(level, Tuning::default());
            let ground_y = session.tuning().ground_y;
            let mut last_attempts = session.attempts();

            for (pressed, dt) in inputs {
                session.press(pressed);
                session.tick(dt);

                let player = session.player();
                prop_assert!(player.pos.y >= 0.0);
                prop_assert!(player.bottom(session.tuning()) <= ground_y || player.mode == Mode::Ship);
                if player.mode == Mode::Ship {
                    prop_assert!(player.vel_y.abs() <= 8.0);
                }
                prop_assert!((0.0..=1.0).contains(&session.progress()));
                prop_assert!(session.attempts() >= last_attempts);
                prop_assert!(session.attempts() <= last_attempts + 1);
                last_attempts = session.attempts();
            }
        }

        #[test]
        fn prop_death_restores_initial_pose(distance in 0.0f32..20_000.0, vel in -16.0f32..16.0, y in 0.0f32..320.0, ship in any::<bool>()) {
            let mut session = running(Level::default());
            session.distance = distance;
            session.player.pos.y = y;
            session.player.vel_y = vel;
            session.player.rotation = 77.0;
            session.player.mode = if ship { Mode::Ship } else { Mode::Cube };
            let before = session.attempts();

            session.die();

            prop_assert_eq!(session.distance(), 0.0);
            prop_assert_eq!(*session.player(), Player::spawn(session.tuning()));
            prop_assert_eq!(session.attempts(), before + 1);
        }

        #[test]
        fn prop_progress_is_clamped(dt in 0.0f32..0.1, ticks in 1usize..50) {
            let level = Level::new(Vec::new(), 50.0).unwrap();
            let mut session = running(level);
            for _ in 0..ticks {
                session.tick(dt);
                prop_assert!((0.0..=1.0).contains(&session.progress()));
            }
        }
    }
}

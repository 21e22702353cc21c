//! Frame delta computation
//!
//! Hosts call back once per display refresh with a timestamp. A tab that was
//! suspended can hand over a gap of several seconds; stepping the simulation
//! by that much would teleport the player through obstacles, so oversized
//! gaps are replaced by one nominal frame.

use crate::tuning::Tuning;

/// Clamped delta-time from host timestamps (seconds)
#[derive(Debug, Clone)]
pub struct SimulationClock {
    last_time: f64,
    max_dt: f32,
    nominal_dt: f32,
}

impl SimulationClock {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            last_time: 0.0,
            max_dt: tuning.max_frame_dt,
            nominal_dt: tuning.nominal_dt,
        }
    }

    /// Set the time reference (on run start)
    pub fn reset(&mut self, now: f64) {
        self.last_time = now;
    }

    /// Delta since the previous frame, clamped
    pub fn on_frame(&mut self, now: f64) -> f32 {
        let measured = (now - self.last_time) as f32;
        self.last_time = now;

        if measured > self.max_dt {
            log::trace!("Frame gap {measured:.3}s replaced by nominal step");
            self.nominal_dt
        } else {
            measured.max(0.0)
        }
    }

    pub fn last_time(&self) -> f64 {
        self.last_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_frames_pass_through() {
        let mut clock = SimulationClock::new(&Tuning::default());
        clock.reset(10.0);
        let dt = clock.on_frame(10.016);
        assert!((dt - 0.016).abs() < 1e-5);
        let dt = clock.on_frame(10.05);
        assert!((dt - 0.034).abs() < 1e-5);
    }

    #[test]
    fn test_stall_uses_nominal_step() {
        let mut clock = SimulationClock::new(&Tuning::default());
        clock.reset(1.0);
        let dt = clock.on_frame(6.0);
        assert_eq!(dt, 1.0 / 60.0);
        // The reference still moves forward
        assert_eq!(clock.last_time(), 6.0);
        let dt = clock.on_frame(6.02);
        assert!((dt - 0.02).abs() < 1e-5);
    }

    #[test]
    fn test_exact_limit_is_not_clamped() {
        let mut clock = SimulationClock::new(&Tuning::default());
        clock.reset(0.0);
        let dt = clock.on_frame(0.1);
        assert!((dt - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_time_going_backwards_is_zero() {
        let mut clock = SimulationClock::new(&Tuning::default());
        clock.reset(5.0);
        assert_eq!(clock.on_frame(4.5), 0.0);
        assert_eq!(clock.last_time(), 4.5);
    }
}

//! Time sources (seconds as `f64`)

use std::cell::Cell;
use std::rc::Rc;

/// Something that can tell the current time in seconds
pub trait TimeSource {
    fn now(&self) -> f64;
}

/// Wall-clock monotonic time (native only; browsers pass timestamps in)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy)]
pub struct InstantTime {
    origin: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for InstantTime {
    fn default() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TimeSource for InstantTime {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Manually advanced time for deterministic runs and tests.
///
/// Clones share the same instant, so a test can keep a handle while the
/// runner owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualTime {
    now: Rc<Cell<f64>>,
}

impl ManualTime {
    pub fn new(start: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl TimeSource for ManualTime {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input events (several physical sources merged into one button)
//! - Time (real monotonic clock or a manually driven one)

pub mod input;
pub mod time;

pub use input::{InputSource, InputState, is_jump_key};
#[cfg(not(target_arch = "wasm32"))]
pub use time::InstantTime;
pub use time::{ManualTime, TimeSource};

//! Board timing parameters
//!
//! Step periods for the display patterns.  The defaults are the board's
//! fixed timings; nothing is persisted, but the struct derives serde so a
//! test harness or a bench build can override individual fields.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Pattern timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// On and off half-periods of the 1 Hz blinks (milliseconds)
    pub blink_half_period_ms: u32,
    /// Dwell per value of the up/down bar counters (milliseconds)
    pub counter_step_ms: u32,
    /// Dwell per position of the rotating bar bit (milliseconds)
    pub ring_step_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            blink_half_period_ms: 500, // 1 Hz
            counter_step_ms: 100,      // 10 Hz
            ring_step_ms: 500,
        }
    }
}

impl BoardConfig {
    /// Reject timings that would turn a pattern into a busy spin.
    pub fn validate(&self) -> Result<()> {
        if self.blink_half_period_ms == 0 {
            return Err(Error::Config("blink_half_period_ms must be non-zero"));
        }
        if self.counter_step_ms == 0 {
            return Err(Error::Config("counter_step_ms must be non-zero"));
        }
        if self.ring_step_ms == 0 {
            return Err(Error::Config("ring_step_ms must be non-zero"));
        }
        Ok(())
    }
}

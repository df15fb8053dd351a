//! Slide switches on port 10, bits 0–3 (active high, no inversion).
//!
//! Switch n (1-based) sets bit n-1 of the code.

use crate::drivers::port::GpioPort;
use crate::pins::SWITCHES_MASK;

/// Masked 4-bit switch code, always in `0..=15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwitchCode(u8);

impl SwitchCode {
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw & SWITCHES_MASK)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether slide switch `n` (1–4) is on.
    pub const fn is_on(self, n: u8) -> bool {
        n >= 1 && n <= 4 && self.0 & (1 << (n - 1)) != 0
    }

    pub const fn count_on(self) -> u32 {
        self.0.count_ones()
    }
}

impl core::fmt::Display for SwitchCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}

pub fn read_switches(port: &impl GpioPort) -> SwitchCode {
    SwitchCode::from_raw(port.read_input())
}

//! User buttons on port 1, bits 1 and 4.
//!
//! Both buttons are active-low with internal pull-ups and hardware
//! debouncing, so a read is a plain masked sample of the input register.
//!
//! | Raw    | Button 1 | Button 2 |
//! |--------|----------|----------|
//! | `0x00` | pressed  | pressed  |
//! | `0x10` | pressed  | —        |
//! | `0x02` | —        | pressed  |
//! | `0x12` | —        | —        |

use crate::drivers::port::GpioPort;
use crate::pins::{BUTTON1_MASK, BUTTON2_MASK, BUTTONS_MASK};

/// Masked snapshot of both button lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStatus(u8);

impl ButtonStatus {
    pub const BOTH_PRESSED: Self = Self(0x00);
    pub const BUTTON1_PRESSED: Self = Self(BUTTON2_MASK);
    pub const BUTTON2_PRESSED: Self = Self(BUTTON1_MASK);
    pub const NONE_PRESSED: Self = Self(BUTTONS_MASK);

    /// Build from a raw input-register sample; non-button bits are dropped.
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw & BUTTONS_MASK)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn button1_pressed(self) -> bool {
        self.0 & BUTTON1_MASK == 0
    }

    pub const fn button2_pressed(self) -> bool {
        self.0 & BUTTON2_MASK == 0
    }
}

pub fn read_buttons(port: &impl GpioPort) -> ButtonStatus {
    ButtonStatus::from_raw(port.read_input())
}

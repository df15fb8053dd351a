//! 8-LED bar display on port 9.
//!
//! The display owns the whole port, so writes latch the full byte without
//! masking.  Bit n lights LED n.

use crate::drivers::port::GpioPort;

pub const ALL_OFF: u8 = 0x00;
pub const ALL_ON: u8 = 0xFF;
/// LEDs 0–3.
pub const LOWER_HALF: u8 = 0x0F;
/// LEDs 4–7.
pub const UPPER_HALF: u8 = 0xF0;
/// LEDs 0, 2, 4, 6.
pub const EVEN: u8 = 0x55;
/// LEDs 1, 3, 5, 7.
pub const ODD: u8 = 0xAA;

/// Latch `value` and return what the register actually holds.
pub fn set_bar_leds(port: &mut impl GpioPort, value: u8) -> u8 {
    port.write_output(value);
    port.read_output()
}

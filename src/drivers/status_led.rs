//! Single-colour status LED on port 1, bit 0.
//!
//! The output register is shared with the button pull selects, so writes
//! are read-modify-write and only bit 0 is ever touched.

use crate::drivers::port::GpioPort;
use crate::pins::STATUS_LED_MASK;

/// Switch the LED and report whether it reads back on.
pub fn set_status_led(port: &mut impl GpioPort, on: bool) -> bool {
    let value = if on { STATUS_LED_MASK } else { 0 };
    port.modify_output(STATUS_LED_MASK, value);
    port.read_output() & STATUS_LED_MASK != 0
}

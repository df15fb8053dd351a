//! One-shot pin configuration.
//!
//! Configures function select, direction, pulls and drive strength for
//! every I/O group.  Called once from `main()` (through
//! [`HardwareAdapter::init`](crate::adapters::hardware::HardwareAdapter::init))
//! before the control loop starts.
//!
//! | Group       | Port | Mask   | Dir | Pull | Drive  |
//! |-------------|------|--------|-----|------|--------|
//! | Status LED  | 1    | `0x01` | out | —    | normal |
//! | RGB LED     | 2    | `0x07` | out | —    | high   |
//! | Buttons     | 1    | `0x12` | in  | up   | —      |
//! | Bar display | 9    | `0xFF` | out | —    | high   |
//! | Switches    | 10   | `0x0F` | in  | —    | —      |

use log::{debug, info};

use crate::drivers::port::{Direction, DriveStrength, GpioPort};
use crate::pins;

pub fn init_status_led(port: &mut impl GpioPort) {
    port.select_gpio(pins::STATUS_LED_MASK);
    port.set_direction(pins::STATUS_LED_MASK, Direction::Output);
    debug!("hw_init: status LED configured (P1 mask=0x{:02X})", pins::STATUS_LED_MASK);
}

/// RGB LED starts off.
pub fn init_rgb_led(port: &mut impl GpioPort) {
    port.select_gpio(pins::RGB_LED_MASK);
    port.set_drive_strength(pins::RGB_LED_MASK, DriveStrength::High);
    port.set_direction(pins::RGB_LED_MASK, Direction::Output);
    port.modify_output(pins::RGB_LED_MASK, 0);
    debug!("hw_init: RGB LED configured (P2 mask=0x{:02X})", pins::RGB_LED_MASK);
}

/// Buttons close to ground, so the pulls must point up.
pub fn init_buttons(port: &mut impl GpioPort) {
    port.select_gpio(pins::BUTTONS_MASK);
    port.set_direction(pins::BUTTONS_MASK, Direction::Input);
    port.enable_pull(pins::BUTTONS_MASK);
    port.modify_output(pins::BUTTONS_MASK, pins::BUTTONS_MASK);
    debug!("hw_init: buttons configured (P1 mask=0x{:02X}, pull-up)", pins::BUTTONS_MASK);
}

/// Bar display starts blank.
pub fn init_bar_leds(port: &mut impl GpioPort) {
    port.select_gpio(pins::BAR_LEDS_MASK);
    port.set_drive_strength(pins::BAR_LEDS_MASK, DriveStrength::High);
    port.set_direction(pins::BAR_LEDS_MASK, Direction::Output);
    port.modify_output(pins::BAR_LEDS_MASK, 0);
    debug!("hw_init: bar display configured (P9 mask=0x{:02X})", pins::BAR_LEDS_MASK);
}

pub fn init_switches(port: &mut impl GpioPort) {
    port.select_gpio(pins::SWITCHES_MASK);
    port.set_direction(pins::SWITCHES_MASK, Direction::Input);
    debug!("hw_init: switches configured (P10 mask=0x{:02X})", pins::SWITCHES_MASK);
}

/// Configure every group.  Port 1 is shared by the status LED and the
/// buttons, so it is passed once and configured twice.
pub fn init_all(
    port1: &mut impl GpioPort,
    port2: &mut impl GpioPort,
    port9: &mut impl GpioPort,
    port10: &mut impl GpioPort,
) {
    init_status_led(port1);
    init_rgb_led(port2);
    init_buttons(port1);
    init_bar_leds(port9);
    init_switches(port10);
    info!("hw_init: all pin groups configured");
}

//! Hardware adapter — bridges the four board ports to domain port traits.
//!
//! Owns one exclusive handle per port and exposes the drivers through
//! [`InputPort`] and [`OutputPort`].  This is the only module that holds
//! port handles; on the device they are `EspPort`s, on the host
//! [`SimPort`](crate::drivers::sim_port::SimPort)s.

use crate::app::ports::{InputPort, OutputPort};
use crate::drivers::bar_leds::set_bar_leds;
use crate::drivers::button::{ButtonStatus, read_buttons};
use crate::drivers::hw_init;
use crate::drivers::port::GpioPort;
use crate::drivers::rgb_led::{RgbColour, set_rgb_led};
use crate::drivers::status_led::set_status_led;
use crate::drivers::switches::{SwitchCode, read_switches};

/// Concrete adapter that combines all board ports behind port traits.
pub struct HardwareAdapter<P1, P2, P9, P10> {
    /// Status LED + buttons.
    port1: P1,
    /// RGB LED.
    port2: P2,
    /// Bar display.
    port9: P9,
    /// Slide switches.
    port10: P10,
}

impl<P1, P2, P9, P10> HardwareAdapter<P1, P2, P9, P10>
where
    P1: GpioPort,
    P2: GpioPort,
    P9: GpioPort,
    P10: GpioPort,
{
    pub fn new(port1: P1, port2: P2, port9: P9, port10: P10) -> Self {
        Self {
            port1,
            port2,
            port9,
            port10,
        }
    }

    /// One-time pin configuration for every group.
    pub fn init(&mut self) {
        hw_init::init_all(
            &mut self.port1,
            &mut self.port2,
            &mut self.port9,
            &mut self.port10,
        );
    }
}

// ── InputPort implementation ──────────────────────────────────

impl<P1, P2, P9, P10> InputPort for HardwareAdapter<P1, P2, P9, P10>
where
    P1: GpioPort,
    P10: GpioPort,
{
    fn read_buttons(&mut self) -> ButtonStatus {
        read_buttons(&self.port1)
    }

    fn read_switches(&mut self) -> SwitchCode {
        read_switches(&self.port10)
    }
}

// ── OutputPort implementation ─────────────────────────────────

impl<P1, P2, P9, P10> OutputPort for HardwareAdapter<P1, P2, P9, P10>
where
    P1: GpioPort,
    P2: GpioPort,
    P9: GpioPort,
{
    fn set_status_led(&mut self, on: bool) -> bool {
        set_status_led(&mut self.port1, on)
    }

    fn set_rgb_led(&mut self, colour: RgbColour) -> bool {
        set_rgb_led(&mut self.port2, colour)
    }

    fn set_bar_leds(&mut self, value: u8) -> u8 {
        set_bar_leds(&mut self.port9, value)
    }
}

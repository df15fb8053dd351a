//! Tri-colour LED on port 2, bits 0–2.
//!
//! | Colour   | R | G | B | bits   |
//! |----------|---|---|---|--------|
//! | Off      | - | - | - | `0x00` |
//! | Red      | R | - | - | `0x01` |
//! | Green    | - | G | - | `0x02` |
//! | Yellow   | R | G | - | `0x03` |
//! | Blue     | - | - | B | `0x04` |
//! | Pink     | R | - | B | `0x05` |
//! | SkyBlue  | - | G | B | `0x06` |
//! | White    | R | G | B | `0x07` |

use crate::drivers::port::GpioPort;
use crate::pins::RGB_LED_MASK;

/// Colours reachable by mixing the three on/off channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RgbColour {
    Off = 0x00,
    Red = 0x01,
    Green = 0x02,
    Yellow = 0x03,
    Blue = 0x04,
    Pink = 0x05,
    SkyBlue = 0x06,
    White = 0x07,
}

impl RgbColour {
    /// Channel bits as laid out on the port.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode channel bits; anything outside bits 0–2 is ignored.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & RGB_LED_MASK {
            0x01 => Self::Red,
            0x02 => Self::Green,
            0x03 => Self::Yellow,
            0x04 => Self::Blue,
            0x05 => Self::Pink,
            0x06 => Self::SkyBlue,
            0x07 => Self::White,
            _ => Self::Off,
        }
    }
}

/// Show `colour` and report whether any channel reads back on.
pub fn set_rgb_led(port: &mut impl GpioPort, colour: RgbColour) -> bool {
    port.modify_output(RGB_LED_MASK, colour.bits());
    port.read_output() & RGB_LED_MASK != 0
}

/// Colour currently latched on the LED.
pub fn rgb_led_colour(port: &impl GpioPort) -> RgbColour {
    RgbColour::from_bits(port.read_output())
}

//! 8-bit GPIO port abstraction.
//!
//! A [`GpioPort`] is one exclusively-owned handle onto a group of eight pins
//! that share function-select, direction, pull, drive-strength, input and
//! output registers.  Every method takes a bit mask and touches only the
//! selected pins, except [`GpioPort::write_output`], which latches the whole
//! output register.
//!
//! Register accesses are assumed to always succeed, so the trait is
//! infallible.  Implementations:
//!
//! | Type                                   | Backing                    |
//! |----------------------------------------|----------------------------|
//! | [`SimPort`](super::sim_port::SimPort)  | In-memory register model   |
//! | `EspPort` (`adapters::esp_port`)       | ESP32-S3 GPIO matrix       |

/// Pin direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

/// Output drive strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveStrength {
    Normal,
    High,
}

pub trait GpioPort {
    /// Route the masked pins to plain digital I/O, detaching any analog or
    /// peripheral function.
    fn select_gpio(&mut self, mask: u8);

    fn set_direction(&mut self, mask: u8, direction: Direction);

    /// Enable the internal pull resistor on the masked pins.  The pull
    /// direction follows the corresponding output-register bits (1 = up).
    fn enable_pull(&mut self, mask: u8);

    fn set_drive_strength(&mut self, mask: u8, strength: DriveStrength);

    /// Current level of all eight input lines.
    fn read_input(&self) -> u8;

    /// Current contents of the output register.
    fn read_output(&self) -> u8;

    /// Latch a full byte into the output register.
    fn write_output(&mut self, value: u8);

    /// Read-modify-write the masked bits of the output register, leaving
    /// every other bit as it was.
    fn modify_output(&mut self, mask: u8, value: u8) {
        let current = self.read_output();
        self.write_output((current & !mask) | (value & mask));
    }
}

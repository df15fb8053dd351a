//! Port traits — the hexagonal boundary between pattern logic and the board.
//!
//! ```text
//!   HardwareAdapter ──▶ InputPort / OutputPort ──▶ ControlService
//!                                                      │
//!                                 EventSink ◀──────────┘
//! ```
//!
//! The [`ControlService`](super::service::ControlService) and the pattern
//! runners consume these via generics, so they never touch a register
//! directly and can be driven by mocks on the host.

use crate::drivers::button::ButtonStatus;
use crate::drivers::rgb_led::RgbColour;
use crate::drivers::switches::SwitchCode;

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: board → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: live samples of the user inputs.  Nothing is cached;
/// every call samples the pins again.
pub trait InputPort {
    fn read_buttons(&mut self) -> ButtonStatus;

    fn read_switches(&mut self) -> SwitchCode;
}

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → board)
// ───────────────────────────────────────────────────────────────

/// Write-side port.  Each setter reports the state read back from the
/// hardware after the write.
pub trait OutputPort {
    /// Returns whether the status LED is on.
    fn set_status_led(&mut self, on: bool) -> bool;

    /// Returns whether any RGB channel is on.
    fn set_rgb_led(&mut self, colour: RgbColour) -> bool;

    /// Returns the byte latched on the bar display.
    fn set_bar_leds(&mut self, value: u8) -> u8;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}

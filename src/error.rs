//! Error types for the firmware.
//!
//! Port register accesses cannot fail, so errors only arise while bringing
//! the board up: invalid timing configuration or a GPIO the platform
//! refuses to configure.  Variants are `Copy`.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid.
    Config(&'static str),
    /// The platform rejected configuring a physical GPIO.
    GpioConfig { gpio: i32, code: i32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::GpioConfig { gpio, code } => {
                write!(f, "GPIO {gpio} config failed (rc={code})")
            }
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

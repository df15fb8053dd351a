//! Outbound application events.
//!
//! The [`ControlService`](super::service::ControlService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.

use crate::config::BoardConfig;
use crate::drivers::led_patterns::Pattern;
use crate::drivers::switches::SwitchCode;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The control loop is about to start polling.
    Started(BoardConfig),

    /// The switch code selected a different pattern than the last
    /// iteration.  `fallback` is set when the code has no pattern of its
    /// own and Pattern 1 was used instead.
    PatternSelected {
        pattern: Pattern,
        switches: SwitchCode,
        fallback: bool,
    },

    /// A sequence was cut short by a switch change.  `bar` is the last
    /// value left on the bar display.
    PatternAborted { pattern: Pattern, bar: u8 },
}

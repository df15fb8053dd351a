//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (ESP-IDF logger on the device, whatever the host
//! installs otherwise).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(config) => {
                info!(
                    "START | blink={}ms counter={}ms ring={}ms",
                    config.blink_half_period_ms, config.counter_step_ms, config.ring_step_ms,
                );
            }
            AppEvent::PatternSelected {
                pattern,
                switches,
                fallback: false,
            } => {
                info!("PATTERN | switches={} -> {}", switches, pattern);
            }
            AppEvent::PatternSelected {
                pattern,
                switches,
                fallback: true,
            } => {
                warn!("PATTERN | switches={} unmapped, falling back to {}", switches, pattern);
            }
            AppEvent::PatternAborted { pattern, bar } => {
                info!("PATTERN | {} aborted, bar=0x{:02X}", pattern, bar);
            }
        }
    }
}

//! Control service — the polling loop at the core of the firmware.
//!
//! [`ControlService`] samples the inputs, picks a pattern from the switch
//! code and runs it.  All I/O flows through port traits injected at call
//! sites, and time only passes through the injected [`DelayNs`], so the
//! whole loop is testable with mock adapters.
//!
//! ```text
//!  InputPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                │     ControlService     │
//! OutputPort ◀── │  select · run pattern  │ ◀── DelayNs
//!                └────────────────────────┘
//! ```

use embedded_hal::delay::DelayNs;
use log::{debug, info};

use crate::config::BoardConfig;
use crate::drivers::button::ButtonStatus;
use crate::drivers::led_patterns::{Pattern, PatternOutcome};
use crate::drivers::switches::SwitchCode;

use super::events::AppEvent;
use super::ports::{EventSink, InputPort, OutputPort};

/// What one loop iteration saw and did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub buttons: ButtonStatus,
    pub switches: SwitchCode,
    pub pattern: Pattern,
    pub outcome: PatternOutcome,
}

pub struct ControlService {
    config: BoardConfig,
    /// Pattern run by the previous iteration; only used to report changes.
    active: Option<Pattern>,
    iterations: u64,
}

impl ControlService {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            active: None,
            iterations: 0,
        }
    }

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started(self.config));
        info!("ControlService started");
    }

    /// One pass of the main loop: read buttons, read switches, run the
    /// selected pattern once.
    ///
    /// The `hw` parameter satisfies **both** [`InputPort`] and
    /// [`OutputPort`]; patterns re-read the switches mid-sequence.
    pub fn step(
        &mut self,
        hw: &mut (impl InputPort + OutputPort),
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> StepReport {
        self.iterations += 1;

        let buttons = hw.read_buttons();
        let switches = hw.read_switches();
        let mapped = Pattern::for_switches(switches);
        let pattern = Pattern::select(switches);

        if self.active != Some(pattern) {
            sink.emit(&AppEvent::PatternSelected {
                pattern,
                switches,
                fallback: mapped.is_none(),
            });
            self.active = Some(pattern);
        }

        let outcome = pattern.run(hw, delay, buttons, &self.config);
        if let PatternOutcome::Aborted { bar } = outcome {
            debug!("{} aborted at bar=0x{:02X}", pattern, bar);
            sink.emit(&AppEvent::PatternAborted { pattern, bar });
        }

        StepReport {
            buttons,
            switches,
            pattern,
            outcome,
        }
    }

    /// Poll forever.  Only a reset or power loss ends this.
    pub fn run(
        &mut self,
        hw: &mut (impl InputPort + OutputPort),
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> ! {
        loop {
            self.step(hw, delay, sink);
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Pattern run by the most recent iteration.
    pub fn active_pattern(&self) -> Option<Pattern> {
        self.active
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}

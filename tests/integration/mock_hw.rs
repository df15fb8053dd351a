//! Simulated board for integration tests.
//!
//! Wires four [`SimPort`]s into a [`HardwareAdapter`] and keeps probe
//! handles so tests can flip switches, press buttons and inspect latched
//! outputs.  Time is virtual: [`ScriptedDelay`] advances a clock instead of
//! sleeping and applies scheduled switch changes as the clock passes them.

use embedded_hal::delay::DelayNs;
use gpio_patterns::adapters::hardware::HardwareAdapter;
use gpio_patterns::app::events::AppEvent;
use gpio_patterns::app::ports::EventSink;
use gpio_patterns::drivers::sim_port::SimPort;
use gpio_patterns::pins;

pub type SimHardware = HardwareAdapter<SimPort, SimPort, SimPort, SimPort>;

// ── Board ─────────────────────────────────────────────────────

/// Probe handles sharing registers with the ports inside a [`SimHardware`].
pub struct SimBoard {
    /// Status LED + buttons.
    pub p1: SimPort,
    /// RGB LED.
    pub p2: SimPort,
    /// Bar display.
    pub p9: SimPort,
    /// Slide switches.
    pub p10: SimPort,
}

#[allow(dead_code)]
impl SimBoard {
    /// Initialised adapter plus probes, with the given switch code and no
    /// buttons pressed.  Output histories start empty.
    pub fn new(switches: u8) -> (SimHardware, Self) {
        let (p1, p2, p9, p10) = (SimPort::new(), SimPort::new(), SimPort::new(), SimPort::new());
        let mut hw = HardwareAdapter::new(p1.clone(), p2.clone(), p9.clone(), p10.clone());
        hw.init();
        p10.drive_input(pins::SWITCHES_MASK, switches);
        for port in [&p1, &p2, &p9] {
            port.clear_history();
        }
        (hw, Self { p1, p2, p9, p10 })
    }

    pub fn set_switches(&self, code: u8) {
        self.p10.drive_input(pins::SWITCHES_MASK, code);
    }

    /// Every value written to the bar display, oldest first.
    pub fn bar_history(&self) -> Vec<u8> {
        self.p9.output_history()
    }

    /// Every status LED level written, oldest first.
    pub fn status_history(&self) -> Vec<bool> {
        self.p1
            .output_history()
            .into_iter()
            .map(|v| v & pins::STATUS_LED_MASK != 0)
            .collect()
    }

    /// Every RGB bit pattern written, oldest first.
    pub fn rgb_history(&self) -> Vec<u8> {
        self.p2
            .output_history()
            .into_iter()
            .map(|v| v & pins::RGB_LED_MASK)
            .collect()
    }

    pub fn clear_history(&self) {
        for port in [&self.p1, &self.p2, &self.p9] {
            port.clear_history();
        }
    }
}

// ── ScriptedDelay ─────────────────────────────────────────────

/// Virtual-time delay.  Records each wait and, once the clock reaches a
/// scheduled instant, drives the switches to the scheduled code.
pub struct ScriptedDelay {
    switches: SimPort,
    /// `(at_ms, code)`, kept sorted by time.
    script: Vec<(u64, u8)>,
    pub elapsed_ms: u64,
    pub waits: Vec<u32>,
}

#[allow(dead_code)]
impl ScriptedDelay {
    pub fn new(board: &SimBoard) -> Self {
        Self {
            switches: board.p10.clone(),
            script: Vec::new(),
            elapsed_ms: 0,
            waits: Vec::new(),
        }
    }

    /// Schedule the switches to read `code` from `at_ms` onwards.
    pub fn at(mut self, at_ms: u64, code: u8) -> Self {
        self.script.push((at_ms, code));
        self.script.sort_by_key(|&(t, _)| t);
        self
    }

    fn advance(&mut self, ms: u32) {
        self.waits.push(ms);
        self.elapsed_ms += u64::from(ms);
        while let Some(&(t, code)) = self.script.first() {
            if t > self.elapsed_ms {
                break;
            }
            self.switches.drive_input(pins::SWITCHES_MASK, code);
            self.script.remove(0);
        }
    }
}

impl DelayNs for ScriptedDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.advance(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.advance(ms);
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

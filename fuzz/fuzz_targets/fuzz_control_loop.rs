//! Fuzz target: `ControlService::step` on a simulated board
//!
//! Every input byte is one sample of the board's inputs: the low nibble is
//! the switch code, bits 4 and 5 are the button levels.  One byte is
//! consumed before each iteration and one on every delay, so switches and
//! buttons change at arbitrary points inside a pattern.  Verifies:
//! - No panics under arbitrary input sequences
//! - The reported pattern is always the selection for the reported code
//! - Button pull-ups on port 1 survive every status LED write
//! - RGB writes never touch bits 3–7 of port 2
//!
//! cargo fuzz run fuzz_control_loop

#![no_main]

use embedded_hal::delay::DelayNs;
use libfuzzer_sys::fuzz_target;

use gpio_patterns::adapters::hardware::HardwareAdapter;
use gpio_patterns::app::events::AppEvent;
use gpio_patterns::app::ports::EventSink;
use gpio_patterns::app::service::ControlService;
use gpio_patterns::config::BoardConfig;
use gpio_patterns::drivers::led_patterns::Pattern;
use gpio_patterns::drivers::port::GpioPort;
use gpio_patterns::drivers::sim_port::SimPort;
use gpio_patterns::pins;

/// Code no pattern owns; forces a running sequence to stop once the input
/// is used up.
const EXHAUSTED: u8 = 0b1111;

struct Feed<'a> {
    data: &'a [u8],
    p1: SimPort,
    p10: SimPort,
}

impl Feed<'_> {
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn apply_next(&mut self) {
        let (switches, buttons) = match self.data.split_first() {
            Some((&byte, rest)) => {
                self.data = rest;
                (byte & 0x0F, byte >> 4)
            }
            None => (EXHAUSTED, 0b11),
        };
        self.p10.drive_input(pins::SWITCHES_MASK, switches);
        let mut levels = 0;
        if buttons & 0b01 != 0 {
            levels |= pins::BUTTON1_MASK;
        }
        if buttons & 0b10 != 0 {
            levels |= pins::BUTTON2_MASK;
        }
        self.p1.drive_input(pins::BUTTONS_MASK, levels);
    }
}

impl DelayNs for Feed<'_> {
    fn delay_ns(&mut self, _ns: u32) {
        self.apply_next();
    }
}

struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let (p1, p2, p9, p10) = (SimPort::new(), SimPort::new(), SimPort::new(), SimPort::new());
    let mut hw = HardwareAdapter::new(p1.clone(), p2.clone(), p9, p10.clone());
    hw.init();

    let mut feed = Feed { data, p1: p1.clone(), p10 };
    let mut service = ControlService::new(BoardConfig::default());
    let mut sink = NullSink;

    while !feed.is_empty() {
        feed.apply_next();
        let report = service.step(&mut hw, &mut feed, &mut sink);

        assert!(report.switches.value() <= 15);
        assert_eq!(report.pattern, Pattern::select(report.switches));
        assert_eq!(
            p1.read_output() & pins::BUTTONS_MASK,
            pins::BUTTONS_MASK,
            "button pull-ups cleared"
        );
        assert_eq!(p2.read_output() & !pins::RGB_LED_MASK, 0);
    }
});

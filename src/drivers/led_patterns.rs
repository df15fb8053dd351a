//! Display patterns and switch-code selection.
//!
//! The slide-switch code picks one of five patterns.  Only the codes with
//! exactly one switch on (or none) have a pattern of their own; every other
//! code falls back to Pattern 1.
//!
//! | Switches | Pattern          | Status LED | RGB LED       | Bar display               |
//! |----------|------------------|------------|---------------|---------------------------|
//! | `0000`   | 1 `ButtonMirror` | per button | per button    | per button                |
//! | `0001`   | 2 `CountUp`      | on         | red           | 0 → 255, 100 ms/step      |
//! | `0010`   | 3 `CountDown`    | off        | blue          | 255 → 0 → 255…, 100 ms/step |
//! | `0100`   | 4 `BlinkAll`     | 1 Hz blink | 1 Hz green    | 1 Hz all                  |
//! | `1000`   | 5 `Ring`         | off        | off           | one bit 0 → 7, 500 ms/step |
//!
//! Pattern 1 sub-states (buttons are active-low):
//!
//! | Buttons  | Status LED | RGB LED      | Bar display  |
//! |----------|------------|--------------|--------------|
//! | both     | 1 Hz flash | 1 Hz blue    | all off      |
//! | 1 only   | on         | off          | 0, 2, 4, 6   |
//! | 2 only   | off        | pink         | 1, 3, 5, 7   |
//! | neither  | off        | green        | all on       |
//!
//! Counters and the ring re-read the switches after every step and stop as
//! soon as the code differs from their own.  The down-counter has no end
//! of its own: it wraps from 0 back to 255 until the switches change.

use embedded_hal::delay::DelayNs;

use crate::app::ports::{InputPort, OutputPort};
use crate::config::BoardConfig;
use crate::drivers::bar_leds;
use crate::drivers::button::ButtonStatus;
use crate::drivers::rgb_led::RgbColour;
use crate::drivers::switches::SwitchCode;

/// Pattern identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    ButtonMirror,
    CountUp,
    CountDown,
    BlinkAll,
    Ring,
}

/// How a pattern run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternOutcome {
    /// Ran to its natural end; the main loop may re-invoke it.
    Completed,
    /// The switch code changed mid-sequence.
    Aborted { bar: u8 },
}

impl Pattern {
    pub const ALL: [Self; 5] = [
        Self::ButtonMirror,
        Self::CountUp,
        Self::CountDown,
        Self::BlinkAll,
        Self::Ring,
    ];

    /// The pattern owning `code`, or `None` for unmapped codes.
    pub const fn for_switches(code: SwitchCode) -> Option<Self> {
        match code.value() {
            0b0000 => Some(Self::ButtonMirror),
            0b0001 => Some(Self::CountUp),
            0b0010 => Some(Self::CountDown),
            0b0100 => Some(Self::BlinkAll),
            0b1000 => Some(Self::Ring),
            _ => None,
        }
    }

    /// Pattern to run for `code`.  Unmapped codes (two or more switches on)
    /// run [`Pattern::ButtonMirror`].
    pub const fn select(code: SwitchCode) -> Self {
        match Self::for_switches(code) {
            Some(pattern) => pattern,
            None => Self::ButtonMirror,
        }
    }

    /// The switch code that selects this pattern.
    pub const fn switch_code(self) -> SwitchCode {
        SwitchCode::from_raw(match self {
            Self::ButtonMirror => 0b0000,
            Self::CountUp => 0b0001,
            Self::CountDown => 0b0010,
            Self::BlinkAll => 0b0100,
            Self::Ring => 0b1000,
        })
    }

    /// 1-based pattern number as printed on the board's legend.
    pub const fn number(self) -> u8 {
        match self {
            Self::ButtonMirror => 1,
            Self::CountUp => 2,
            Self::CountDown => 3,
            Self::BlinkAll => 4,
            Self::Ring => 5,
        }
    }

    /// Run one invocation of the pattern.
    ///
    /// Blocks for the pattern's delays.  `buttons` is only consulted by
    /// [`Pattern::ButtonMirror`].
    pub fn run(
        self,
        hw: &mut (impl InputPort + OutputPort),
        delay: &mut impl DelayNs,
        buttons: ButtonStatus,
        config: &BoardConfig,
    ) -> PatternOutcome {
        match self {
            Self::ButtonMirror => button_mirror(hw, delay, buttons, config),
            Self::CountUp => count_up(hw, delay, config),
            Self::CountDown => count_down(hw, delay, config),
            Self::BlinkAll => blink_all(hw, delay, config),
            Self::Ring => ring(hw, delay, config),
        }
    }
}

impl core::fmt::Display for Pattern {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "pattern {} ({:?})", self.number(), self)
    }
}

fn still_selected(hw: &mut impl InputPort, pattern: Pattern) -> bool {
    hw.read_switches() == pattern.switch_code()
}

fn button_mirror(
    hw: &mut impl OutputPort,
    delay: &mut impl DelayNs,
    buttons: ButtonStatus,
    config: &BoardConfig,
) -> PatternOutcome {
    match (buttons.button1_pressed(), buttons.button2_pressed()) {
        (true, true) => {
            hw.set_bar_leds(bar_leds::ALL_OFF);
            hw.set_status_led(true);
            hw.set_rgb_led(RgbColour::Blue);
            delay.delay_ms(config.blink_half_period_ms);
            hw.set_status_led(false);
            hw.set_rgb_led(RgbColour::Off);
            delay.delay_ms(config.blink_half_period_ms);
        }
        (true, false) => {
            hw.set_status_led(true);
            hw.set_rgb_led(RgbColour::Off);
            hw.set_bar_leds(bar_leds::EVEN);
        }
        (false, true) => {
            hw.set_status_led(false);
            hw.set_rgb_led(RgbColour::Pink);
            hw.set_bar_leds(bar_leds::ODD);
        }
        (false, false) => {
            hw.set_status_led(false);
            hw.set_rgb_led(RgbColour::Green);
            hw.set_bar_leds(bar_leds::ALL_ON);
        }
    }
    PatternOutcome::Completed
}

fn count_up(
    hw: &mut (impl InputPort + OutputPort),
    delay: &mut impl DelayNs,
    config: &BoardConfig,
) -> PatternOutcome {
    hw.set_status_led(true);
    hw.set_rgb_led(RgbColour::Red);

    for count in 0..=u8::MAX {
        let latched = hw.set_bar_leds(count);
        delay.delay_ms(config.counter_step_ms);
        if !still_selected(hw, Pattern::CountUp) {
            return PatternOutcome::Aborted { bar: latched };
        }
    }
    PatternOutcome::Completed
}

fn count_down(
    hw: &mut (impl InputPort + OutputPort),
    delay: &mut impl DelayNs,
    config: &BoardConfig,
) -> PatternOutcome {
    hw.set_status_led(false);
    hw.set_rgb_led(RgbColour::Blue);

    let mut count = u8::MAX;
    loop {
        let latched = hw.set_bar_leds(count);
        delay.delay_ms(config.counter_step_ms);
        if !still_selected(hw, Pattern::CountDown) {
            return PatternOutcome::Aborted { bar: latched };
        }
        count = count.wrapping_sub(1);
    }
}

fn blink_all(
    hw: &mut impl OutputPort,
    delay: &mut impl DelayNs,
    config: &BoardConfig,
) -> PatternOutcome {
    hw.set_status_led(true);
    hw.set_rgb_led(RgbColour::Green);
    hw.set_bar_leds(bar_leds::ALL_ON);
    delay.delay_ms(config.blink_half_period_ms);
    hw.set_status_led(false);
    hw.set_rgb_led(RgbColour::Off);
    hw.set_bar_leds(bar_leds::ALL_OFF);
    delay.delay_ms(config.blink_half_period_ms);
    PatternOutcome::Completed
}

fn ring(
    hw: &mut (impl InputPort + OutputPort),
    delay: &mut impl DelayNs,
    config: &BoardConfig,
) -> PatternOutcome {
    hw.set_status_led(false);
    hw.set_rgb_led(RgbColour::Off);

    for position in 0..8 {
        let latched = hw.set_bar_leds(1 << position);
        delay.delay_ms(config.ring_step_ms);
        if !still_selected(hw, Pattern::Ring) {
            return PatternOutcome::Aborted { bar: latched };
        }
    }
    PatternOutcome::Completed
}

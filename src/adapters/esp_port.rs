//! ESP32-S3 port adapter.
//!
//! Presents up to eight physical GPIOs as one logical 8-bit [`GpioPort`],
//! using raw ESP-IDF GPIO driver calls.  Bit n of the logical port is
//! routed to `map[n]` (see [`pins`](crate::pins)); unmapped bits read 0
//! and ignore writes.
//!
//! Register semantics are emulated per pin:
//!
//! - outputs run in `INPUT_OUTPUT` mode so the pad level can be read back;
//! - the output latch doubles as pull direction for pulled inputs, so a
//!   cleared latch bit on a pulled input selects pull-down;
//! - "high" drive strength is `GPIO_DRIVE_CAP_3`, "normal" the IDF default
//!   `GPIO_DRIVE_CAP_2`.
//!
//! Only construction can fail.  After that, every per-pin call that the
//! driver rejects is logged and skipped.

use esp_idf_svc::sys::*;
use log::{debug, warn};

use crate::drivers::port::{Direction, DriveStrength, GpioPort};
use crate::error::{Error, Result};
use crate::pins::PortMap;

pub struct EspPort {
    name: &'static str,
    map: PortMap,
    /// Output latch (emulated `OUT` register).
    latch: u8,
    /// Bits currently configured as outputs.
    outputs: u8,
    /// Bits with the internal pull enabled.
    pulled: u8,
}

impl EspPort {
    /// Claim every mapped GPIO and reset it to a floating input.
    pub fn new(name: &'static str, map: PortMap) -> Result<Self> {
        for gpio in map.iter().flatten().copied() {
            // SAFETY: plain driver calls on a pin number; the driver
            // validates the number and reports it through the return code.
            let ret = unsafe { gpio_reset_pin(gpio) };
            if ret != ESP_OK as i32 {
                return Err(Error::GpioConfig { gpio, code: ret });
            }
            let ret = unsafe { gpio_set_pull_mode(gpio, gpio_pull_mode_t_GPIO_FLOATING) };
            if ret != ESP_OK as i32 {
                return Err(Error::GpioConfig { gpio, code: ret });
            }
        }
        debug!("esp_port: {} claimed {:?}", name, map);
        Ok(Self {
            name,
            map,
            latch: 0,
            outputs: 0,
            pulled: 0,
        })
    }

    fn pins(&self, mask: u8) -> impl Iterator<Item = (u8, i32)> + '_ {
        self.map
            .iter()
            .enumerate()
            .filter_map(move |(bit, gpio)| {
                let bit = 1u8 << bit;
                gpio.filter(|_| mask & bit != 0).map(|gpio| (bit, gpio))
            })
    }

    fn check(&self, gpio: i32, what: &str, ret: esp_err_t) {
        if ret != ESP_OK as i32 {
            warn!("esp_port: {} GPIO {} {} failed (rc={})", self.name, gpio, what, ret);
        }
    }

    fn apply_pull(&self, bit: u8, gpio: i32) {
        let mode = if self.latch & bit != 0 {
            gpio_pull_mode_t_GPIO_PULLUP_ONLY
        } else {
            gpio_pull_mode_t_GPIO_PULLDOWN_ONLY
        };
        // SAFETY: pin was claimed in `new`.
        self.check(gpio, "pull", unsafe { gpio_set_pull_mode(gpio, mode) });
    }

    fn apply_level(&self, bit: u8, gpio: i32) {
        let level = u32::from(self.latch & bit != 0);
        // SAFETY: pin was claimed in `new` and is configured as output.
        self.check(gpio, "level", unsafe { gpio_set_level(gpio, level) });
    }

    fn pad_level(gpio: i32) -> bool {
        // SAFETY: read-only register access on a claimed pin.
        (unsafe { gpio_get_level(gpio) }) != 0
    }
}

impl GpioPort for EspPort {
    fn select_gpio(&mut self, mask: u8) {
        for (_, gpio) in self.pins(mask) {
            // SAFETY: pin was claimed in `new`.
            self.check(gpio, "reset", unsafe { gpio_reset_pin(gpio) });
            self.check(gpio, "float", unsafe {
                gpio_set_pull_mode(gpio, gpio_pull_mode_t_GPIO_FLOATING)
            });
        }
        self.outputs &= !mask;
        self.pulled &= !mask;
    }

    fn set_direction(&mut self, mask: u8, direction: Direction) {
        let mode = match direction {
            Direction::Output => gpio_mode_t_GPIO_MODE_INPUT_OUTPUT,
            Direction::Input => gpio_mode_t_GPIO_MODE_INPUT,
        };
        for (bit, gpio) in self.pins(mask) {
            // SAFETY: pin was claimed in `new`.
            self.check(gpio, "direction", unsafe { gpio_set_direction(gpio, mode) });
            match direction {
                Direction::Output => self.apply_level(bit, gpio),
                Direction::Input if self.pulled & bit != 0 => self.apply_pull(bit, gpio),
                Direction::Input => {}
            }
        }
        match direction {
            Direction::Output => self.outputs |= mask,
            Direction::Input => self.outputs &= !mask,
        }
    }

    fn enable_pull(&mut self, mask: u8) {
        self.pulled |= mask;
        for (bit, gpio) in self.pins(mask) {
            self.apply_pull(bit, gpio);
        }
    }

    fn set_drive_strength(&mut self, mask: u8, strength: DriveStrength) {
        let cap = match strength {
            DriveStrength::High => gpio_drive_cap_t_GPIO_DRIVE_CAP_3,
            DriveStrength::Normal => gpio_drive_cap_t_GPIO_DRIVE_CAP_2,
        };
        for (_, gpio) in self.pins(mask) {
            // SAFETY: pin was claimed in `new`.
            self.check(gpio, "drive", unsafe { gpio_set_drive_capability(gpio, cap) });
        }
    }

    fn read_input(&self) -> u8 {
        self.pins(0xFF)
            .filter(|&(_, gpio)| Self::pad_level(gpio))
            .fold(0, |acc, (bit, _)| acc | bit)
    }

    fn read_output(&self) -> u8 {
        let pads = self
            .pins(self.outputs)
            .filter(|&(_, gpio)| Self::pad_level(gpio))
            .fold(0, |acc, (bit, _)| acc | bit);
        pads | (self.latch & !self.outputs)
    }

    fn write_output(&mut self, value: u8) {
        let changed = self.latch ^ value;
        self.latch = value;
        for (bit, gpio) in self.pins(0xFF) {
            if self.outputs & bit != 0 {
                self.apply_level(bit, gpio);
            } else if self.pulled & bit != 0 && changed & bit != 0 {
                self.apply_pull(bit, gpio);
            }
        }
    }
}

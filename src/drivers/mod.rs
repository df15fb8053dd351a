//! Port drivers, pin configuration, and the pattern engine.

pub mod bar_leds;
pub mod button;
pub mod hw_init;
pub mod led_patterns;
pub mod port;
pub mod rgb_led;
pub mod sim_port;
pub mod status_led;
pub mod switches;

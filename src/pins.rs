//! Port / bit assignments for the GPIO lab board.
//!
//! Drivers take every mask from here.  The logical layout (port number +
//! bit) is the board's wiring contract; the `PORTn_GPIOS` tables route each
//! logical bit onto a physical ESP32-S3 GPIO.

/// Physical routing for one logical 8-bit port.  Index = bit position.
/// `None` marks a bit with nothing attached.
pub type PortMap = [Option<i32>; 8];

// ---------------------------------------------------------------------------
// Port 1 — status LED + user buttons (shared output register)
// ---------------------------------------------------------------------------

/// Single-colour status LED, active high.
pub const STATUS_LED_MASK: u8 = 0x01;
/// Button 1, active low (internal pull-up).
pub const BUTTON1_MASK: u8 = 0x02;
/// Button 2, active low (internal pull-up).
pub const BUTTON2_MASK: u8 = 0x10;
/// Both button lines.
pub const BUTTONS_MASK: u8 = BUTTON1_MASK | BUTTON2_MASK;

pub const PORT1_GPIOS: PortMap = [
    Some(38), // bit 0: status LED
    Some(0),  // bit 1: button 1 (BOOT key on the devkit)
    None,
    None,
    Some(14), // bit 4: button 2
    None,
    None,
    None,
];

// ---------------------------------------------------------------------------
// Port 2 — tri-colour LED
// ---------------------------------------------------------------------------

pub const RGB_RED_MASK: u8 = 0x01;
pub const RGB_GREEN_MASK: u8 = 0x02;
pub const RGB_BLUE_MASK: u8 = 0x04;
pub const RGB_LED_MASK: u8 = RGB_RED_MASK | RGB_GREEN_MASK | RGB_BLUE_MASK;

pub const PORT2_GPIOS: PortMap = [Some(11), Some(12), Some(13), None, None, None, None, None];

// ---------------------------------------------------------------------------
// Port 9 — 8-LED bar display (whole port, active high)
// ---------------------------------------------------------------------------

pub const BAR_LEDS_MASK: u8 = 0xFF;

pub const PORT9_GPIOS: PortMap = [
    Some(4),
    Some(5),
    Some(6),
    Some(7),
    Some(15),
    Some(16),
    Some(17),
    Some(18),
];

// ---------------------------------------------------------------------------
// Port 10 — slide switches (low nibble, active high)
// ---------------------------------------------------------------------------

pub const SWITCHES_MASK: u8 = 0x0F;

pub const PORT10_GPIOS: PortMap = [Some(8), Some(9), Some(10), Some(21), None, None, None, None];

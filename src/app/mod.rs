//! Application core — pattern orchestration, zero direct I/O.
//!
//! The control loop talks to the board only through the **port traits**
//! defined in [`ports`], keeping this layer fully testable without real
//! peripherals.

pub mod events;
pub mod ports;
pub mod service;

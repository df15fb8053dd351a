//! In-memory port model for host builds.
//!
//! Mirrors the register block of a real port closely enough that the
//! drivers behave the same way against it:
//!
//! - `IN` reflects externally driven levels on input pins, the output latch
//!   on output pins, and the pull direction on undriven pulled inputs.
//!   Floating inputs read 0.
//! - Pull direction is taken from `OUT`, so clobbering `OUT` bits of a
//!   pulled input flips its pull-up into a pull-down.
//!
//! `SimPort` is a cheap clonable handle; all clones share one register
//! block.  Tests keep a clone to drive inputs (`press`, `drive_input`) while
//! the hardware adapter owns another.

use std::cell::RefCell;
use std::rc::Rc;

use super::port::{Direction, DriveStrength, GpioPort};

/// Raw register contents of a simulated port.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimRegisters {
    pub sel0: u8,
    pub sel1: u8,
    pub dir: u8,
    pub ren: u8,
    pub ds: u8,
    pub out: u8,
    /// Pins with an external driver attached.
    pub driven: u8,
    /// Levels of the externally driven pins.
    pub levels: u8,
}

#[derive(Debug, Default)]
struct SimState {
    regs: SimRegisters,
    writes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct SimPort {
    state: Rc<RefCell<SimState>>,
}

impl SimPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from explicit register contents (e.g. a peripheral function
    /// left selected by a bootloader).
    pub fn with_registers(regs: SimRegisters) -> Self {
        Self {
            state: Rc::new(RefCell::new(SimState {
                regs,
                writes: Vec::new(),
            })),
        }
    }

    pub fn registers(&self) -> SimRegisters {
        self.state.borrow().regs.clone()
    }

    /// Drive the masked pins externally to the bits of `levels`.
    pub fn drive_input(&self, mask: u8, levels: u8) {
        let mut state = self.state.borrow_mut();
        state.regs.driven |= mask;
        state.regs.levels = (state.regs.levels & !mask) | (levels & mask);
    }

    /// Disconnect the external driver from the masked pins.
    pub fn release_input(&self, mask: u8) {
        let mut state = self.state.borrow_mut();
        state.regs.driven &= !mask;
        state.regs.levels &= !mask;
    }

    /// Model an active-low push-button closing to ground.
    pub fn press(&self, mask: u8) {
        self.drive_input(mask, 0);
    }

    /// Model an active-low push-button opening; the line floats back to
    /// whatever the pull resistor gives it.
    pub fn release(&self, mask: u8) {
        self.release_input(mask);
    }

    /// Every value latched through [`GpioPort::write_output`], oldest first.
    pub fn output_history(&self) -> Vec<u8> {
        self.state.borrow().writes.clone()
    }

    pub fn clear_history(&self) {
        self.state.borrow_mut().writes.clear();
    }
}

impl GpioPort for SimPort {
    fn select_gpio(&mut self, mask: u8) {
        let mut state = self.state.borrow_mut();
        state.regs.sel0 &= !mask;
        state.regs.sel1 &= !mask;
    }

    fn set_direction(&mut self, mask: u8, direction: Direction) {
        let mut state = self.state.borrow_mut();
        match direction {
            Direction::Output => state.regs.dir |= mask,
            Direction::Input => state.regs.dir &= !mask,
        }
    }

    fn enable_pull(&mut self, mask: u8) {
        self.state.borrow_mut().regs.ren |= mask;
    }

    fn set_drive_strength(&mut self, mask: u8, strength: DriveStrength) {
        let mut state = self.state.borrow_mut();
        match strength {
            DriveStrength::High => state.regs.ds |= mask,
            DriveStrength::Normal => state.regs.ds &= !mask,
        }
    }

    fn read_input(&self) -> u8 {
        let regs = &self.state.borrow().regs;
        let outputs = regs.out & regs.dir;
        let inputs = !regs.dir;
        let driven = regs.levels & regs.driven & inputs;
        let pulled = regs.out & regs.ren & !regs.driven & inputs;
        outputs | driven | pulled
    }

    fn read_output(&self) -> u8 {
        self.state.borrow().regs.out
    }

    fn write_output(&mut self, value: u8) {
        let mut state = self.state.borrow_mut();
        state.regs.out = value;
        state.writes.push(value);
    }
}

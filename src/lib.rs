//! GPIO pattern board firmware library.
//!
//! Exposes the pure-logic modules for integration testing on the host.
//! All ESP-IDF-specific code is behind the `espidf` feature.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod pins;

mod error;

pub use error::{Error, Result};

//! GPIO pattern board — Main Entry Point
//!
//! Single polling loop, no interrupts, no scheduler.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                    │
//! │                                                           │
//! │  EspPort ×4 ──▶ HardwareAdapter      LogEventSink         │
//! │                 (Input+Output)       (EventSink)          │
//! │                                                           │
//! │  ──────────────── Port Trait Boundary ──────────────      │
//! │                                                           │
//! │  ┌─────────────────────────────────────────────────┐      │
//! │  │        ControlService (pure logic)              │      │
//! │  │  read inputs · select pattern · run pattern     │      │
//! │  └─────────────────────────────────────────────────┘      │
//! │                                                           │
//! │  FreeRtos (DelayNs): blocking millisecond waits           │
//! └───────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use log::info;

use gpio_patterns::adapters::esp_port::EspPort;
use gpio_patterns::adapters::hardware::HardwareAdapter;
use gpio_patterns::adapters::log_sink::LogEventSink;
use gpio_patterns::app::service::ControlService;
use gpio_patterns::config::BoardConfig;
use gpio_patterns::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap (clocks come up before main) ─────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("GPIO pattern board v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Timing config ──────────────────────────────────────
    let config = BoardConfig::default();
    config.validate()?;

    // ── 3. Claim ports and configure pins ─────────────────────
    let mut hw = HardwareAdapter::new(
        EspPort::new("P1", pins::PORT1_GPIOS)?,
        EspPort::new("P2", pins::PORT2_GPIOS)?,
        EspPort::new("P9", pins::PORT9_GPIOS)?,
        EspPort::new("P10", pins::PORT10_GPIOS)?,
    );
    hw.init();

    // ── 4. Control loop ───────────────────────────────────────
    let mut sink = LogEventSink::new();
    let mut service = ControlService::new(config);
    service.start(&mut sink);

    info!("System ready. Entering control loop.");
    service.run(&mut hw, &mut FreeRtos, &mut sink)
}

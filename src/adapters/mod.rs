//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements              | Connects to            |
//! |-------------|-------------------------|------------------------|
//! | `esp_port`  | GpioPort                | ESP32-S3 GPIO matrix   |
//! | `hardware`  | InputPort, OutputPort   | Four board GpioPorts   |
//! | `log_sink`  | EventSink               | `log` facade           |

#[cfg(feature = "espidf")]
pub mod esp_port;
pub mod hardware;
pub mod log_sink;

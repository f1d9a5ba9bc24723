//! # Distance Graph
//!
//! Live chart of distance readings streamed by a sensor over a serial port.
//! The sensor prints one `Distance: <float>` line per measurement; each
//! accepted reading is stored negated in a history capped at
//! [`types::MAX_HISTORY_LEN`] values and drawn as a line chart.
//!
//! ## Architecture
//!
//! - **Backend**: port discovery, the serial [`backend::LineSource`], and the
//!   per-tick decode/parse/store step
//! - **Frontend**: eframe/egui window with an egui_plot chart and status bar
//! - **Config**: TOML settings loaded once at startup
//!
//! Everything runs on the UI thread; a tick is a blocking read followed by a
//! buffer update and, for an accepted sample, a new chart snapshot.
//!
//! ## Example
//!
//! ```ignore
//! use distance_graph::{
//!     backend::{ensure_port_available, list_serial_ports, SerialConnection},
//!     config::AppConfig,
//!     frontend::DistanceGraphApp,
//! };
//!
//! let config = AppConfig::load_or_default();
//! ensure_port_available(&list_serial_ports(), &config.serial.port_name)?;
//! let connection = SerialConnection::open(&config.serial.port_name)?;
//! let app = DistanceGraphApp::new(Box::new(connection), &config.serial.port_name, &config);
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod frontend;
pub mod types;

// Re-export commonly used types
pub use backend::{LineSource, SerialConnection};
pub use config::AppConfig;
pub use error::{DistanceGraphError, Result};
pub use frontend::DistanceGraphApp;
pub use types::{History, TickOutcome, MAX_HISTORY_LEN};

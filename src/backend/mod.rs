//! Backend module: everything between the serial device and the history
//!
//! # Components
//!
//! - [`ports`] - Startup discovery of serial devices
//! - [`serial`] - [`LineSource`] trait and the [`SerialConnection`] implementation
//! - [`acquisition`] - Decode/parse/store step run on every tick
//!
//! # Example
//!
//! ```ignore
//! use distance_graph::backend::{ensure_port_available, list_serial_ports, tick, SerialConnection};
//! use distance_graph::types::History;
//!
//! let ports = list_serial_ports();
//! ensure_port_available(&ports, "COM6")?;
//!
//! let mut connection = SerialConnection::open("COM6")?;
//! let mut history = History::new();
//! let (outcome, _bytes) = tick(&mut connection, &mut history)?;
//! ```

pub mod acquisition;
pub mod ports;
pub mod serial;

pub use acquisition::{apply_line, decode_line, parse_distance, tick, DISTANCE_PREFIX};
pub use ports::{ensure_port_available, list_serial_ports};
pub use serial::{read_line_with_timeout, LineSource, SerialConnection};

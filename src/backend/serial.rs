//! Line-oriented access to the serial device
//!
//! [`LineSource`] is the seam between the acquisition step and the hardware:
//! [`SerialConnection`] implements it over a real port, tests script it.

use crate::config::{BAUD_RATE, READ_TIMEOUT};
use crate::error::{Result, ResultExt};
use serialport::SerialPort;
use std::io::{self, BufRead, BufReader};

/// Something that yields newline-terminated records
#[cfg_attr(test, mockall::automock)]
pub trait LineSource {
    /// Read bytes up to and including `\n`, or whatever arrived before the
    /// read timeout. An empty vector means nothing arrived.
    fn read_line(&mut self) -> io::Result<Vec<u8>>;
}

/// An open serial port read one line at a time
pub struct SerialConnection {
    port_name: String,
    reader: BufReader<Box<dyn SerialPort>>,
}

impl SerialConnection {
    /// Open `port_name` at the sensor's fixed baud rate and read timeout
    pub fn open(port_name: &str) -> Result<Self> {
        let port = serialport::new(port_name, BAUD_RATE)
            .timeout(READ_TIMEOUT)
            .open()
            .with_context(|| format!("Failed to open {}", port_name))?;

        tracing::info!(
            "Opened {} at {} baud (timeout {:?})",
            port_name,
            BAUD_RATE,
            READ_TIMEOUT
        );

        Ok(Self {
            port_name: port_name.to_string(),
            reader: BufReader::new(port),
        })
    }

    pub fn port_name(&self) -> &str {
        &self.port_name
    }
}

impl LineSource for SerialConnection {
    fn read_line(&mut self) -> io::Result<Vec<u8>> {
        read_line_with_timeout(&mut self.reader)
    }
}

/// Read one record, treating a timeout as the end of a partial line
///
/// Bytes consumed before the timeout stay in `buf`, so a partial record is
/// returned rather than lost.
pub fn read_line_with_timeout<R: BufRead>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    match reader.read_until(b'\n', &mut buf) {
        Ok(_) => Ok(buf),
        Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(buf),
        Err(e) => Err(e),
    }
}

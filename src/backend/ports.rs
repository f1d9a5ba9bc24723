//! Serial port discovery
//!
//! Enumeration happens once at startup. An empty result and a missing target
//! are both fatal to the caller.

use crate::error::{DistanceGraphError, Result};

/// Names of the serial devices currently present on the host
///
/// Enumeration failures are logged and reported as "no ports".
pub fn list_serial_ports() -> Vec<String> {
    match serialport::available_ports() {
        Ok(ports) => ports.into_iter().map(|p| p.port_name).collect(),
        Err(e) => {
            tracing::warn!("Serial port enumeration failed: {}", e);
            Vec::new()
        }
    }
}

/// Check that `target` is among the discovered ports
pub fn ensure_port_available(available: &[String], target: &str) -> Result<()> {
    if available.is_empty() {
        return Err(DistanceGraphError::NoPortsFound);
    }

    if !available.iter().any(|p| p == target) {
        return Err(DistanceGraphError::PortUnavailable {
            port: target.to_string(),
        });
    }

    Ok(())
}

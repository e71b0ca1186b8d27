//! Error types for interface operations.
//!
//! This module defines the errors a transport can raise while opening,
//! closing, writing to or reading from the brick. The registry never
//! inspects these; they propagate to the caller unchanged.

use crate::types::InterfaceKind;

/// Result type alias for interface operations.
pub type Result<T> = std::result::Result<T, InterfaceError>;

/// Errors that can occur during interface operations.
#[derive(Debug, thiserror::Error)]
pub enum InterfaceError {
    /// No brick was found at the configured address.
    #[error("Device not found: {device}")]
    DeviceNotFound { device: String },

    /// I/O was attempted on a closed interface.
    #[error("{kind} interface is not connected")]
    NotConnected { kind: InterfaceKind },

    /// The driver accepted fewer bytes than were handed to it.
    #[error("Short write: {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },

    /// The driver returned fewer bytes than were requested.
    #[error("Short read: {read} of {expected} bytes")]
    ShortRead { read: usize, expected: usize },

    /// libusb failure.
    #[error("USB error: {0}")]
    Usb(#[from] rusb::Error),

    /// Serial driver failure.
    #[error("Serial error: {0}")]
    Serial(#[from] serialport::Error),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InterfaceError {
    /// Create a new device not found error.
    pub fn device_not_found(device: impl Into<String>) -> Self {
        Self::DeviceNotFound {
            device: device.into(),
        }
    }

    /// Create a new not connected error.
    pub fn not_connected(kind: InterfaceKind) -> Self {
        Self::NotConnected { kind }
    }

    /// Create a new short write error.
    pub fn short_write(written: usize, expected: usize) -> Self {
        Self::ShortWrite { written, expected }
    }

    /// Create a new short read error.
    pub fn short_read(read: usize, expected: usize) -> Self {
        Self::ShortRead { read, expected }
    }
}

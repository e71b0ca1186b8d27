//! Transport configuration.
//!
//! Every field has a default matching a stock NXT brick, so an empty
//! configuration document deserializes to a working USB setup.

use crate::types::InterfaceKind;
use nxt_core::constants::{
    DEFAULT_BAUD_RATE, DEFAULT_IO_TIMEOUT_MS, DEFAULT_SERIAL_PATH, USB_IN_ENDPOINT, USB_INTERFACE,
    USB_OUT_ENDPOINT, USB_PRODUCT_ID, USB_VENDOR_ID,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the interface a brick is reached through.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceConfig {
    /// Transport to build.
    pub kind: InterfaceKind,

    /// Settings used when `kind` is USB.
    pub usb: UsbConfig,

    /// Settings used when `kind` is serial.
    pub serial: SerialConfig,
}

impl InterfaceConfig {
    /// Default configuration for the given transport.
    pub fn for_kind(kind: InterfaceKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }
}

/// USB transport settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsbConfig {
    pub vendor_id: u16,
    pub product_id: u16,

    /// Interface number claimed on connect.
    pub interface: u8,

    /// Bulk endpoint written to.
    pub out_endpoint: u8,

    /// Bulk endpoint read from.
    pub in_endpoint: u8,

    /// Per-transfer timeout in milliseconds.
    pub timeout_ms: u64,
}

impl UsbConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for UsbConfig {
    fn default() -> Self {
        Self {
            vendor_id: USB_VENDOR_ID,
            product_id: USB_PRODUCT_ID,
            interface: USB_INTERFACE,
            out_endpoint: USB_OUT_ENDPOINT,
            in_endpoint: USB_IN_ENDPOINT,
            timeout_ms: DEFAULT_IO_TIMEOUT_MS,
        }
    }
}

/// Serial (and Bluetooth SPP) transport settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialConfig {
    /// Device path, e.g. `/dev/rfcomm0` or `COM5`.
    pub path: String,

    pub baud_rate: u32,

    /// Read/write timeout in milliseconds.
    pub timeout_ms: u64,
}

impl SerialConfig {
    /// Serial settings for the given device path, other fields defaulted.
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_SERIAL_PATH.to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
            timeout_ms: DEFAULT_IO_TIMEOUT_MS,
        }
    }
}

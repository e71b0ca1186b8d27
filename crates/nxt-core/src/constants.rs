//! Core constants for the NXT brick wire protocol.
//!
//! This module defines the protocol-level byte values used when composing
//! telegrams for the LEGO Mindstorms NXT brick, along with the transport
//! defaults used to reach the brick over USB or a Bluetooth serial link.
//!
//! # Telegram Header
//!
//! Every telegram sent to the brick starts with a command-type byte followed
//! by a command byte. Commands that address a connector carry a port byte in
//! their payload:
//!
//! ```text
//! <TYPE><COMMAND><PORT>...
//!  ^^^^           ^^^^
//!  COMMAND_TYPES  PORTS
//! ```
//!
//! # Port Numbering
//!
//! The brick has three actuator ports (`A`, `B`, `C`) and four sensor ports
//! (`1`-`4`). Both groups are numbered from zero on the wire, so actuator and
//! sensor names alias the same byte values:
//!
//! | Actuator | Sensor | Byte |
//! |----------|--------|------|
//! | `a`      | `one`  | 0x00 |
//! | `b`      | `two`  | 0x01 |
//! | `c`      | `three`| 0x02 |
//! | -        | `four` | 0x03 |
//! | `all`    | -      | 0xFF |
//!
//! # Usage
//!
//! ```
//! use nxt_core::constants::*;
//!
//! assert_eq!(PORT_A, PORT_ONE);
//! assert_eq!(DIRECT_COMMAND | NO_REPLY_FLAG, 0x80);
//! ```
//!
//! # Protocol Compliance
//!
//! These values are fixed by the brick firmware. Modifying them breaks
//! compatibility with every NXT unit.

// ============================================================================
// Command Types
// ============================================================================

/// Command-type byte for direct commands (actuation and sensor queries).
pub const DIRECT_COMMAND: u8 = 0x00;

/// Command-type byte for system commands (file system, firmware, module access).
pub const SYSTEM_COMMAND: u8 = 0x01;

/// Command-type byte carried by reply telegrams returned by the brick.
pub const REPLY_COMMAND: u8 = 0x02;

/// Bit OR'ed into a direct or system command-type byte to suppress the reply.
///
/// # Examples
///
/// ```
/// use nxt_core::constants::{NO_REPLY_FLAG, SYSTEM_COMMAND};
///
/// assert_eq!(SYSTEM_COMMAND | NO_REPLY_FLAG, 0x81);
/// ```
pub const NO_REPLY_FLAG: u8 = 0x80;

/// Command-type table, keyed by symbolic category name.
///
/// The table is the named view of [`crate::CommandType`]; both always agree.
pub const COMMAND_TYPES: [(&str, u8); 3] = [
    ("direct", DIRECT_COMMAND),
    ("system", SYSTEM_COMMAND),
    ("reply", REPLY_COMMAND),
];

// ============================================================================
// Ports
// ============================================================================

/// Actuator port A.
pub const PORT_A: u8 = 0x00;

/// Actuator port B.
pub const PORT_B: u8 = 0x01;

/// Actuator port C.
pub const PORT_C: u8 = 0x02;

/// Sensor port 1.
pub const PORT_ONE: u8 = 0x00;

/// Sensor port 2.
pub const PORT_TWO: u8 = 0x01;

/// Sensor port 3.
pub const PORT_THREE: u8 = 0x02;

/// Sensor port 4. Has no actuator alias.
pub const PORT_FOUR: u8 = 0x03;

/// Broadcast port addressing every actuator at once.
///
/// Only valid as a telegram field; nothing can be attached to it.
pub const PORT_ALL: u8 = 0xFF;

/// Port-byte table, keyed by symbolic port name, aliases included.
///
/// # Examples
///
/// ```
/// use nxt_core::constants::PORTS;
///
/// let byte = PORTS.iter().find(|(name, _)| *name == "three").map(|(_, b)| *b);
/// assert_eq!(byte, Some(0x02));
/// ```
pub const PORTS: [(&str, u8); 8] = [
    ("a", PORT_A),
    ("b", PORT_B),
    ("c", PORT_C),
    ("one", PORT_ONE),
    ("two", PORT_TWO),
    ("three", PORT_THREE),
    ("four", PORT_FOUR),
    ("all", PORT_ALL),
];

/// Number of ports a handler can be attached to (3 actuator + 4 sensor).
pub const ATTACHABLE_PORT_COUNT: usize = 7;

// ============================================================================
// USB Transport
// ============================================================================

/// LEGO USB vendor ID.
pub const USB_VENDOR_ID: u16 = 0x0694;

/// NXT brick USB product ID.
pub const USB_PRODUCT_ID: u16 = 0x0002;

/// USB interface number claimed on the brick.
pub const USB_INTERFACE: u8 = 0;

/// Bulk OUT endpoint (host to brick).
pub const USB_OUT_ENDPOINT: u8 = 0x01;

/// Bulk IN endpoint (brick to host).
pub const USB_IN_ENDPOINT: u8 = 0x82;

// ============================================================================
// Serial / Bluetooth Transport
// ============================================================================

/// Default serial device exposing the brick's Bluetooth SPP channel.
pub const DEFAULT_SERIAL_PATH: &str = "/dev/rfcomm0";

/// Default serial baud rate.
///
/// The Bluetooth SPP link ignores it, but the driver requires one.
pub const DEFAULT_BAUD_RATE: u32 = 57_600;

// ============================================================================
// Timeouts
// ============================================================================

/// Default read/write timeout handed to the transport driver (milliseconds).
///
/// # Value: 1000ms
///
/// ```
/// use nxt_core::constants::DEFAULT_IO_TIMEOUT_MS;
/// use std::time::Duration;
///
/// assert_eq!(Duration::from_millis(DEFAULT_IO_TIMEOUT_MS).as_secs(), 1);
/// ```
pub const DEFAULT_IO_TIMEOUT_MS: u64 = 1000;

//! Transport layer for talking to an NXT brick.
//!
//! This crate provides the byte pipes a brick controller is built on: USB via
//! libusb, serial (which also covers the Bluetooth SPP link), and an
//! in-memory mock. All of them implement the synchronous [`Interface`] trait
//! and are dispatched through the [`AnyInterface`] enum so the controller can
//! pick one by name at runtime.
//!
//! # Design
//!
//! - **Synchronous**: the brick answers one command at a time, so every call
//!   blocks until the driver returns.
//! - **Opaque**: interfaces move bytes. Telegram framing and payload
//!   interpretation live above this crate.
//! - **Lazy**: constructing an interface performs no I/O; `connect` opens it.
//!
//! # Examples
//!
//! ```
//! use nxt_interface::{AnyInterface, Interface, InterfaceConfig, InterfaceKind};
//!
//! # fn main() -> nxt_interface::Result<()> {
//! let config = InterfaceConfig::for_kind(InterfaceKind::Mock);
//! let mut interface = AnyInterface::from_config(&config);
//!
//! interface.connect()?;
//! interface.write(&[0x80, 0x03, 0xF4, 0x01, 0xF4, 0x01])?;
//! interface.disconnect()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod devices;
pub mod error;
pub mod mock;
pub mod serial;
pub mod traits;
pub mod types;
pub mod usb;

pub use config::{InterfaceConfig, SerialConfig, UsbConfig};
pub use devices::{AnyInterface, SharedInterface};
pub use error::{InterfaceError, Result};
pub use mock::MockInterface;
pub use serial::SerialInterface;
pub use traits::Interface;
pub use types::{InterfaceKind, IntoInterfaceKind};
pub use usb::UsbInterface;

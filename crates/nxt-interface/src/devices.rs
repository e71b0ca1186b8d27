//! Enum wrapper for interface dispatch.
//!
//! The controller owns exactly one interface but does not know its concrete
//! transport until the caller names a kind at runtime. [`AnyInterface`]
//! closes over the known transports so the controller stores a single
//! concrete type, and [`SharedInterface`] is how that one connection is
//! handed to every attached handler.
//!
//! # Examples
//!
//! ```
//! use nxt_interface::devices::AnyInterface;
//! use nxt_interface::traits::Interface;
//! use nxt_interface::{InterfaceConfig, InterfaceKind};
//!
//! let interface = AnyInterface::from_config(&InterfaceConfig::for_kind(InterfaceKind::Mock));
//! assert_eq!(interface.kind(), InterfaceKind::Mock);
//! assert!(!interface.is_connected());
//! ```

use crate::config::InterfaceConfig;
use crate::mock::MockInterface;
use crate::serial::SerialInterface;
use crate::traits::Interface;
use crate::types::InterfaceKind;
use crate::usb::UsbInterface;
use crate::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// The controller's single connection, shared with every attached handler.
///
/// Single-threaded by construction: `Rc` is not `Send`, so the half-duplex
/// link cannot be driven from two threads without the caller serializing.
pub type SharedInterface = Rc<RefCell<AnyInterface>>;

/// Enum wrapper for interface dispatch.
#[derive(Debug)]
#[non_exhaustive]
pub enum AnyInterface {
    /// USB connection.
    Usb(UsbInterface),

    /// Serial or Bluetooth SPP connection.
    Serial(SerialInterface),

    /// Mock interface for development and testing.
    Mock(MockInterface),
}

impl AnyInterface {
    /// Build the interface selected by `config.kind`. Performs no I/O.
    pub fn from_config(config: &InterfaceConfig) -> Self {
        match config.kind {
            InterfaceKind::Usb => Self::Usb(UsbInterface::new(config.usb.clone())),
            InterfaceKind::Serial => Self::Serial(SerialInterface::new(config.serial.clone())),
            InterfaceKind::Mock => Self::Mock(MockInterface::new()),
        }
    }

    /// Wrap the interface for sharing between a controller and its handlers.
    pub fn into_shared(self) -> SharedInterface {
        Rc::new(RefCell::new(self))
    }

    /// The mock interface, if this is one.
    pub fn as_mock(&self) -> Option<&MockInterface> {
        match self {
            Self::Mock(mock) => Some(mock),
            _ => None,
        }
    }

    /// The mock interface, mutably, if this is one.
    pub fn as_mock_mut(&mut self) -> Option<&mut MockInterface> {
        match self {
            Self::Mock(mock) => Some(mock),
            _ => None,
        }
    }
}

impl From<UsbInterface> for AnyInterface {
    fn from(interface: UsbInterface) -> Self {
        Self::Usb(interface)
    }
}

impl From<SerialInterface> for AnyInterface {
    fn from(interface: SerialInterface) -> Self {
        Self::Serial(interface)
    }
}

impl From<MockInterface> for AnyInterface {
    fn from(interface: MockInterface) -> Self {
        Self::Mock(interface)
    }
}

impl Interface for AnyInterface {
    fn connect(&mut self) -> Result<()> {
        match self {
            Self::Usb(interface) => interface.connect(),
            Self::Serial(interface) => interface.connect(),
            Self::Mock(interface) => interface.connect(),
        }
    }

    fn disconnect(&mut self) -> Result<()> {
        match self {
            Self::Usb(interface) => interface.disconnect(),
            Self::Serial(interface) => interface.disconnect(),
            Self::Mock(interface) => interface.disconnect(),
        }
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        match self {
            Self::Usb(interface) => interface.write(data),
            Self::Serial(interface) => interface.write(data),
            Self::Mock(interface) => interface.write(data),
        }
    }

    fn read(&mut self, len: usize) -> Result<Vec<u8>> {
        match self {
            Self::Usb(interface) => interface.read(len),
            Self::Serial(interface) => interface.read(len),
            Self::Mock(interface) => interface.read(len),
        }
    }

    fn is_connected(&self) -> bool {
        match self {
            Self::Usb(interface) => interface.is_connected(),
            Self::Serial(interface) => interface.is_connected(),
            Self::Mock(interface) => interface.is_connected(),
        }
    }

    fn kind(&self) -> InterfaceKind {
        match self {
            Self::Usb(interface) => interface.kind(),
            Self::Serial(interface) => interface.kind(),
            Self::Mock(interface) => interface.kind(),
        }
    }
}

//! Interface kind selection.
//!
//! A brick is reached over one of a small, fixed set of transports. Callers
//! name the transport symbolically when building a controller; unknown names
//! are rejected before any transport is constructed.

use nxt_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transport used to reach the brick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceKind {
    /// Direct USB connection.
    #[default]
    Usb,

    /// Serial device, including the Bluetooth SPP channel.
    #[serde(alias = "bluetooth")]
    Serial,

    /// In-memory interface for development and testing.
    Mock,
}

impl InterfaceKind {
    /// Resolve a transport by name.
    ///
    /// `bluetooth` is accepted as a name for the serial transport, since the
    /// brick's Bluetooth link is exposed by the host as a serial device.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInterface` for any other name.
    ///
    /// # Examples
    ///
    /// ```
    /// use nxt_interface::InterfaceKind;
    ///
    /// assert_eq!(InterfaceKind::from_name("usb").unwrap(), InterfaceKind::Usb);
    /// assert_eq!(InterfaceKind::from_name("bluetooth").unwrap(), InterfaceKind::Serial);
    /// assert!(InterfaceKind::from_name("foobar").is_err());
    /// ```
    pub fn from_name(name: &str) -> nxt_core::Result<Self> {
        match name {
            "usb" => Ok(Self::Usb),
            "serial" | "bluetooth" => Ok(Self::Serial),
            "mock" => Ok(Self::Mock),
            _ => Err(Error::InvalidInterface {
                kind: name.to_string(),
            }),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Usb => "usb",
            Self::Serial => "serial",
            Self::Mock => "mock",
        }
    }
}

impl fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for InterfaceKind {
    type Err = Error;

    fn from_str(s: &str) -> nxt_core::Result<Self> {
        InterfaceKind::from_name(s)
    }
}

/// Values convertible to an [`InterfaceKind`].
pub trait IntoInterfaceKind {
    fn into_interface_kind(self) -> nxt_core::Result<InterfaceKind>;
}

impl IntoInterfaceKind for InterfaceKind {
    fn into_interface_kind(self) -> nxt_core::Result<InterfaceKind> {
        Ok(self)
    }
}

impl IntoInterfaceKind for &str {
    fn into_interface_kind(self) -> nxt_core::Result<InterfaceKind> {
        InterfaceKind::from_name(self)
    }
}

impl IntoInterfaceKind for String {
    fn into_interface_kind(self) -> nxt_core::Result<InterfaceKind> {
        InterfaceKind::from_name(&self)
    }
}

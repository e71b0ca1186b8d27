//! Brick controller.
//!
//! This module provides [`NxtBrick`], which owns the connection to one
//! physical brick and the registry of handlers attached to its ports. It is
//! the only type callers and command builders interact with directly.
//!
//! # Architecture
//!
//! ```text
//!                 ┌──────────────────────────┐
//!  caller ──────► │ NxtBrick                 │
//!                 │  ├─ PortRegistry         │
//!                 │  │   a  b  c  1  2  3  4 │──► handlers
//!                 │  └─ SharedInterface ─────┼──► handlers (same Rc)
//!                 └───────────┬──────────────┘
//!                             ▼
//!                 USB / serial / mock interface
//! ```
//!
//! # Examples
//!
//! ```
//! use nxt_brick::{NxtBrick, PortHandler};
//! use nxt_interface::SharedInterface;
//!
//! struct Motor {
//!     port: u8,
//!     interface: SharedInterface,
//! }
//!
//! impl PortHandler for Motor {
//!     fn new(port: u8, interface: SharedInterface) -> Self {
//!         Self { port, interface }
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut brick = NxtBrick::new_with_setup("mock", |brick| {
//!         brick.attach::<Motor>("a", "left")?;
//!         brick.attach::<Motor>("c", "right")?;
//!         Ok(())
//!     })?;
//!
//!     brick.connect()?;
//!     assert_eq!(brick.handler::<Motor>("right").unwrap().port, 0x02);
//!     brick.disconnect()?;
//!     Ok(())
//! }
//! ```

use crate::handler::PortHandler;
use crate::registry::PortRegistry;
use nxt_core::{Identifier, IntoIdentifier, IntoPort, Port, Result};
use nxt_interface::{
    AnyInterface, Interface, InterfaceConfig, IntoInterfaceKind, SharedInterface,
};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Names on the controller's own surface, which identifiers may not shadow.
///
/// Covers every public method of [`NxtBrick`] and the seven port names.
pub const RESERVED_IDENTIFIERS: &[&str] = &[
    // Construction
    "new",
    "new_with_setup",
    "with_config",
    "from_interface",
    // Interface access
    "interface",
    "set_interface",
    "connect",
    "disconnect",
    // Registry
    "attach",
    "attach_with",
    "detach",
    "handler",
    "handler_mut",
    "port_handler",
    "port_handler_mut",
    "is_port_taken",
    "attached_ports",
    "port_identifiers",
    // Ports
    "a",
    "b",
    "c",
    "one",
    "two",
    "three",
    "four",
];

/// Controller for one physical brick.
pub struct NxtBrick {
    interface: SharedInterface,
    registry: PortRegistry,
}

// Adding a public method here means adding its name to
// `RESERVED_IDENTIFIERS` and to `test_reserved_identifiers_match_surface`.
impl NxtBrick {
    /// Create a brick reached through the named transport, using its default
    /// configuration. No I/O happens until [`NxtBrick::connect`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInterface` if `kind` names no known transport;
    /// no interface is constructed in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use nxt_brick::NxtBrick;
    ///
    /// assert!(NxtBrick::new("usb").is_ok());
    /// assert!(NxtBrick::new("foobar").is_err());
    /// ```
    pub fn new(kind: impl IntoInterfaceKind) -> Result<Self> {
        let kind = kind.into_interface_kind()?;
        Ok(Self::with_config(&InterfaceConfig::for_kind(kind)))
    }

    /// Create a brick, then run `setup` on it before returning it.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInterface` for an unknown kind, or the first
    /// error `setup` returns.
    pub fn new_with_setup<F>(kind: impl IntoInterfaceKind, setup: F) -> Result<Self>
    where
        F: FnOnce(&mut NxtBrick) -> Result<()>,
    {
        let mut brick = Self::new(kind)?;
        setup(&mut brick)?;
        Ok(brick)
    }

    /// Create a brick from an explicit interface configuration.
    pub fn with_config(config: &InterfaceConfig) -> Self {
        Self::from_interface(AnyInterface::from_config(config))
    }

    /// Create a brick around an already built interface.
    pub fn from_interface(interface: impl Into<AnyInterface>) -> Self {
        let interface = interface.into();
        debug!("Creating brick on {} interface", interface.kind());
        Self {
            interface: interface.into_shared(),
            registry: PortRegistry::new(RESERVED_IDENTIFIERS),
        }
    }

    /// The shared interface handlers are built with.
    pub fn interface(&self) -> &SharedInterface {
        &self.interface
    }

    /// Replace the interface.
    ///
    /// Handlers attached earlier keep the interface they were built with.
    pub fn set_interface(&mut self, interface: impl Into<AnyInterface>) {
        self.interface = interface.into().into_shared();
    }

    /// Open the interface.
    pub fn connect(&mut self) -> nxt_interface::Result<()> {
        self.interface.borrow_mut().connect()
    }

    /// Close the interface.
    pub fn disconnect(&mut self) -> nxt_interface::Result<()> {
        self.interface.borrow_mut().disconnect()
    }

    /// Attach a handler of type `H` to `port` under `identifier`.
    ///
    /// # Errors
    ///
    /// Checked in this order, before anything is built or stored:
    /// - `Error::InvalidPort` if `port` is not `a`, `b`, `c`, `one`, `two`,
    ///   `three` or `four`
    /// - `Error::InvalidIdentifierFormat` if `identifier` is not a symbolic name
    /// - `Error::PortTaken` if the port already holds a handler, whatever
    ///   the identifier
    /// - `Error::InvalidIdentifier` if `identifier` is reserved or in use
    pub fn attach<H: PortHandler>(
        &mut self,
        port: impl IntoPort,
        identifier: impl IntoIdentifier,
    ) -> Result<()> {
        self.attach_with(port, identifier, H::new)
    }

    /// Attach the handler built by `factory` to `port` under `identifier`.
    ///
    /// `factory` receives the port byte and a handle to the brick's interface
    /// and is called at most once, only after validation succeeds. Errors are
    /// as for [`NxtBrick::attach`].
    pub fn attach_with<H, F>(
        &mut self,
        port: impl IntoPort,
        identifier: impl IntoIdentifier,
        factory: F,
    ) -> Result<()>
    where
        H: Any,
        F: FnOnce(u8, SharedInterface) -> H,
    {
        let port = PortRegistry::resolve_port(port)?;
        let identifier = identifier.into_identifier()?;
        let interface = Rc::clone(&self.interface);

        self.registry
            .insert(port, identifier.clone(), || factory(port.as_byte(), interface))?;
        debug!("Attached {} to port {}", identifier, port);
        Ok(())
    }

    /// Forget `identifier`, returning whether it was registered.
    ///
    /// The handler stays on its port, so the port remains taken.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidIdentifierFormat` if `identifier` is not a
    /// symbolic name.
    pub fn detach(&mut self, identifier: impl IntoIdentifier) -> Result<bool> {
        let identifier = identifier.into_identifier()?;
        let removed = self.registry.remove_identifier(&identifier);
        debug!("Detaching {} (removed: {})", identifier, removed);
        Ok(removed)
    }

    /// Handler registered under `identifier`, if it is an `H`.
    pub fn handler<H: Any>(&self, identifier: &str) -> Option<&H> {
        self.registry.get(identifier)
    }

    pub fn handler_mut<H: Any>(&mut self, identifier: &str) -> Option<&mut H> {
        self.registry.get_mut(identifier)
    }

    /// Handler occupying `port`, if it is an `H`.
    ///
    /// Still returns a detached handler, since detaching leaves the port
    /// occupied.
    pub fn port_handler<H: Any>(&self, port: Port) -> Option<&H> {
        self.registry.get_by_port(port)
    }

    pub fn port_handler_mut<H: Any>(&mut self, port: Port) -> Option<&mut H> {
        self.registry.get_by_port_mut(port)
    }

    pub fn is_port_taken(&self, port: Port) -> bool {
        self.registry.is_taken(port)
    }

    /// Occupied ports, in `a, b, c, one, two, three, four` order.
    pub fn attached_ports(&self) -> Vec<Port> {
        self.registry.taken_ports()
    }

    /// Identifier to port index.
    pub fn port_identifiers(&self) -> &HashMap<Identifier, Port> {
        self.registry.identifiers()
    }
}

impl fmt::Debug for NxtBrick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NxtBrick")
            .field("interface", &self.interface)
            .field("attached_ports", &self.attached_ports())
            .field("port_identifiers", self.port_identifiers())
            .finish()
    }
}

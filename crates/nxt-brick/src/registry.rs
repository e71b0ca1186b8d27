//! Port attachment registry.
//!
//! Seven slots, one per attachable port, each holding at most one handler,
//! plus an index from caller-chosen identifiers to the port they name.
//!
//! Every operation validates its arguments completely before touching either
//! structure, so a failed call leaves the registry exactly as it was.

use nxt_core::constants::ATTACHABLE_PORT_COUNT;
use nxt_core::{Error, Identifier, IntoPort, Port, Result};
use std::any::Any;
use std::collections::HashMap;

/// Per-brick port registry.
pub struct PortRegistry {
    slots: [Option<Box<dyn Any>>; ATTACHABLE_PORT_COUNT],
    identifiers: HashMap<Identifier, Port>,

    /// Names that can never be used as identifiers.
    reserved: &'static [&'static str],
}

impl PortRegistry {
    /// Create an empty registry refusing the given names as identifiers.
    pub fn new(reserved: &'static [&'static str]) -> Self {
        Self {
            slots: Default::default(),
            identifiers: HashMap::new(),
            reserved,
        }
    }

    /// Resolve a port argument to one of the seven attachable ports.
    ///
    /// # Errors
    /// Returns `Error::InvalidPort` for unknown names and for `all`.
    pub fn resolve_port(port: impl IntoPort) -> Result<Port> {
        match port.into_port() {
            Ok(port) if port.is_attachable() => Ok(port),
            Ok(port) => Err(Error::InvalidPort {
                port: port.name().to_string(),
            }),
            Err(Error::UnknownPort { name }) => Err(Error::InvalidPort { port: name }),
            Err(error) => Err(error),
        }
    }

    /// Check that `identifier` is free for a new attachment.
    ///
    /// # Errors
    /// Returns `Error::InvalidIdentifier` if the name is reserved or already
    /// names an attachment.
    pub fn check_identifier(&self, identifier: &Identifier) -> Result<()> {
        let reserved = self.reserved.iter().any(|name| *name == identifier.as_str());
        if reserved || self.identifiers.contains_key(identifier) {
            return Err(Error::InvalidIdentifier {
                identifier: identifier.to_string(),
            });
        }
        Ok(())
    }

    /// Validate, then build the handler with `factory` and store it.
    ///
    /// The factory runs only once every check has passed. An occupied port
    /// is reported before any identifier collision.
    ///
    /// # Errors
    /// `Error::PortTaken` or `Error::InvalidIdentifier`; on error the
    /// registry is unchanged and `factory` was not called.
    pub fn insert<H, F>(&mut self, port: Port, identifier: Identifier, factory: F) -> Result<()>
    where
        H: Any,
        F: FnOnce() -> H,
    {
        let index = Self::slot_index(port)?;
        if self.slots[index].is_some() {
            return Err(Error::PortTaken { port });
        }
        self.check_identifier(&identifier)?;

        self.slots[index] = Some(Box::new(factory()));
        self.identifiers.insert(identifier, port);
        Ok(())
    }

    /// Forget an identifier. The port slot stays occupied.
    ///
    /// Returns `true` if the identifier was present.
    pub fn remove_identifier(&mut self, identifier: &Identifier) -> bool {
        self.identifiers.remove(identifier).is_some()
    }

    /// Handler registered under `identifier`, if it is an `H`.
    pub fn get<H: Any>(&self, identifier: &str) -> Option<&H> {
        let port = *self.identifiers.get(identifier)?;
        self.get_by_port(port)
    }

    pub fn get_mut<H: Any>(&mut self, identifier: &str) -> Option<&mut H> {
        let port = *self.identifiers.get(identifier)?;
        self.get_by_port_mut(port)
    }

    /// Handler occupying `port`, if it is an `H`.
    pub fn get_by_port<H: Any>(&self, port: Port) -> Option<&H> {
        let index = port.slot_index()?;
        self.slots[index].as_ref()?.downcast_ref::<H>()
    }

    pub fn get_by_port_mut<H: Any>(&mut self, port: Port) -> Option<&mut H> {
        let index = port.slot_index()?;
        self.slots[index].as_mut()?.downcast_mut::<H>()
    }

    /// Returns `true` if a handler occupies `port`.
    pub fn is_taken(&self, port: Port) -> bool {
        port.slot_index()
            .is_some_and(|index| self.slots[index].is_some())
    }

    /// Occupied ports, in slot order.
    pub fn taken_ports(&self) -> Vec<Port> {
        Port::ATTACHABLE
            .into_iter()
            .filter(|port| self.is_taken(*port))
            .collect()
    }

    /// Identifier index.
    pub fn identifiers(&self) -> &HashMap<Identifier, Port> {
        &self.identifiers
    }

    fn slot_index(port: Port) -> Result<usize> {
        port.slot_index().ok_or_else(|| Error::InvalidPort {
            port: port.name().to_string(),
        })
    }
}

//! Shared byte-encoding contract for telegram builders.
//!
//! Every command builder resolves the same two header fields: the
//! command-type byte and, for commands addressing a connector, the port
//! byte. [`ProtocolEncoding`] gives builders one way to do both, accepting
//! either typed values or symbolic names.
//!
//! # Examples
//!
//! ```
//! use nxt_core::{CommandType, Port, ProtocolEncoding};
//!
//! struct SetOutputState;
//! impl ProtocolEncoding for SetOutputState {}
//!
//! let builder = SetOutputState;
//! assert_eq!(builder.command_type_as_byte(CommandType::Direct).unwrap(), 0x00);
//! assert_eq!(builder.port_as_byte("all").unwrap(), 0xFF);
//! assert!(builder.port_as_byte("five").is_err());
//! assert_eq!(builder.port_as_byte(Port::Four).unwrap(), 0x03);
//! ```

use crate::Result;
use crate::types::{IntoCommandType, IntoPort};

/// Lookup of command-type and port bytes for telegram builders.
///
/// Both methods are pure table lookups. An unknown name is an error, never a
/// default byte.
pub trait ProtocolEncoding {
    /// Resolve a command category to its command-type byte.
    ///
    /// # Errors
    /// Returns `Error::UnknownCommandType` if the name is not in the table.
    fn command_type_as_byte(&self, command_type: impl IntoCommandType) -> Result<u8> {
        Ok(command_type.into_command_type()?.as_byte())
    }

    /// Resolve a port name or alias to its port byte.
    ///
    /// # Errors
    /// Returns `Error::UnknownPort` if the name is not in the table.
    fn port_as_byte(&self, port: impl IntoPort) -> Result<u8> {
        Ok(port.into_port()?.as_byte())
    }
}

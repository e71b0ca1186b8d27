use crate::types::Port;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Construction errors
    #[error("Unknown interface type: {kind}")]
    InvalidInterface { kind: String },

    // Registry errors
    #[error("Expected port to be one of: a, b, c, one, two, three, four, got {port}")]
    InvalidPort { port: String },

    #[error("Expected identifier to be a symbolic name, got {identifier:?}")]
    InvalidIdentifierFormat { identifier: String },

    #[error("Cannot use identifier {identifier}, NxtBrick is already using it")]
    InvalidIdentifier { identifier: String },

    #[error("Port {port} is already set, call detach first")]
    PortTaken { port: Port },

    // Table lookup errors
    #[error("Unknown port: {name}")]
    UnknownPort { name: String },

    #[error("Unknown command type: {name}")]
    UnknownCommandType { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;

//! Port attachment registry for the LEGO Mindstorms NXT brick.
//!
//! [`NxtBrick`] owns the connection to one brick and records which handler
//! drives each of its seven ports. Handlers are built by the registry with
//! their port byte and a handle to the shared interface, then looked up by
//! the name the caller attached them under.
//!
//! # Ports
//!
//! | Group    | Names                        |
//! |----------|------------------------------|
//! | Actuator | `a`, `b`, `c`                |
//! | Sensor   | `one`, `two`, `three`, `four`|
//!
//! Each port holds at most one handler. The `all` broadcast port is only a
//! telegram address; nothing can be attached to it.
//!
//! # Known inconsistency
//!
//! [`NxtBrick::detach`] forgets the identifier but leaves the handler on its
//! port, so attaching anything else to that port still fails with
//! `Error::PortTaken`.

pub mod brick;
pub mod handler;
pub mod registry;

pub use brick::{NxtBrick, RESERVED_IDENTIFIERS};
pub use handler::PortHandler;
pub use registry::PortRegistry;

//! Handler factory contract.
//!
//! A handler is the caller's driver for whatever is plugged into a port: a
//! motor, a touch sensor, an ultrasonic sensor. The registry never looks
//! inside a handler; it only builds one with the port byte and the shared
//! interface, stores it, and hands it back by name.

use nxt_interface::SharedInterface;
use std::any::Any;

/// Device driver that can be attached to a brick port.
///
/// # Examples
///
/// ```
/// use nxt_brick::{NxtBrick, PortHandler};
/// use nxt_interface::SharedInterface;
///
/// struct TouchSensor {
///     port: u8,
///     interface: SharedInterface,
/// }
///
/// impl PortHandler for TouchSensor {
///     fn new(port: u8, interface: SharedInterface) -> Self {
///         Self { port, interface }
///     }
/// }
///
/// # fn main() -> nxt_core::Result<()> {
/// let mut brick = NxtBrick::new("mock")?;
/// brick.attach::<TouchSensor>("one", "touch")?;
///
/// let touch = brick.handler::<TouchSensor>("touch").unwrap();
/// assert_eq!(touch.port, 0x00);
/// # Ok(())
/// # }
/// ```
pub trait PortHandler: Any {
    /// Build the handler for the port with the given wire byte.
    fn new(port: u8, interface: SharedInterface) -> Self
    where
        Self: Sized;
}

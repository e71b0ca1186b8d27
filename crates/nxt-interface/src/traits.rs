//! Transport trait definition.
//!
//! This module defines the contract between the brick controller and the
//! byte pipe it talks through. The controller only ever opens and closes the
//! interface; handlers and command builders use `write` and `read` to move
//! telegrams.
//!
//! All methods are synchronous. The NXT link is half duplex with at most one
//! outstanding command, so blocking calls match the hardware.

use crate::error::Result;
use crate::types::InterfaceKind;

/// Byte-level connection to a brick.
///
/// # Examples
///
/// ```
/// use nxt_interface::mock::MockInterface;
/// use nxt_interface::traits::Interface;
///
/// # fn main() -> nxt_interface::Result<()> {
/// let mut interface = MockInterface::new();
/// interface.connect()?;
///
/// interface.queue_reply(&[0x02, 0x0B, 0x00]);
/// interface.write(&[0x00, 0x0B])?;
/// assert_eq!(interface.read(3)?, vec![0x02, 0x0B, 0x00]);
///
/// interface.disconnect()?;
/// # Ok(())
/// # }
/// ```
pub trait Interface {
    /// Open the connection. Calling it on an open interface is a no-op.
    fn connect(&mut self) -> Result<()>;

    /// Close the connection. Calling it on a closed interface is a no-op.
    fn disconnect(&mut self) -> Result<()>;

    /// Write raw bytes, returning how many were sent.
    ///
    /// # Errors
    ///
    /// Returns `InterfaceError::NotConnected` if the interface is closed.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Read exactly `len` raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `InterfaceError::NotConnected` if the interface is closed. A
    /// transport that receives fewer than `len` bytes fails rather than
    /// returning a partial buffer.
    fn read(&mut self, len: usize) -> Result<Vec<u8>>;

    /// Returns `true` while the connection is open.
    fn is_connected(&self) -> bool;

    /// Transport this interface uses.
    fn kind(&self) -> InterfaceKind;
}

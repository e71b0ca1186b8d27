//! Mock interface implementation for testing and development.
//!
//! This module provides an in-memory interface that records everything the
//! controller and handlers do to it and replays scripted reply bytes, so
//! registry and handler code can be exercised without a brick.

use crate::{
    Result,
    error::InterfaceError,
    traits::Interface,
    types::InterfaceKind,
};
use std::collections::VecDeque;
use std::io;

/// Mock interface for testing and development.
///
/// Every `connect` and `disconnect` call is counted, every write is kept,
/// and reads are served from bytes queued with [`MockInterface::queue_reply`].
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
/// interface.write(&[0x80, 0x03])?;
///
/// assert_eq!(interface.connect_calls(), 1);
/// assert_eq!(interface.written(), &[vec![0x80, 0x03]]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MockInterface {
    connected: bool,
    connect_calls: usize,
    disconnect_calls: usize,

    /// Each write call, in order.
    written: Vec<Vec<u8>>,

    /// Bytes waiting to be read.
    replies: VecDeque<u8>,
}

impl MockInterface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes to be returned by subsequent reads.
    pub fn queue_reply(&mut self, bytes: &[u8]) {
        self.replies.extend(bytes);
    }

    /// Number of times `connect` was called.
    pub fn connect_calls(&self) -> usize {
        self.connect_calls
    }

    /// Number of times `disconnect` was called.
    pub fn disconnect_calls(&self) -> usize {
        self.disconnect_calls
    }

    /// Every buffer passed to `write`, in call order.
    pub fn written(&self) -> &[Vec<u8>] {
        &self.written
    }

    /// Number of queued bytes not yet read.
    pub fn pending_reply_len(&self) -> usize {
        self.replies.len()
    }
}

impl Interface for MockInterface {
    fn connect(&mut self) -> Result<()> {
        self.connect_calls += 1;
        self.connected = true;
        Ok(())
    }

    fn disconnect(&mut self) -> Result<()> {
        self.disconnect_calls += 1;
        self.connected = false;
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        if !self.connected {
            return Err(InterfaceError::not_connected(InterfaceKind::Mock));
        }
        self.written.push(data.to_vec());
        Ok(data.len())
    }

    fn read(&mut self, len: usize) -> Result<Vec<u8>> {
        if !self.connected {
            return Err(InterfaceError::not_connected(InterfaceKind::Mock));
        }
        if self.replies.len() < len {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("{} bytes requested, {} queued", len, self.replies.len()),
            )
            .into());
        }
        Ok(self.replies.drain(..len).collect())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn kind(&self) -> InterfaceKind {
        InterfaceKind::Mock
    }
}

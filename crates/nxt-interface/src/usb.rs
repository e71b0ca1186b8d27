//! USB transport.
//!
//! The brick enumerates as a vendor-specific device with one bulk OUT and
//! one bulk IN endpoint. Each telegram is a single bulk transfer; no extra
//! framing is added on USB.

use crate::config::UsbConfig;
use crate::error::{InterfaceError, Result};
use crate::traits::Interface;
use crate::types::InterfaceKind;
use rusb::{DeviceHandle, GlobalContext};
use std::fmt;
use tracing::{debug, info, trace};

/// Interface to a brick attached over USB.
///
/// Construction performs no I/O; the device is opened by
/// [`Interface::connect`].
pub struct UsbInterface {
    config: UsbConfig,
    handle: Option<DeviceHandle<GlobalContext>>,
}

impl UsbInterface {
    pub fn new(config: UsbConfig) -> Self {
        debug!(
            "Creating USB interface for {:04x}:{:04x}",
            config.vendor_id, config.product_id
        );
        Self {
            config,
            handle: None,
        }
    }

    pub fn config(&self) -> &UsbConfig {
        &self.config
    }

    fn device_name(&self) -> String {
        format!(
            "USB {:04x}:{:04x}",
            self.config.vendor_id, self.config.product_id
        )
    }

    fn handle(&self) -> Result<&DeviceHandle<GlobalContext>> {
        self.handle
            .as_ref()
            .ok_or_else(|| InterfaceError::not_connected(InterfaceKind::Usb))
    }
}

impl Default for UsbInterface {
    fn default() -> Self {
        Self::new(UsbConfig::default())
    }
}

impl Interface for UsbInterface {
    fn connect(&mut self) -> Result<()> {
        if self.handle.is_some() {
            return Ok(());
        }

        info!("Connecting to brick at {}", self.device_name());
        let mut handle =
            rusb::open_device_with_vid_pid(self.config.vendor_id, self.config.product_id)
                .ok_or_else(|| InterfaceError::device_not_found(self.device_name()))?;
        handle.claim_interface(self.config.interface)?;

        self.handle = Some(handle);
        debug!("USB interface {} claimed", self.config.interface);
        Ok(())
    }

    fn disconnect(&mut self) -> Result<()> {
        if let Some(mut handle) = self.handle.take() {
            info!("Closing connection to {}", self.device_name());
            handle.release_interface(self.config.interface)?;
        }
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        let handle = self.handle()?;
        let written = handle.write_bulk(self.config.out_endpoint, data, self.config.timeout())?;
        trace!("Wrote {} bytes to endpoint {:#04x}", written, self.config.out_endpoint);

        if written != data.len() {
            return Err(InterfaceError::short_write(written, data.len()));
        }
        Ok(written)
    }

    fn read(&mut self, len: usize) -> Result<Vec<u8>> {
        let handle = self.handle()?;
        let mut buffer = vec![0u8; len];
        let read = handle.read_bulk(self.config.in_endpoint, &mut buffer, self.config.timeout())?;
        trace!("Read {} bytes from endpoint {:#04x}", read, self.config.in_endpoint);

        check_read_len(buffer, read)
    }

    fn is_connected(&self) -> bool {
        self.handle.is_some()
    }

    fn kind(&self) -> InterfaceKind {
        InterfaceKind::Usb
    }
}

/// A bulk transfer may end early; anything short of the full buffer is an error.
fn check_read_len(buffer: Vec<u8>, read: usize) -> Result<Vec<u8>> {
    if read != buffer.len() {
        return Err(InterfaceError::short_read(read, buffer.len()));
    }
    Ok(buffer)
}

impl fmt::Debug for UsbInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UsbInterface")
            .field("config", &self.config)
            .field("connected", &self.handle.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_does_not_open_device() {
        let interface = UsbInterface::default();
        assert!(!interface.is_connected());
        assert_eq!(interface.kind(), InterfaceKind::Usb);
        assert_eq!(interface.config(), &UsbConfig::default());
    }

    #[test]
    fn test_io_requires_connection() {
        let mut interface = UsbInterface::default();
        assert!(matches!(
            interface.write(&[0x00, 0x0B]),
            Err(InterfaceError::NotConnected {
                kind: InterfaceKind::Usb
            })
        ));
        assert!(matches!(
            interface.read(3),
            Err(InterfaceError::NotConnected { .. })
        ));
    }

    #[test]
    fn test_full_read_returned() {
        let buffer = vec![0x02, 0x0B, 0x00];
        assert_eq!(check_read_len(buffer, 3).unwrap(), vec![0x02, 0x0B, 0x00]);
    }

    #[test]
    fn test_partial_read_is_error() {
        let result = check_read_len(vec![0x02, 0x0B, 0x00, 0x00, 0x00], 3);
        assert!(matches!(
            result,
            Err(InterfaceError::ShortRead {
                read: 3,
                expected: 5
            })
        ));
    }

    #[test]
    fn test_disconnect_when_closed_is_noop() {
        let mut interface = UsbInterface::default();
        assert!(interface.disconnect().is_ok());
    }

    #[test]
    fn test_debug_output() {
        let output = format!("{:?}", UsbInterface::default());
        assert!(output.contains("connected: false"));
    }
}

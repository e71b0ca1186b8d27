//! Serial transport.
//!
//! Used for the brick's Bluetooth link, which the host exposes as a serial
//! device once paired. Bytes are passed through untouched; the two-byte
//! length prefix Bluetooth telegrams carry belongs to the telegram framer.

use crate::config::SerialConfig;
use crate::error::{InterfaceError, Result};
use crate::traits::Interface;
use crate::types::InterfaceKind;
use serialport::SerialPort;
use std::fmt;
use std::io::{Read, Write};
use tracing::{debug, info, trace};

/// Interface to a brick reached through a serial device.
pub struct SerialInterface {
    config: SerialConfig,
    port: Option<Box<dyn SerialPort>>,
}

impl SerialInterface {
    pub fn new(config: SerialConfig) -> Self {
        debug!("Creating serial interface for {}", config.path);
        Self { config, port: None }
    }

    pub fn config(&self) -> &SerialConfig {
        &self.config
    }

    fn port(&mut self) -> Result<&mut Box<dyn SerialPort>> {
        self.port
            .as_mut()
            .ok_or_else(|| InterfaceError::not_connected(InterfaceKind::Serial))
    }
}

impl Default for SerialInterface {
    fn default() -> Self {
        Self::new(SerialConfig::default())
    }
}

impl Interface for SerialInterface {
    fn connect(&mut self) -> Result<()> {
        if self.port.is_some() {
            return Ok(());
        }

        info!("Connecting to brick at {}", self.config.path);
        let port = serialport::new(self.config.path.as_str(), self.config.baud_rate)
            .timeout(self.config.timeout())
            .open()
            .map_err(|e| match e.kind() {
                serialport::ErrorKind::NoDevice => {
                    InterfaceError::device_not_found(self.config.path.clone())
                }
                _ => InterfaceError::Serial(e),
            })?;

        self.port = Some(port);
        Ok(())
    }

    fn disconnect(&mut self) -> Result<()> {
        if let Some(mut port) = self.port.take() {
            info!("Closing connection to {}", self.config.path);
            port.flush()?;
        }
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        let port = self.port()?;
        port.write_all(data)?;
        trace!("Wrote {} bytes", data.len());
        Ok(data.len())
    }

    fn read(&mut self, len: usize) -> Result<Vec<u8>> {
        let port = self.port()?;
        let mut buffer = vec![0u8; len];
        port.read_exact(&mut buffer)?;
        trace!("Read {} bytes", len);
        Ok(buffer)
    }

    fn is_connected(&self) -> bool {
        self.port.is_some()
    }

    fn kind(&self) -> InterfaceKind {
        InterfaceKind::Serial
    }
}

impl fmt::Debug for SerialInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerialInterface")
            .field("config", &self.config)
            .field("connected", &self.port.is_some())
            .finish()
    }
}

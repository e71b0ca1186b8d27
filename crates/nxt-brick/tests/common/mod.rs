//! Common test utilities for brick integration tests.
//!
//! Provides stand-in handlers that record how they were built, plus helpers
//! for building bricks on the mock interface and enabling log output.

#![allow(dead_code)]

use nxt_brick::{NxtBrick, PortHandler};
use nxt_core::CommandType;
use nxt_interface::{Interface, MockInterface, SharedInterface};
use std::cell::Cell;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Direct command opcode for setting a motor's output state.
pub const SET_OUTPUT_STATE: u8 = 0x04;

/// Install a test log subscriber once per test binary.
///
/// Set `RUST_LOG=debug` to see attach/detach traces.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Brick on a fresh mock interface.
pub fn mock_brick() -> NxtBrick {
    init_tracing();
    NxtBrick::from_interface(MockInterface::new())
}

/// Touch sensor stand-in.
#[derive(Debug)]
pub struct TouchSensor {
    pub port: u8,
    pub interface: SharedInterface,
}

impl PortHandler for TouchSensor {
    fn new(port: u8, interface: SharedInterface) -> Self {
        Self { port, interface }
    }
}

/// Motor stand-in that writes a telegram on demand, to show handlers reach
/// the brick through the shared interface.
#[derive(Debug)]
pub struct Motor {
    pub port: u8,
    pub interface: SharedInterface,
}

impl PortHandler for Motor {
    fn new(port: u8, interface: SharedInterface) -> Self {
        Self { port, interface }
    }
}

impl Motor {
    /// Write a set-output-state direct command without asking for a reply.
    pub fn run(&self, power: i8) -> nxt_interface::Result<usize> {
        let telegram = [
            CommandType::Direct.as_byte_with_reply(false),
            SET_OUTPUT_STATE,
            self.port,
            power as u8,
        ];
        self.interface.borrow_mut().write(&telegram)
    }
}

/// Handler that counts how many times it was built.
#[derive(Debug)]
pub struct Counted {
    pub serial: usize,
    pub port: u8,
}

/// Factory closure producing `Counted` handlers and bumping `counter`.
pub fn counting_factory(counter: &Cell<usize>) -> impl FnOnce(u8, SharedInterface) -> Counted + '_ {
    move |port, _interface| {
        counter.set(counter.get() + 1);
        Counted {
            serial: counter.get(),
            port,
        }
    }
}

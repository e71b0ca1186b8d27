//! Mock interface implementations for testing and development.
//!
//! This module provides a simulated transport that can be inspected and
//! scripted programmatically without requiring a physical brick.

pub mod interface;

pub use interface::MockInterface;

pub mod constants;
pub mod encoding;
pub mod error;
pub mod types;

pub use encoding::ProtocolEncoding;
pub use error::{Error, Result};
pub use types::*;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

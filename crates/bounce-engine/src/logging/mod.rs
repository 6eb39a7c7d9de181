//! Logging utilities.
//!
//! Library code only uses the `log` facade; binaries call [`init_logging`]
//! once at startup.

mod init;

pub use init::{LoggingConfig, init_logging};

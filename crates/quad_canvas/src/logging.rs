//! Logging setup
//!
//! The shell logs through the `log` facade; this module wires up the
//! `env_logger` backend. Verbosity follows the `RUST_LOG` environment
//! variable.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
pub fn init() {
    env_logger::init();
}

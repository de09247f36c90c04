//! Logger bootstrap.
//!
//! Centralizes `env_logger` initialization behind the `log` facade so the
//! viewer binary and tests share one setup path.

mod init;

pub use init::{init_logging, LoggingConfig};

//! Structured logging to a rotating file.
//!
//! The plugin has no terminal of its own to log to, so `tracing` events are
//! formatted as plain text lines and appended to a log file in the plugin data
//! directory:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingFile → rolodex.log
//! ```
//!
//! # Features
//!
//! - **File Output**: `~/.local/share/zellij/rolodex/rolodex.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Configuration
//!
//! The filter comes from the `trace_level` config option and accepts any
//! `EnvFilter` directive (`debug`, `rolodex=trace`, ...). Default: `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::RotatingFile;
pub use init::init_tracing;

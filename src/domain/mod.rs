//! Domain layer for the Rolodex plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or infrastructure concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`profile`]: Profile record model and date formatting

pub mod error;
pub mod profile;

pub use error::{DirectoryError, Result};
pub use profile::{format_birth_date, ProfileRecord};

//! Core utilities and types for the fluentgen builder generator.
//!
//! This crate provides the pieces shared by every other fluentgen crate:
//! generation settings, file output, and identifier helpers.

mod config;
mod file;
mod utils;

// Generation settings
pub use config::{CONFIG_FILE_NAME, Config};
// File operations
pub use file::{File, GeneratedFile};
// String utilities
pub use utils::{capitalize, is_identifier, to_pascal_case};

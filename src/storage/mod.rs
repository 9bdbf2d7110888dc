//! Storage layer
//!
//! Handles TOML configuration persistence under the platform config
//! directory.

use crate::error::StorageError;

pub mod config;

type Result<T> = std::result::Result<T, StorageError>;

//! Utils module - Shared utilities and helpers
//!
//! This module provides utility functions and helpers that are used across
//! multiple layers of the application architecture.

/// Verbose logging helpers
pub mod logging;

/// Text truncation and width handling
pub mod text;

/// Input validation for configuration values
pub mod validation;

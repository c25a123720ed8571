// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for running the skeleton overlay.
//!
//! This module contains the command-line interface logic, including argument
//! parsing and the `overlay` command implementation.

// Modules
/// CLI arguments.
pub mod args;

/// Logging macros and verbosity state.
pub mod logging;

/// Overlay command logic.
pub mod overlay;

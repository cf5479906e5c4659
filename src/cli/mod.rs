//! Command-line interface.
//!
//! Argument parsing, the classification pipeline, and stderr logging.

/// CLI arguments.
pub mod args;

/// Classification pipeline.
pub mod classify;

/// Verbosity state and logging macros.
pub mod logging;

//! Collaborators around the compositing core
//!
//! This module contains everything that touches the outside world:
//! - Argument parsing and pipeline orchestration
//! - Source decoding and PNG export
//! - Error types, constants, logging and progress display

/// Command-line interface and mosaic pipeline
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types and path context
pub mod error;
/// Source acquisition, format detection and PNG export
pub mod image;
/// Logger initialisation
pub mod logging;
/// Terminal progress reporting
pub mod progress;

//! Shared types: geometry, colors, errors and configuration.

/// Style and configuration records.
pub mod config;
/// Canvas geometry and colors.
pub mod core;
/// Error taxonomy.
pub mod error;

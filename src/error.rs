//! Crate-level error type.
//!
//! The typewriter engine itself never fails. Errors only come from the
//! surfaces around it: terminal I/O, spawning the driver thread, and
//! parsing configuration documents.

use std::io;
use thiserror::Error;

/// Errors raised by the terminal, actor and configuration layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Terminal or stdout I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The OS refused to spawn the typewriter driver thread.
    #[error("failed to spawn typewriter thread: {0}")]
    Spawn(#[source] io::Error),

    /// A configuration document could not be parsed.
    #[error("invalid typewriter configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

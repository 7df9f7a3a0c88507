//! # Error Types
//!
//! This module defines the error type shared by the trainer, the note filter
//! and the configuration loader.
//!
//! Most degenerate inputs never reach this type: a bad persisted selection
//! falls back to the default, a missing drawing surface is skipped, and an
//! answer that is not a note name simply counts as wrong. What remains are
//! configuration mistakes, store failures and the empty position pool.
//!
//! ## Error Types
//! - `ConfigError` - Invalid trainer configuration document or value
//! - `StorageError` - The key-value store refused a read or write
//! - `UnknownNote` - A name outside the solfège alphabet
//! - `EmptyPool` - No fretboard position matches the selected notes
//!
//! ## Usage
//! ```rust
//! use fretnote::{FretnoteError, NaturalNote};
//!
//! match "Sol#".parse::<NaturalNote>() {
//!     Ok(note) => println!("natural: {}", note),
//!     Err(FretnoteError::UnknownNote(name)) => eprintln!("not a natural note: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FretnoteError {
    /// Invalid configuration error.
    ///
    /// Occurs when the configuration document does not parse or a value is
    /// outside its allowed range.
    ///
    /// # Example
    /// ```
    /// # use fretnote::FretnoteError;
    /// let err = FretnoteError::ConfigError("feedback-delay-ms must be greater than 0".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: feedback-delay-ms must be greater than 0");
    /// ```
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Key-value store failure.
    ///
    /// The note filter logs these and keeps its in-memory selection, so they
    /// only surface when a `Store` is used directly.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// A note name that is not part of the alphabet being parsed.
    ///
    /// # Example
    /// ```
    /// # use fretnote::FretnoteError;
    /// let err = FretnoteError::UnknownNote("H".to_string());
    /// assert_eq!(err.to_string(), "Unknown note: H");
    /// ```
    #[error("Unknown note: {0}")]
    UnknownNote(String),

    /// The selected notes match no position on the fretboard.
    ///
    /// Cannot happen with the standard tuning and a selection of at least two
    /// natural notes, but random selection checks for it explicitly.
    #[error("No fretboard position matches the selected notes")]
    EmptyPool,
}

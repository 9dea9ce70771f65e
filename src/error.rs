//! # Error Types
//!
//! This module defines all error types for key property resolution.
//!
//! Every error carries the offending input so callers can report exactly what
//! was rejected. Errors are terminal: a failed call never yields a partial
//! [`KeyProperties`](crate::KeyProperties).
//!
//! ## Error Types
//! - `MalformedDescriptor` - Descriptor is not `PITCH/OCTAVE[/GLYPH]`
//! - `UnknownPitchClass` - Pitch segment is not in the pitch table
//! - `InvalidClef` - Clef name is empty or unknown
//! - `InvalidDuration` - Duration token is unknown after alias substitution
//! - `InvalidOptions` - YAML options text could not be read
//!
//! ## Usage
//! ```rust
//! use keyprops::{resolve, KeyPropsError};
//!
//! match resolve("Z/4") {
//!     Ok(props) => println!("line {}", props.line),
//!     Err(KeyPropsError::UnknownPitchClass(key)) => {
//!         eprintln!("No such pitch class: {}", key);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyPropsError {
    /// Descriptor does not have the `PITCH/OCTAVE` shape.
    ///
    /// Occurs when the descriptor has fewer than two `/`-separated segments,
    /// an empty pitch segment, or an octave segment that is not an integer.
    ///
    /// # Example
    /// ```
    /// # use keyprops::KeyPropsError;
    /// let err = KeyPropsError::MalformedDescriptor("bogus".to_string());
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Descriptor must be note/octave or note/octave/glyph-code: bogus"
    /// );
    /// ```
    #[error("Descriptor must be note/octave or note/octave/glyph-code: {0}")]
    MalformedDescriptor(String),

    /// Pitch segment (after uppercasing) is not a known pitch class.
    ///
    /// # Example
    /// ```
    /// # use keyprops::KeyPropsError;
    /// let err = KeyPropsError::UnknownPitchClass("Z".to_string());
    /// assert_eq!(err.to_string(), "Invalid key name: Z");
    /// ```
    #[error("Invalid key name: {0}")]
    UnknownPitchClass(String),

    /// Clef name is empty or not registered.
    ///
    /// # Example
    /// ```
    /// # use keyprops::KeyPropsError;
    /// let err = KeyPropsError::InvalidClef("unknown".to_string());
    /// assert_eq!(err.to_string(), "Invalid clef: unknown");
    /// ```
    #[error("Invalid clef: {0}")]
    InvalidClef(String),

    /// Duration token is not registered, even after alias substitution.
    ///
    /// Carries the token as the caller supplied it.
    ///
    /// # Example
    /// ```
    /// # use keyprops::KeyPropsError;
    /// let err = KeyPropsError::InvalidDuration("nonsense".to_string());
    /// assert_eq!(err.to_string(), "The provided duration is not valid: nonsense");
    /// ```
    #[error("The provided duration is not valid: {0}")]
    InvalidDuration(String),

    /// Options text could not be deserialized.
    ///
    /// # Example
    /// ```
    /// # use keyprops::KeyPropsError;
    /// let err = KeyPropsError::InvalidOptions("octave_shift: invalid type".to_string());
    /// assert_eq!(err.to_string(), "Invalid options: octave_shift: invalid type");
    /// ```
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

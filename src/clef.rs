//! # Clef Registry
//!
//! Each clef shifts the computed staff line by a fixed number of diatonic
//! steps relative to treble.

use crate::error::KeyPropsError;
use serde::Serialize;

/// Clef used when the caller does not name one
pub const DEFAULT_CLEF: &str = "treble";

/// Every registered clef name
pub const CLEF_NAMES: [&str; 11] = [
    "treble",
    "bass",
    "tenor",
    "alto",
    "soprano",
    "percussion",
    "mezzo-soprano",
    "baritone-c",
    "baritone-f",
    "subbass",
    "french",
];

/// Static properties of one clef
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClefEntry {
    pub line_shift: i32,
}

/// Look up a clef by name.
///
/// # Examples
/// ```
/// use keyprops::clef_properties;
///
/// assert_eq!(clef_properties("bass").unwrap().line_shift, 6);
/// assert!(clef_properties("").is_err());
/// ```
pub fn clef_properties(clef: &str) -> Result<ClefEntry, KeyPropsError> {
    let line_shift = match clef {
        "treble" => 0,
        "bass" => 6,
        "tenor" => 4,
        "alto" => 3,
        "soprano" => 1,
        "percussion" => 0,
        "mezzo-soprano" => 2,
        "baritone-c" => 5,
        "baritone-f" => 5,
        "subbass" => 7,
        "french" => -1,
        _ => return Err(KeyPropsError::InvalidClef(clef.to_string())),
    };
    Ok(ClefEntry { line_shift })
}

//! # Duration Registry
//!
//! Canonical duration tokens and their tick values. Durations are only used
//! here to validate input and to pick notehead variants; nothing is scheduled.
//!
//! ```text
//! token   ticks
//! 1/2     32768   double whole
//! 1       16384   whole
//! 2        8192   half
//! 4        4096   quarter
//! ...
//! 256        64
//! ```

use crate::error::KeyPropsError;

/// Ticks per whole note
pub const RESOLUTION: u32 = 16384;

/// Duration used when the caller does not give one
pub const DEFAULT_DURATION: &str = "4";

/// Tick value of one canonical duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationEntry {
    pub ticks: u32,
}

/// Single-letter shorthands for canonical tokens
fn alias_target(token: &str) -> Option<&'static str> {
    match token {
        "w" => Some("1"),
        "h" => Some("2"),
        "q" => Some("4"),
        // Bar duration; bars do not consume ticks
        "b" => Some("256"),
        _ => None,
    }
}

/// Look up a canonical duration token (aliases are not expanded here)
pub fn duration_entry(token: &str) -> Option<DurationEntry> {
    let ticks = match token {
        "1/2" => RESOLUTION * 2,
        "1" => RESOLUTION,
        "2" => RESOLUTION / 2,
        "4" => RESOLUTION / 4,
        "8" => RESOLUTION / 8,
        "16" => RESOLUTION / 16,
        "32" => RESOLUTION / 32,
        "64" => RESOLUTION / 64,
        "128" => RESOLUTION / 128,
        "256" => RESOLUTION / 256,
        _ => return None,
    };
    Some(DurationEntry { ticks })
}

/// Expand aliases and validate a duration token.
///
/// # Examples
/// ```
/// use keyprops::sanitize_duration;
///
/// assert_eq!(sanitize_duration("q").unwrap(), "4");
/// assert_eq!(sanitize_duration("1/2").unwrap(), "1/2");
/// assert!(sanitize_duration("3").is_err());
/// ```
pub fn sanitize_duration(duration: &str) -> Result<&str, KeyPropsError> {
    let canonical = alias_target(duration).unwrap_or(duration);
    if duration_entry(canonical).is_none() {
        return Err(KeyPropsError::InvalidDuration(duration.to_string()));
    }
    Ok(canonical)
}

/// Ticks for a duration token, aliases included
pub fn duration_to_ticks(duration: &str) -> Result<u32, KeyPropsError> {
    let canonical = sanitize_duration(duration)?;
    duration_entry(canonical)
        .map(|entry| entry.ticks)
        .ok_or_else(|| KeyPropsError::InvalidDuration(duration.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!(sanitize_duration("w").unwrap(), "1");
        assert_eq!(sanitize_duration("h").unwrap(), "2");
        assert_eq!(sanitize_duration("q").unwrap(), "4");
        assert_eq!(sanitize_duration("b").unwrap(), "256");
    }

    #[test]
    fn test_canonical_tokens_pass_through() {
        for token in ["1/2", "1", "2", "4", "8", "16", "32", "64", "128", "256"] {
            assert_eq!(sanitize_duration(token).unwrap(), token);
        }
    }

    #[test]
    fn test_invalid_duration_keeps_original_token() {
        assert_eq!(
            sanitize_duration("nonsense"),
            Err(KeyPropsError::InvalidDuration("nonsense".to_string()))
        );
        assert!(sanitize_duration("").is_err());
        // Aliases are lowercase only
        assert!(sanitize_duration("Q").is_err());
    }

    #[test]
    fn test_ticks() {
        assert_eq!(duration_to_ticks("1/2").unwrap(), 32768);
        assert_eq!(duration_to_ticks("w").unwrap(), 16384);
        assert_eq!(duration_to_ticks("q").unwrap(), 4096);
        assert_eq!(duration_to_ticks("b").unwrap(), 64);
        assert!(duration_to_ticks("5").is_err());
    }
}

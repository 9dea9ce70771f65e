//! # Key Properties Resolver
//!
//! Resolves a `PITCH/OCTAVE[/GLYPH]` descriptor into the data a renderer needs
//! to place a note on a staff.
//!
//! ## Pipeline
//! ```text
//! options.duration ──> sanitize_duration
//! descriptor ──split '/'──> [pitch, octave, glyph?]
//!   pitch  ──uppercase──> pitch_class
//!   octave ──parse, minus octave_shift──> octave
//!   line = (octave * 7 - 28 + diatonic_index) / 2 + clef.line_shift
//!   glyph  ──uppercase──> resolve_notehead_code(glyph, duration)
//! ```
//!
//! Octave 4 anchors index 0, so `C/4` on a treble staff sits on line 0 (the
//! ledger line below the staff) and every diatonic step moves half a line.

use crate::clef::{clef_properties, DEFAULT_CLEF};
use crate::duration::{sanitize_duration, DEFAULT_DURATION};
use crate::error::KeyPropsError;
use crate::notehead::resolve_notehead_code;
use crate::pitch::{pitch_class, Accidental};
use log::{debug, trace};
use serde::{Deserialize, Deserializer, Serialize};

/// Options for a single resolution
///
/// Missing fields keep their defaults and unknown fields are ignored when
/// read from YAML:
/// ```yaml
/// octave_shift: 1   # default 0
/// duration: "2"     # default "4", aliases allowed
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct KeyOptions {
    /// Octaves to subtract from the written octave (8va/8vb clef compensation)
    pub octave_shift: i16,
    /// Duration token; only affects duration-sensitive notehead styles
    #[serde(deserialize_with = "duration_token")]
    pub duration: String,
}

impl Default for KeyOptions {
    fn default() -> Self {
        Self {
            octave_shift: 0,
            duration: DEFAULT_DURATION.to_string(),
        }
    }
}

impl KeyOptions {
    /// Read options from YAML text. Empty text yields the defaults.
    pub fn from_yaml(source: &str) -> Result<Self, KeyPropsError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source).map_err(|e| KeyPropsError::InvalidOptions(e.to_string()))
    }

    pub fn with_octave_shift(mut self, octave_shift: i16) -> Self {
        self.octave_shift = octave_shift;
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }
}

/// Raw YAML duration: `duration: 8` reads as a number, `duration: q` as text
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDuration {
    Number(u64),
    Text(String),
}

fn duration_token<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawDuration::deserialize(deserializer)? {
        RawDuration::Number(n) => n.to_string(),
        RawDuration::Text(s) => s,
    })
}

/// Stem direction hint for notes well outside the staff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StemDirection {
    Up,
    Down,
    Neutral,
}

impl StemDirection {
    /// Notes on a line at or below the bottom staff line point up; notes on a
    /// line at or above line 6 point down. Notes in spaces get no hint.
    pub fn for_line(line: f64) -> Self {
        let on_line = line.fract() == 0.0;
        if line <= 0.0 && on_line {
            StemDirection::Up
        } else if line >= 6.0 && on_line {
            StemDirection::Down
        } else {
            StemDirection::Neutral
        }
    }

    /// Numeric stroke: 1 up, -1 down, 0 neutral
    pub fn stroke(&self) -> i8 {
        match self {
            StemDirection::Up => 1,
            StemDirection::Down => -1,
            StemDirection::Neutral => 0,
        }
    }
}

/// Resolved rendering properties for one note
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyProperties {
    pub key: String,
    pub octave: i32,
    /// Staff line, always a multiple of 0.5
    pub line: f64,
    /// `octave * 12 + chromatic value`; absent for rests and markers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chromatic_pitch: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accidental: Option<Accidental>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph_code: Option<&'static str>,
    pub stem_direction: StemDirection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_shift: Option<f64>,
    /// Set by later layout passes; always false here
    pub displaced: bool,
}

/// Resolve a descriptor against a clef with the given options.
///
/// # Examples
/// ```
/// use keyprops::{key_properties, KeyOptions, StemDirection};
///
/// let props = key_properties("G/3", "bass", &KeyOptions::default()).unwrap();
/// assert_eq!(props.line, 4.5);
/// assert_eq!(props.stem_direction, StemDirection::Neutral);
/// ```
pub fn key_properties(
    descriptor: &str,
    clef: &str,
    options: &KeyOptions,
) -> Result<KeyProperties, KeyPropsError> {
    let duration = sanitize_duration(&options.duration)?;

    let pieces: Vec<&str> = descriptor.split('/').collect();
    if pieces.len() < 2 || pieces[0].is_empty() {
        return Err(KeyPropsError::MalformedDescriptor(descriptor.to_string()));
    }

    let key = pieces[0].to_uppercase();
    let entry = pitch_class(&key).ok_or_else(|| KeyPropsError::UnknownPitchClass(key.clone()))?;

    let written_octave = match entry.fixed_octave {
        Some(octave) => octave,
        None => pieces[1]
            .trim()
            .parse::<i16>()
            .map(i32::from)
            .map_err(|_| KeyPropsError::MalformedDescriptor(descriptor.to_string()))?,
    };
    let octave = written_octave - i32::from(options.octave_shift);

    let base_index = octave * 7 - 4 * 7;
    let line = f64::from(base_index + i32::from(entry.diatonic_index)) / 2.0
        + f64::from(clef_properties(clef)?.line_shift);

    let stem_direction = StemDirection::for_line(line);

    let chromatic_pitch = entry.chromatic_value.map(|value| octave * 12 + value);

    let mut glyph_code = entry.fixed_glyph_code;
    if let Some(style) = pieces.get(2).filter(|style| !style.is_empty()) {
        let style = style.to_uppercase();
        match resolve_notehead_code(&style, duration) {
            "" => debug!("Unknown notehead style '{}' in '{}', keeping default glyph", style, descriptor),
            code => glyph_code = Some(code),
        }
    }

    trace!(
        "{} ({} clef, duration {}) -> octave {}, line {}",
        descriptor,
        clef,
        duration,
        octave,
        line
    );

    Ok(KeyProperties {
        key,
        octave,
        line,
        chromatic_pitch,
        accidental: entry.accidental,
        glyph_code,
        stem_direction,
        horizontal_shift: entry.horizontal_shift,
        displaced: false,
    })
}

/// Resolve a descriptor on a treble staff with default options.
///
/// # Examples
/// ```
/// use keyprops::{resolve, StemDirection};
///
/// let props = resolve("C/4").unwrap();
/// assert_eq!(props.octave, 4);
/// assert_eq!(props.line, 0.0);
/// assert_eq!(props.stem_direction, StemDirection::Up);
/// assert_eq!(props.chromatic_pitch, Some(48));
/// ```
pub fn resolve(descriptor: &str) -> Result<KeyProperties, KeyPropsError> {
    key_properties(descriptor, DEFAULT_CLEF, &KeyOptions::default())
}

//! # Pitch Table
//!
//! Maps uppercase pitch-class tokens to their staff and arithmetic values.
//!
//! ## Token Shape
//! ```text
//! LETTER [ACCIDENTAL]
//!   LETTER      C D E F G A B
//!   ACCIDENTAL  (none) | N | # | ## | B | BB
//! ```
//! plus two special tokens:
//! - `R` - rest, sits on the B position with no chromatic value
//! - `X` - cross marker, pinned to octave 4 with its own glyph and shift
//!
//! ## Chromatic Values
//! Values are relative to the octave given in the descriptor. Flats on C wrap
//! into the same octave (`CB` = 11, `CBB` = 10) while sharps on B do not
//! (`B#` = 12, `B##` = 13). Downstream arithmetic depends on these exact
//! numbers, so they are kept as-is.

use serde::Serialize;

/// Accidental symbol attached to a pitch class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Accidental {
    #[serde(rename = "n")]
    Natural,
    #[serde(rename = "#")]
    Sharp,
    #[serde(rename = "##")]
    DoubleSharp,
    #[serde(rename = "b")]
    Flat,
    #[serde(rename = "bb")]
    DoubleFlat,
    /// Present but empty; used by the `X` marker
    #[serde(rename = "")]
    Blank,
}

impl Accidental {
    /// Symbol as written in rendering data
    pub fn symbol(&self) -> &'static str {
        match self {
            Accidental::Natural => "n",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
            Accidental::Flat => "b",
            Accidental::DoubleFlat => "bb",
            Accidental::Blank => "",
        }
    }
}

/// What a pitch-table entry stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchKind {
    /// A sounding pitch with a chromatic value
    Pitch,
    /// A rest placeholder
    Rest,
    /// A non-pitched marker such as `X`
    Marker,
}

/// One recognized pitch-class token
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchClassEntry {
    pub diatonic_index: u8, // 0 (C) to 6 (B)
    pub chromatic_value: Option<i32>,
    pub accidental: Option<Accidental>,
    pub is_rest: bool,
    pub fixed_octave: Option<i32>,
    pub fixed_glyph_code: Option<&'static str>,
    pub horizontal_shift: Option<f64>,
}

impl PitchClassEntry {
    const fn note(diatonic_index: u8, chromatic_value: i32, accidental: Option<Accidental>) -> Self {
        Self {
            diatonic_index,
            chromatic_value: Some(chromatic_value),
            accidental,
            is_rest: false,
            fixed_octave: None,
            fixed_glyph_code: None,
            horizontal_shift: None,
        }
    }

    pub fn kind(&self) -> PitchKind {
        if self.is_rest {
            PitchKind::Rest
        } else if self.chromatic_value.is_none() {
            PitchKind::Marker
        } else {
            PitchKind::Pitch
        }
    }
}

const REST: PitchClassEntry = PitchClassEntry {
    diatonic_index: 6,
    chromatic_value: None,
    accidental: None,
    is_rest: true,
    fixed_octave: None,
    fixed_glyph_code: None,
    horizontal_shift: None,
};

const CROSS_MARKER: PitchClassEntry = PitchClassEntry {
    diatonic_index: 6,
    chromatic_value: None,
    accidental: Some(Accidental::Blank),
    is_rest: false,
    fixed_octave: Some(4),
    fixed_glyph_code: Some("noteheadXBlack"),
    horizontal_shift: Some(5.5),
};

/// Every token the pitch table recognizes
pub const PITCH_CLASS_TOKENS: [&str; 44] = [
    "C", "CN", "C#", "C##", "CB", "CBB",
    "D", "DN", "D#", "D##", "DB", "DBB",
    "E", "EN", "E#", "E##", "EB", "EBB",
    "F", "FN", "F#", "F##", "FB", "FBB",
    "G", "GN", "G#", "G##", "GB", "GBB",
    "A", "AN", "A#", "A##", "AB", "ABB",
    "B", "BN", "B#", "B##", "BB", "BBB",
    "R", "X",
];

/// Look up an uppercase pitch-class token.
///
/// Returns `None` for anything not in the table, including lowercase input;
/// callers uppercase first.
///
/// # Examples
/// ```
/// use keyprops::pitch_class;
///
/// let c_sharp = pitch_class("C#").unwrap();
/// assert_eq!(c_sharp.diatonic_index, 0);
/// assert_eq!(c_sharp.chromatic_value, Some(1));
/// assert!(pitch_class("H").is_none());
/// ```
pub fn pitch_class(key: &str) -> Option<PitchClassEntry> {
    match key {
        "R" => return Some(REST),
        "X" => return Some(CROSS_MARKER),
        _ => {}
    }

    let mut chars = key.chars();
    let letter = chars.next()?;
    let (index, natural) = match letter {
        'C' => (0, 0),
        'D' => (1, 2),
        'E' => (2, 4),
        'F' => (3, 5),
        'G' => (4, 7),
        'A' => (5, 9),
        'B' => (6, 11),
        _ => return None,
    };

    let (accidental, offset) = match chars.as_str() {
        "" => (None, 0),
        "N" => (Some(Accidental::Natural), 0),
        "#" => (Some(Accidental::Sharp), 1),
        "##" => (Some(Accidental::DoubleSharp), 2),
        "B" => (Some(Accidental::Flat), -1),
        "BB" => (Some(Accidental::DoubleFlat), -2),
        _ => return None,
    };

    // C flats wrap within the octave; B sharps are left above 11
    let value = natural + offset;
    let value = if value < 0 { value + 12 } else { value };

    Some(PitchClassEntry::note(index, value, accidental))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_token_resolves() {
        for token in PITCH_CLASS_TOKENS {
            let entry = pitch_class(token);
            assert!(entry.is_some(), "{} should be in the pitch table", token);
            assert!(entry.unwrap().diatonic_index <= 6);
        }
    }

    #[test]
    fn test_chromatic_values_pinned() {
        let value = |key: &str| pitch_class(key).unwrap().chromatic_value;
        assert_eq!(value("C"), Some(0));
        assert_eq!(value("CB"), Some(11));
        assert_eq!(value("CBB"), Some(10));
        assert_eq!(value("DBB"), Some(0));
        assert_eq!(value("EB"), Some(3));
        assert_eq!(value("FB"), Some(4));
        assert_eq!(value("F##"), Some(7));
        assert_eq!(value("A##"), Some(11));
        assert_eq!(value("B"), Some(11));
        assert_eq!(value("B#"), Some(12));
        assert_eq!(value("B##"), Some(13));
        assert_eq!(value("BBB"), Some(9));
    }

    #[test]
    fn test_accidentals() {
        assert_eq!(pitch_class("G").unwrap().accidental, None);
        assert_eq!(pitch_class("GN").unwrap().accidental, Some(Accidental::Natural));
        assert_eq!(pitch_class("G##").unwrap().accidental, Some(Accidental::DoubleSharp));
        assert_eq!(pitch_class("GBB").unwrap().accidental, Some(Accidental::DoubleFlat));
        assert_eq!(Accidental::DoubleFlat.symbol(), "bb");
    }

    #[test]
    fn test_special_entries() {
        let rest = pitch_class("R").unwrap();
        assert_eq!(rest.kind(), PitchKind::Rest);
        assert_eq!(rest.diatonic_index, 6);
        assert_eq!(rest.chromatic_value, None);
        assert_eq!(rest.accidental, None);

        let marker = pitch_class("X").unwrap();
        assert_eq!(marker.kind(), PitchKind::Marker);
        assert_eq!(marker.fixed_octave, Some(4));
        assert_eq!(marker.fixed_glyph_code, Some("noteheadXBlack"));
        assert_eq!(marker.horizontal_shift, Some(5.5));
        assert_eq!(marker.accidental, Some(Accidental::Blank));

        assert_eq!(pitch_class("E").unwrap().kind(), PitchKind::Pitch);
    }

    #[test]
    fn test_rejects_unknown_tokens() {
        assert!(pitch_class("").is_none());
        assert!(pitch_class("Z").is_none());
        assert!(pitch_class("c").is_none());
        assert!(pitch_class("C###").is_none());
        assert!(pitch_class("CBBB").is_none());
        assert!(pitch_class("RN").is_none());
    }
}

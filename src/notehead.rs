//! # Notehead Resolver
//!
//! Turns a notehead style token (the optional third descriptor segment) into a
//! SMuFL-style glyph name.
//!
//! Style tokens come in two kinds:
//! - **Fixed** tokens name exactly one glyph (`D0`, `T2`, `S1`, solfège `DO`..`TI`)
//! - **Family** tokens pick a glyph from a family by duration (`N`, `D`, `X`, ...)
//!
//! Every family has four variants: double whole, whole, half, and a filled
//! glyph shared by everything shorter than a half.

/// Glyph variants of one notehead family, by duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphFamily {
    pub double_whole: &'static str,
    pub whole: &'static str,
    pub half: &'static str,
    pub black: &'static str,
}

impl GlyphFamily {
    /// Pick the variant for a canonical duration token
    pub fn glyph_for(&self, duration: &str) -> &'static str {
        match duration {
            "1/2" => self.double_whole,
            "1" => self.whole,
            "2" => self.half,
            _ => self.black,
        }
    }
}

const DIAMOND: GlyphFamily = GlyphFamily {
    double_whole: "noteheadDiamondDoubleWhole",
    whole: "noteheadDiamondWhole",
    half: "noteheadDiamondHalf",
    black: "noteheadDiamondBlack",
};

const NORMAL: GlyphFamily = GlyphFamily {
    double_whole: "noteheadDoubleWhole",
    whole: "noteheadWhole",
    half: "noteheadHalf",
    black: "noteheadBlack",
};

const CROSS: GlyphFamily = GlyphFamily {
    double_whole: "noteheadXDoubleWhole",
    whole: "noteheadXWhole",
    half: "noteheadXHalf",
    black: "noteheadXBlack",
};

const CIRCLE_X: GlyphFamily = GlyphFamily {
    double_whole: "noteheadCircleXDoubleWhole",
    whole: "noteheadCircleXWhole",
    half: "noteheadCircleXHalf",
    black: "noteheadCircleX",
};

const CIRCLED: GlyphFamily = GlyphFamily {
    double_whole: "noteheadCircledDoubleWhole",
    whole: "noteheadCircledWhole",
    half: "noteheadCircledHalf",
    black: "noteheadCircledBlack",
};

// Whole and half share the open square
const SQUARE: GlyphFamily = GlyphFamily {
    double_whole: "noteheadDoubleWholeSquare",
    whole: "noteheadSquareWhite",
    half: "noteheadSquareWhite",
    black: "noteheadSquareBlack",
};

const TRIANGLE_UP: GlyphFamily = GlyphFamily {
    double_whole: "noteheadTriangleUpDoubleWhole",
    whole: "noteheadTriangleUpWhole",
    half: "noteheadTriangleUpHalf",
    black: "noteheadTriangleUpBlack",
};

const TRIANGLE_DOWN: GlyphFamily = GlyphFamily {
    double_whole: "noteheadTriangleDownDoubleWhole",
    whole: "noteheadTriangleDownWhole",
    half: "noteheadTriangleDownHalf",
    black: "noteheadTriangleDownBlack",
};

const SLASHED_FORWARD: GlyphFamily = GlyphFamily {
    double_whole: "noteheadSlashedDoubleWhole1",
    whole: "noteheadSlashedWhole1",
    half: "noteheadSlashedHalf1",
    black: "noteheadSlashedBlack1",
};

const SLASHED_BACKWARD: GlyphFamily = GlyphFamily {
    double_whole: "noteheadSlashedDoubleWhole2",
    whole: "noteheadSlashedWhole2",
    half: "noteheadSlashedHalf2",
    black: "noteheadSlashedBlack2",
};

/// How a style token chooses its glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteheadStyle {
    Fixed(&'static str),
    Family(&'static GlyphFamily),
}

impl NoteheadStyle {
    /// Parse an uppercase style token
    pub fn from_token(token: &str) -> Option<Self> {
        use NoteheadStyle::{Family, Fixed};

        let style = match token {
            // Diamond
            "D0" => Fixed("noteheadDiamondWhole"),
            "D1" => Fixed("noteheadDiamondHalf"),
            "D2" | "D3" => Fixed("noteheadDiamondBlack"),

            // Triangle
            "T0" => Fixed("noteheadTriangleUpWhole"),
            "T1" => Fixed("noteheadTriangleUpHalf"),
            "T2" | "T3" => Fixed("noteheadTriangleUpBlack"),

            // Cross
            "X0" => Fixed("noteheadXWhole"),
            "X1" => Fixed("noteheadXHalf"),
            "X2" => Fixed("noteheadXBlack"),
            "X3" => Fixed("noteheadCircleX"),

            // Square
            "S1" => Fixed("noteheadSquareWhite"),
            "S2" => Fixed("noteheadSquareBlack"),

            // Rectangle (no SMuFL code point)
            "R1" => Fixed("vexNoteHeadRectWhite"),
            "R2" => Fixed("vexNoteHeadRectBlack"),

            // Shape-note solfège
            "DO" => Fixed("noteheadTriangleUpBlack"),
            "RE" => Fixed("noteheadMoonBlack"),
            "MI" => Fixed("noteheadDiamondBlack"),
            "FA" => Fixed("noteheadTriangleLeftBlack"),
            "FAUP" => Fixed("noteheadTriangleRightBlack"),
            "SO" => Fixed("noteheadBlack"),
            "LA" => Fixed("noteheadSquareBlack"),
            "TI" => Fixed("noteheadTriangleRoundDownBlack"),

            // H and M are older spellings of D and X
            "D" | "H" => Family(&DIAMOND),
            "N" | "G" => Family(&NORMAL),
            "X" | "M" => Family(&CROSS),
            "CX" => Family(&CIRCLE_X),
            "CI" => Family(&CIRCLED),
            "SQ" => Family(&SQUARE),
            "TU" => Family(&TRIANGLE_UP),
            "TD" => Family(&TRIANGLE_DOWN),
            "SF" => Family(&SLASHED_FORWARD),
            "SB" => Family(&SLASHED_BACKWARD),

            _ => return None,
        };
        Some(style)
    }

    pub fn glyph_for(&self, duration: &str) -> &'static str {
        match self {
            NoteheadStyle::Fixed(code) => *code,
            NoteheadStyle::Family(family) => family.glyph_for(duration),
        }
    }
}

/// Resolve a style token and canonical duration to a glyph name.
///
/// Unknown tokens resolve to an empty string rather than an error.
///
/// # Examples
/// ```
/// use keyprops::resolve_notehead_code;
///
/// assert_eq!(resolve_notehead_code("D2", "4"), "noteheadDiamondBlack");
/// assert_eq!(resolve_notehead_code("N", "2"), "noteheadHalf");
/// assert_eq!(resolve_notehead_code("??", "4"), "");
/// ```
pub fn resolve_notehead_code(style: &str, duration: &str) -> &'static str {
    NoteheadStyle::from_token(style)
        .map(|style| style.glyph_for(duration))
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_tokens_ignore_duration() {
        for duration in ["1/2", "1", "2", "4", "64"] {
            assert_eq!(resolve_notehead_code("D0", duration), "noteheadDiamondWhole");
            assert_eq!(resolve_notehead_code("X3", duration), "noteheadCircleX");
            assert_eq!(resolve_notehead_code("R1", duration), "vexNoteHeadRectWhite");
            assert_eq!(resolve_notehead_code("FAUP", duration), "noteheadTriangleRightBlack");
        }
    }

    #[test]
    fn test_solfege() {
        assert_eq!(resolve_notehead_code("DO", "4"), "noteheadTriangleUpBlack");
        assert_eq!(resolve_notehead_code("RE", "4"), "noteheadMoonBlack");
        assert_eq!(resolve_notehead_code("MI", "4"), "noteheadDiamondBlack");
        assert_eq!(resolve_notehead_code("FA", "4"), "noteheadTriangleLeftBlack");
        assert_eq!(resolve_notehead_code("SO", "4"), "noteheadBlack");
        assert_eq!(resolve_notehead_code("LA", "4"), "noteheadSquareBlack");
        assert_eq!(resolve_notehead_code("TI", "4"), "noteheadTriangleRoundDownBlack");
    }

    #[test]
    fn test_family_by_duration() {
        assert_eq!(resolve_notehead_code("N", "1/2"), "noteheadDoubleWhole");
        assert_eq!(resolve_notehead_code("N", "1"), "noteheadWhole");
        assert_eq!(resolve_notehead_code("N", "2"), "noteheadHalf");
        assert_eq!(resolve_notehead_code("N", "4"), "noteheadBlack");
        assert_eq!(resolve_notehead_code("N", "256"), "noteheadBlack");

        assert_eq!(resolve_notehead_code("CX", "1"), "noteheadCircleXWhole");
        assert_eq!(resolve_notehead_code("CX", "8"), "noteheadCircleX");
        assert_eq!(resolve_notehead_code("TD", "2"), "noteheadTriangleDownHalf");
        assert_eq!(resolve_notehead_code("SB", "1/2"), "noteheadSlashedDoubleWhole2");
        assert_eq!(resolve_notehead_code("SF", "16"), "noteheadSlashedBlack1");
    }

    #[test]
    fn test_square_whole_and_half_share_glyph() {
        assert_eq!(resolve_notehead_code("SQ", "1/2"), "noteheadDoubleWholeSquare");
        assert_eq!(resolve_notehead_code("SQ", "1"), "noteheadSquareWhite");
        assert_eq!(resolve_notehead_code("SQ", "2"), "noteheadSquareWhite");
        assert_eq!(resolve_notehead_code("SQ", "4"), "noteheadSquareBlack");
    }

    #[test]
    fn test_legacy_spellings_match() {
        for duration in ["1/2", "1", "2", "4"] {
            assert_eq!(resolve_notehead_code("H", duration), resolve_notehead_code("D", duration));
            assert_eq!(resolve_notehead_code("M", duration), resolve_notehead_code("X", duration));
            assert_eq!(resolve_notehead_code("G", duration), resolve_notehead_code("N", duration));
        }
    }

    #[test]
    fn test_unknown_style_is_empty() {
        assert_eq!(resolve_notehead_code("", "4"), "");
        assert_eq!(resolve_notehead_code("d2", "4"), "");
        assert_eq!(resolve_notehead_code("S3", "4"), "");
        assert!(NoteheadStyle::from_token("Q").is_none());
    }
}

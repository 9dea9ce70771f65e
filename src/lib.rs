pub mod clef;
pub mod duration;
pub mod error;
pub mod notehead;
pub mod pitch;
pub mod properties;

pub use clef::{clef_properties, ClefEntry, DEFAULT_CLEF};
pub use duration::{duration_to_ticks, sanitize_duration, DurationEntry, RESOLUTION};
pub use error::*;
pub use notehead::resolve_notehead_code;
pub use pitch::{pitch_class, Accidental, PitchClassEntry, PitchKind};
pub use properties::{key_properties, resolve, KeyOptions, KeyProperties, StemDirection};

/// Resolve several descriptors against one clef and option set.
/// Stops at the first descriptor that fails.
pub fn key_properties_all<'a, I>(
    descriptors: I,
    clef: &str,
    options: &KeyOptions,
) -> Result<Vec<KeyProperties>, KeyPropsError>
where
    I: IntoIterator<Item = &'a str>,
{
    descriptors
        .into_iter()
        .map(|descriptor| key_properties(descriptor, clef, options))
        .collect()
}

//! Static read-only catalogs the engine resolves ids against.
//!
//! All tables are built once and never mutated. Misses are expected and
//! handled through [`lookup_or_default`] rather than errors.

pub mod ingredients;
pub mod sub_protocols;
pub mod themes;
pub mod tracks;

pub use ingredients::{ingredient, Ingredient};
pub use sub_protocols::{sub_protocol, sub_protocols_for_intent, SubProtocolOption};
pub use themes::{theme_or_default, Theme, THEMES};
pub use tracks::{music_for_persona, track_or_default, Track, TrackKind};

use crate::engine::persona::PersonaCode;

/// Return the first item matching `predicate`, else the first item of `items`.
///
/// `None` only when `items` is empty.
pub fn lookup_or_default<'a, T>(items: &'a [T], predicate: impl Fn(&T) -> bool) -> Option<&'a T> {
    items.iter().find(|item| predicate(item)).or_else(|| items.first())
}

/// Display color for a persona.
pub fn persona_color(code: PersonaCode) -> &'static str {
    match code {
        PersonaCode::P1Safety => "#8FB8DE",
        PersonaCode::P2Circulation => "#F4A261",
        PersonaCode::P3Muscle => "#E76F51",
        PersonaCode::P4Sleep => "#6C63FF",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_or_default() {
        let items = [1, 2, 3];
        assert_eq!(lookup_or_default(&items, |i| *i == 2), Some(&2));
        assert_eq!(lookup_or_default(&items, |i| *i == 9), Some(&1));

        let empty: [u8; 0] = [];
        assert_eq!(lookup_or_default(&empty, |_| true), None);
    }
}

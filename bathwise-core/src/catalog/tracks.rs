//! Music and ambience tracks keyed by the personas they suit.

use serde::{Deserialize, Serialize};

use super::lookup_or_default;
use crate::engine::persona::PersonaCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Music,
    Ambience,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: TrackKind,
    pub persona_codes: &'static [PersonaCode],
    pub duration_seconds: u32,
}

use PersonaCode::{P1Safety, P2Circulation, P3Muscle, P4Sleep};

pub static MUSIC: &[Track] = &[
    Track {
        id: "music_slow_piano",
        title: "느린 피아노",
        kind: TrackKind::Music,
        persona_codes: &[P4Sleep, P1Safety],
        duration_seconds: 1200,
    },
    Track {
        id: "music_warm_acoustic",
        title: "따뜻한 어쿠스틱",
        kind: TrackKind::Music,
        persona_codes: &[P2Circulation],
        duration_seconds: 900,
    },
    Track {
        id: "music_lofi_groove",
        title: "로파이 그루브",
        kind: TrackKind::Music,
        persona_codes: &[P3Muscle],
        duration_seconds: 900,
    },
    Track {
        id: "music_forest_strings",
        title: "숲의 현악",
        kind: TrackKind::Music,
        persona_codes: &[],
        duration_seconds: 1080,
    },
];

pub static AMBIENCE: &[Track] = &[
    Track {
        id: "amb_rain_window",
        title: "창밖의 빗소리",
        kind: TrackKind::Ambience,
        persona_codes: &[P4Sleep, P1Safety],
        duration_seconds: 1800,
    },
    Track {
        id: "amb_fireplace",
        title: "벽난로",
        kind: TrackKind::Ambience,
        persona_codes: &[P2Circulation],
        duration_seconds: 1800,
    },
    Track {
        id: "amb_ocean_waves",
        title: "파도",
        kind: TrackKind::Ambience,
        persona_codes: &[P3Muscle],
        duration_seconds: 1800,
    },
    Track {
        id: "amb_forest_birds",
        title: "숲속 새소리",
        kind: TrackKind::Ambience,
        persona_codes: &[],
        duration_seconds: 1800,
    },
];

fn tracks_of(kind: TrackKind) -> &'static [Track] {
    match kind {
        TrackKind::Music => MUSIC,
        TrackKind::Ambience => AMBIENCE,
    }
}

/// First track of `kind` listing `code`, else the first track of that kind.
pub fn music_for_persona(code: PersonaCode, kind: TrackKind) -> Option<&'static Track> {
    lookup_or_default(tracks_of(kind), |t| t.persona_codes.contains(&code))
}

/// Track by id, else the first track of that kind.
pub fn track_or_default(id: &str, kind: TrackKind) -> Option<&'static Track> {
    lookup_or_default(tracks_of(kind), |t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_pick() {
        let track = music_for_persona(P3Muscle, TrackKind::Music).unwrap();
        assert_eq!(track.id, "music_lofi_groove");

        let ambience = music_for_persona(P4Sleep, TrackKind::Ambience).unwrap();
        assert_eq!(ambience.id, "amb_rain_window");
    }

    #[test]
    fn test_unknown_id_falls_back_to_first() {
        let track = track_or_default("missing", TrackKind::Ambience).unwrap();
        assert_eq!(track.id, AMBIENCE[0].id);
    }
}

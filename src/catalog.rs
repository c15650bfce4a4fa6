//! Sound & Music Catalog
//!
//! Static lookup tables describing everything the mixer can play: the music
//! categories with their ordered playlists, and the fixed set of ambient
//! sound loops. No mutable state; the tables are the single source of truth
//! for channel setup and volume-map initialization.

/// File extension shared by every bundled audio source
pub const AUDIO_EXTENSION: &str = "ogg";

/// A music category with an ordered playlist of track identifiers.
///
/// Exactly one category is selected at any time; the music channel advances
/// through the selected category's playlist with wrap-around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MusicCategory {
    /// Laid-back background music
    Chill,
    /// Music for concentration
    Focus,
    /// Music for winding down
    Sleep,
    /// No music; ambience only
    Off,
}

impl MusicCategory {
    /// All categories, in menu order
    pub const ALL: &'static [MusicCategory] = &[
        MusicCategory::Chill,
        MusicCategory::Focus,
        MusicCategory::Sleep,
        MusicCategory::Off,
    ];

    /// Human-readable name shown in the UI
    pub fn display_name(&self) -> &'static str {
        match self {
            MusicCategory::Chill => "Chill",
            MusicCategory::Focus => "Focus",
            MusicCategory::Sleep => "Sleep",
            MusicCategory::Off => "Off",
        }
    }

    /// Ordered track identifiers for this category's playlist.
    ///
    /// May be empty; an empty playlist yields silent music output.
    pub fn tracks(&self) -> &'static [&'static str] {
        match self {
            MusicCategory::Chill => &["chill-01", "chill-02", "chill-03"],
            MusicCategory::Focus => &["focus-01", "focus-02", "focus-03"],
            MusicCategory::Sleep => &["sleep-01", "sleep-02"],
            MusicCategory::Off => &[],
        }
    }

    /// Library subdirectory holding this category's tracks
    pub fn subdirectory(&self) -> &'static str {
        match self {
            MusicCategory::Chill => "music/chill",
            MusicCategory::Focus => "music/focus",
            MusicCategory::Sleep => "music/sleep",
            MusicCategory::Off => "music",
        }
    }

    /// Look up a category by its display name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        MusicCategory::ALL
            .iter()
            .copied()
            .find(|c| c.display_name().eq_ignore_ascii_case(name))
    }
}

impl Default for MusicCategory {
    fn default() -> Self {
        MusicCategory::Chill
    }
}

/// An ambient sound loop.
///
/// The set is fixed at compile time; every sound has at most one live
/// channel at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmbientSound {
    /// Steady rainfall
    Rain,
    /// Wind through trees
    Wind,
    /// Alpha-wave tone
    Alpha,
}

impl AmbientSound {
    /// All ambient sounds, in menu order
    pub const ALL: &'static [AmbientSound] =
        &[AmbientSound::Rain, AmbientSound::Wind, AmbientSound::Alpha];

    /// Human-readable name shown in the UI
    pub fn display_name(&self) -> &'static str {
        match self {
            AmbientSound::Rain => "Rain",
            AmbientSound::Wind => "Wind",
            AmbientSound::Alpha => "Alpha Waves",
        }
    }

    /// Icon identifier for the UI layer
    pub fn icon(&self) -> &'static str {
        match self {
            AmbientSound::Rain => "cloud.rain",
            AmbientSound::Wind => "wind",
            AmbientSound::Alpha => "waveform",
        }
    }

    /// Source file identifier (stem) within the ambience subdirectory
    pub fn identifier(&self) -> &'static str {
        match self {
            AmbientSound::Rain => "rain",
            AmbientSound::Wind => "wind",
            AmbientSound::Alpha => "alpha",
        }
    }

    /// Library subdirectory holding the ambient loops
    pub fn subdirectory(&self) -> &'static str {
        "ambience"
    }

    /// Look up a sound by identifier or display name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        AmbientSound::ALL.iter().copied().find(|s| {
            s.identifier().eq_ignore_ascii_case(name)
                || s.display_name().eq_ignore_ascii_case(name)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tables_complete() {
        assert_eq!(MusicCategory::ALL.len(), 4);
        for category in MusicCategory::ALL {
            assert!(!category.display_name().is_empty());
            assert!(!category.subdirectory().is_empty());
            for track in category.tracks() {
                assert!(!track.is_empty(), "empty track id in {:?}", category);
            }
        }
    }

    #[test]
    fn test_off_category_has_no_tracks() {
        assert!(MusicCategory::Off.tracks().is_empty());
    }

    #[test]
    fn test_ambient_tables_complete() {
        assert_eq!(AmbientSound::ALL.len(), 3);
        for sound in AmbientSound::ALL {
            assert!(!sound.display_name().is_empty());
            assert!(!sound.icon().is_empty());
            assert!(!sound.identifier().is_empty());
            assert_eq!(sound.subdirectory(), "ambience");
        }
    }

    #[test]
    fn test_ambient_identifiers_unique() {
        for (i, a) in AmbientSound::ALL.iter().enumerate() {
            for b in &AmbientSound::ALL[i + 1..] {
                assert_ne!(a.identifier(), b.identifier());
            }
        }
    }

    #[test]
    fn test_category_from_name() {
        assert_eq!(MusicCategory::from_name("focus"), Some(MusicCategory::Focus));
        assert_eq!(MusicCategory::from_name("FOCUS"), Some(MusicCategory::Focus));
        assert_eq!(MusicCategory::from_name("metal"), None);
    }

    #[test]
    fn test_ambient_from_name() {
        assert_eq!(AmbientSound::from_name("rain"), Some(AmbientSound::Rain));
        assert_eq!(AmbientSound::from_name("Alpha Waves"), Some(AmbientSound::Alpha));
        assert_eq!(AmbientSound::from_name("surf"), None);
    }

    #[test]
    fn test_default_category_is_first() {
        assert_eq!(MusicCategory::default(), MusicCategory::ALL[0]);
    }
}

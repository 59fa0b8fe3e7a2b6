use serde::Serialize;

// Category codes as reported by the platform's package metadata service.
const CODE_GAME: i32 = 0;
const CODE_AUDIO: i32 = 1;
const CODE_VIDEO: i32 = 2;
const CODE_IMAGE: i32 = 3;
const CODE_SOCIAL: i32 = 4;
const CODE_NEWS: i32 = 5;
const CODE_MAPS: i32 = 6;
const CODE_PRODUCTIVITY: i32 = 7;

/// Store category of an installed package.
///
/// Closed enumeration over the platform's category codes; anything the
/// platform does not classify (including its "undefined" marker) is
/// `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AppCategory {
    Game,
    Audio,
    Video,
    Image,
    Social,
    News,
    Maps,
    Productivity,
    Other,
}

impl AppCategory {
    /// Total mapping from a platform category code.
    pub fn from_platform_code(code: i32) -> Self {
        match code {
            CODE_GAME => Self::Game,
            CODE_AUDIO => Self::Audio,
            CODE_VIDEO => Self::Video,
            CODE_IMAGE => Self::Image,
            CODE_SOCIAL => Self::Social,
            CODE_NEWS => Self::News,
            CODE_MAPS => Self::Maps,
            CODE_PRODUCTIVITY => Self::Productivity,
            _ => Self::Other,
        }
    }

    /// UI display string for the category.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Game => "Game",
            Self::Audio => "Audio",
            Self::Video => "Video",
            Self::Image => "Image",
            Self::Social => "Social",
            Self::News => "News",
            Self::Maps => "Maps",
            Self::Productivity => "Productivity",
            Self::Other => "Other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_platform_code_known_codes() {
        assert_eq!(AppCategory::from_platform_code(0), AppCategory::Game);
        assert_eq!(AppCategory::from_platform_code(4), AppCategory::Social);
        assert_eq!(AppCategory::from_platform_code(7), AppCategory::Productivity);
    }

    #[test]
    fn test_from_platform_code_defaults_to_other() {
        // -1 is the platform's "undefined" marker
        assert_eq!(AppCategory::from_platform_code(-1), AppCategory::Other);
        assert_eq!(AppCategory::from_platform_code(8), AppCategory::Other);
        assert_eq!(AppCategory::from_platform_code(i32::MAX), AppCategory::Other);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(AppCategory::Game.display_name(), "Game");
        assert_eq!(AppCategory::Other.display_name(), "Other");
    }
}

//! Floor model
//!
//! Each background theme paints its ground at a different height, and the
//! height also depends on the size class the background was drawn for. The
//! floor offset is expressed as a percentage of panel height measured up from
//! the panel bottom.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Background theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    None,
    Castle,
    Forest,
    Beach,
    Winter,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::None,
        Theme::Castle,
        Theme::Forest,
        Theme::Beach,
        Theme::Winter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::None => "none",
            Theme::Castle => "castle",
            Theme::Forest => "forest",
            Theme::Beach => "beach",
            Theme::Winter => "winter",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Theme::None),
            "castle" => Ok(Theme::Castle),
            "forest" => Ok(Theme::Forest),
            "beach" => Ok(Theme::Beach),
            "winter" => Ok(Theme::Winter),
            _ => Err(ConfigError::UnknownTheme(s.to_string())),
        }
    }
}

/// Creature size class (ordinal: nano < small < medium < large)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PetSize {
    Nano,
    Small,
    #[default]
    Medium,
    Large,
}

impl PetSize {
    pub const ALL: [PetSize; 4] = [PetSize::Nano, PetSize::Small, PetSize::Medium, PetSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            PetSize::Nano => "nano",
            PetSize::Small => "small",
            PetSize::Medium => "medium",
            PetSize::Large => "large",
        }
    }

    /// Sprite footprint in pixels (square)
    pub fn footprint(&self) -> f32 {
        match self {
            PetSize::Nano => 30.0,
            PetSize::Small => 40.0,
            PetSize::Medium => 50.0,
            PetSize::Large => 65.0,
        }
    }

    /// Base walking speed in pixels per tick
    pub fn base_speed(&self) -> f32 {
        match self {
            PetSize::Nano => 1.0,
            PetSize::Small => 1.5,
            PetSize::Medium => 2.0,
            PetSize::Large => 2.5,
        }
    }

    /// Radius of a ball thrown for a pet of this size
    pub fn ball_radius(&self) -> f32 {
        match self {
            PetSize::Nano => 15.0,
            PetSize::Small => 20.0,
            PetSize::Medium => 25.0,
            PetSize::Large => 30.0,
        }
    }

    /// Size class a background is drawn at for a panel of the given width
    pub fn for_panel_width(width: f32) -> Self {
        if width < 300.0 {
            PetSize::Nano
        } else if width < 500.0 {
            PetSize::Small
        } else if width < 800.0 {
            PetSize::Medium
        } else {
            PetSize::Large
        }
    }
}

impl fmt::Display for PetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nano" => Ok(PetSize::Nano),
            "small" => Ok(PetSize::Small),
            "medium" | "med" => Ok(PetSize::Medium),
            "large" => Ok(PetSize::Large),
            _ => Err(ConfigError::UnknownSize(s.to_string())),
        }
    }
}

/// Floor height as a percentage of panel height, measured from the bottom
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FloorOffset(pub f32);

impl FloorOffset {
    pub const ZERO: FloorOffset = FloorOffset(0.0);

    #[inline]
    pub fn percent(&self) -> f32 {
        self.0
    }

    /// Y coordinate (top-down) of the floor line inside a panel
    #[inline]
    pub fn floor_y(&self, panel_height: f32) -> f32 {
        panel_height * (1.0 - self.0 / 100.0)
    }

    /// Distance in pixels from the panel bottom up to the floor line
    #[inline]
    pub fn bottom_px(&self, panel_height: f32) -> f32 {
        panel_height * self.0 / 100.0
    }
}

impl fmt::Display for FloorOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Floor offset for a theme drawn at a size class
pub fn floor_offset(theme: Theme, size: PetSize) -> FloorOffset {
    use PetSize::*;

    let percent = match (theme, size) {
        (Theme::None, _) => 0.0,
        (Theme::Castle | Theme::Beach, Nano) => 11.25,
        (Theme::Castle | Theme::Beach, Small) => 15.0,
        (Theme::Castle | Theme::Beach, Medium) => 20.0,
        (Theme::Castle | Theme::Beach, Large) => 30.0,
        (Theme::Forest, Nano) => 5.75,
        (Theme::Forest, Small) => 7.5,
        (Theme::Forest, Medium) => 10.0,
        (Theme::Forest, Large) => 16.25,
        (Theme::Winter, Nano) => 4.5,
        (Theme::Winter, Small) => 5.0,
        (Theme::Winter, Medium) => 7.5,
        (Theme::Winter, Large) => 11.25,
    };
    FloorOffset(percent)
}

/// Floor offset for loosely typed names; unknown names fall back to 0%
pub fn floor_offset_by_name(theme: &str, size: &str) -> FloorOffset {
    match (theme.parse::<Theme>(), size.parse::<PetSize>()) {
        (Ok(t), Ok(s)) => floor_offset(t, s),
        _ => {
            log::warn!("No floor entry for theme '{}' / size '{}', using 0%", theme, size);
            FloorOffset::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_theme_is_flat() {
        for size in PetSize::ALL {
            assert_eq!(floor_offset(Theme::None, size), FloorOffset::ZERO);
            assert_eq!(floor_offset(Theme::None, size).to_string(), "0%");
        }
    }

    #[test]
    fn test_published_table() {
        assert_eq!(floor_offset(Theme::Castle, PetSize::Large).to_string(), "30%");
        assert_eq!(floor_offset(Theme::Beach, PetSize::Nano).to_string(), "11.25%");
        assert_eq!(floor_offset(Theme::Forest, PetSize::Large).to_string(), "16.25%");
        assert_eq!(floor_offset(Theme::Forest, PetSize::Small).to_string(), "7.5%");
        assert_eq!(floor_offset(Theme::Winter, PetSize::Small).to_string(), "5%");
        assert_eq!(floor_offset(Theme::Winter, PetSize::Medium).to_string(), "7.5%");
    }

    #[test]
    fn test_floor_grows_with_size() {
        for theme in Theme::ALL {
            let offsets: Vec<f32> = PetSize::ALL
                .iter()
                .map(|s| floor_offset(theme, *s).percent())
                .collect();
            assert!(offsets.windows(2).all(|w| w[0] <= w[1]), "{theme}: {offsets:?}");
        }
    }

    #[test]
    fn test_by_name_fallback() {
        assert_eq!(floor_offset_by_name("castle", "large"), FloorOffset(30.0));
        assert_eq!(floor_offset_by_name("Forest", "medium"), FloorOffset(10.0));
        assert_eq!(floor_offset_by_name("moon", "large"), FloorOffset::ZERO);
        assert_eq!(floor_offset_by_name("castle", "huge"), FloorOffset::ZERO);
    }

    #[test]
    fn test_floor_y() {
        let offset = FloorOffset(20.0);
        assert!((offset.floor_y(500.0) - 400.0).abs() < 0.001);
        assert!((offset.bottom_px(500.0) - 100.0).abs() < 0.001);
        assert!((FloorOffset::ZERO.floor_y(300.0) - 300.0).abs() < 0.001);
    }

    #[test]
    fn test_panel_width_breakpoints() {
        assert_eq!(PetSize::for_panel_width(299.0), PetSize::Nano);
        assert_eq!(PetSize::for_panel_width(300.0), PetSize::Small);
        assert_eq!(PetSize::for_panel_width(799.0), PetSize::Medium);
        assert_eq!(PetSize::for_panel_width(800.0), PetSize::Large);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Winter".parse::<Theme>().ok(), Some(Theme::Winter));
        assert!("lava".parse::<Theme>().is_err());
        assert_eq!("nano".parse::<PetSize>().ok(), Some(PetSize::Nano));
        assert!(PetSize::Nano < PetSize::Large);
    }
}

//! Color schemes and palettes

use bulbswitch_core::Color;
use serde::{Deserialize, Serialize};

/// Light or dark appearance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// The other scheme
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorScheme::Light => f.write_str("light"),
            ColorScheme::Dark => f.write_str("dark"),
        }
    }
}

/// Colors used by one scheme
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: Color,
    /// Fill of the bulb the string hangs from
    pub bulb: Color,
}

impl ThemePalette {
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            bulb: Color::from_hex(0xffd54f),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::from_hex(0x121212),
            bulb: Color::from_hex(0x616161),
        }
    }

    /// Built-in palette for a scheme
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }
}

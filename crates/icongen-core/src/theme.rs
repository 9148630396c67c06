//! Icon theme enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual theme of an icon.
///
/// Closed enumeration of the three supported themes. `Fill` and
/// `Outline` are single-color themes that convey color purely through
/// CSS/`currentColor` semantics; `Twotone` legitimately carries two
/// baked color values.
///
/// # Examples
///
/// ```
/// use icongen_core::ThemeType;
///
/// assert_eq!(ThemeType::Fill.as_str(), "fill");
/// assert_eq!(ThemeType::Twotone.identifier_suffix(), "TwoTone");
/// assert!(!ThemeType::Twotone.is_single_color());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    /// Solid filled icons.
    Fill,
    /// Outlined icons.
    Outline,
    /// Dual-color icons with primary and secondary color slots.
    Twotone,
}

impl ThemeType {
    /// All themes in the fixed iteration order used for aggregate
    /// output: fill, then outline, then twotone.
    pub const ALL: [Self; 3] = [Self::Fill, Self::Outline, Self::Twotone];

    /// Returns the lowercase theme name, which is also the name of the
    /// per-theme source and output subdirectories.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Outline => "outline",
            Self::Twotone => "twotone",
        }
    }

    /// Returns the suffix appended to the PascalCase icon name when
    /// deriving a generated module identifier.
    #[must_use]
    pub const fn identifier_suffix(self) -> &'static str {
        match self {
            Self::Fill => "Fill",
            Self::Outline => "Outline",
            Self::Twotone => "TwoTone",
        }
    }

    /// Returns `true` for themes whose icons carry no baked-in colors.
    ///
    /// The optimizer strips `fill` attributes for these themes.
    #[must_use]
    pub const fn is_single_color(self) -> bool {
        matches!(self, Self::Fill | Self::Outline)
    }
}

impl fmt::Display for ThemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fill" => Ok(Self::Fill),
            "outline" => Ok(Self::Outline),
            "twotone" => Ok(Self::Twotone),
            other => Err(crate::Error::Config {
                message: format!("unknown theme '{other}' (expected fill, outline or twotone)"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_order_is_fixed() {
        assert_eq!(
            ThemeType::ALL,
            [ThemeType::Fill, ThemeType::Outline, ThemeType::Twotone]
        );
    }

    #[test]
    fn test_theme_as_str() {
        assert_eq!(ThemeType::Fill.as_str(), "fill");
        assert_eq!(ThemeType::Outline.as_str(), "outline");
        assert_eq!(ThemeType::Twotone.as_str(), "twotone");
    }

    #[test]
    fn test_identifier_suffix() {
        assert_eq!(ThemeType::Fill.identifier_suffix(), "Fill");
        assert_eq!(ThemeType::Outline.identifier_suffix(), "Outline");
        assert_eq!(ThemeType::Twotone.identifier_suffix(), "TwoTone");
    }

    #[test]
    fn test_single_color() {
        assert!(ThemeType::Fill.is_single_color());
        assert!(ThemeType::Outline.is_single_color());
        assert!(!ThemeType::Twotone.is_single_color());
    }

    #[test]
    fn test_from_str_round_trip() {
        for theme in ThemeType::ALL {
            assert_eq!(theme.as_str().parse::<ThemeType>().unwrap(), theme);
        }
        assert!("solid".parse::<ThemeType>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ThemeType::Twotone).unwrap();
        assert_eq!(json, "\"twotone\"");
        let back: ThemeType = serde_json::from_str("\"fill\"").unwrap();
        assert_eq!(back, ThemeType::Fill);
    }
}

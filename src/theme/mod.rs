use hex::FromHex;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

pub(crate) mod registry;

pub use registry::{LoadSchemeError, SchemeRegistry};

/// An RGB color.
///
/// Colors are parsed from hex strings (`#1a2b3c` or `1a2b3c`). Anything else is
/// rejected at parse time so a malformed value can never reach a style
/// attribute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The relative luminance, used to pick readable text on top of this color.
    pub(crate) fn luminance(&self) -> f64 {
        (0.2126 * self.r as f64 + 0.7152 * self.g as f64 + 0.0722 * self.b as f64) / 255.0
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.strip_prefix('#').unwrap_or(input);
        let values = <[u8; 3]>::from_hex(input)?;
        Ok(Self { r: values[0], g: values[1], b: values[2] })
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode([self.r, self.g, self.b]))
    }
}

/// An error parsing a color.
#[derive(thiserror::Error, Debug)]
pub enum ParseColorError {
    #[error("invalid hex color: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// A named five color palette.
///
/// Every scheme carries exactly these five colors; there is no alpha channel
/// and no optional entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ColorScheme {
    pub name: String,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub text: Color,
}

impl ColorScheme {
    /// Resolve a symbolic theme token (`$primary`, `$accent`, ...) to its color.
    pub(crate) fn token(&self, name: &str) -> Option<Color> {
        let color = match name {
            "primary" => self.primary,
            "secondary" => self.secondary,
            "accent" => self.accent,
            "background" => self.background,
            "text" => self.text,
            _ => return None,
        };
        Some(color)
    }
}

/// A heading/subheading/body font trio.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FontPairing {
    pub heading: String,
    pub subheading: String,
    pub body: String,
}

impl FontPairing {
    fn new(heading: &str, subheading: &str, body: &str) -> Self {
        Self { heading: heading.into(), subheading: subheading.into(), body: body.into() }
    }

    fn luxury() -> Self {
        Self::new("Playfair Display", "Cormorant Garamond", "Lato")
    }

    fn modern() -> Self {
        Self::new("Montserrat", "Raleway", "Open Sans")
    }

    fn traditional() -> Self {
        Self::new("Merriweather", "Lora", "Source Sans Pro")
    }

    /// Pick the pairing for a scheme.
    ///
    /// This is a fixed dispatch over scheme ids: three named sets get their own
    /// pairing and everything else falls back to the default.
    pub fn for_scheme(scheme_id: &str) -> Self {
        const LUXURY: &[&str] =
            &["midnight_gold", "royal_navy", "burgundy_estate", "emerald_manor", "noir_luxe", "champagne"];
        const MODERN: &[&str] =
            &["slate_mint", "urban_concrete", "electric_coral", "scandi_frost", "graphite_citron"];
        const TRADITIONAL: &[&str] = &["heritage_green", "oxford_tan", "clay_cottage", "wedgwood"];

        if LUXURY.contains(&scheme_id) {
            Self::luxury()
        } else if MODERN.contains(&scheme_id) {
            Self::modern()
        } else if TRADITIONAL.contains(&scheme_id) {
            Self::traditional()
        } else {
            Self::default()
        }
    }
}

impl Default for FontPairing {
    fn default() -> Self {
        Self::new("DM Serif Display", "Inter", "Inter")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::hash("#1a2b3c", Color::new(0x1a, 0x2b, 0x3c))]
    #[case::bare("1a2b3c", Color::new(0x1a, 0x2b, 0x3c))]
    #[case::black("#000000", Color::new(0, 0, 0))]
    fn parse_color(#[case] input: &str, #[case] expected: Color) {
        let color: Color = input.parse().expect("parse failed");
        assert_eq!(color, expected);
    }

    #[rstest]
    #[case::short("#abc")]
    #[case::not_hex("#zzzzzz")]
    #[case::empty("")]
    #[case::word("tomato")]
    fn invalid_color(#[case] input: &str) {
        input.parse::<Color>().expect_err("parse succeeded");
    }

    #[test]
    fn color_display_round_trip() {
        let color = Color::new(0x11, 0x22, 0x33);
        assert_eq!(color.to_string(), "#112233");
        assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
    }

    #[rstest]
    #[case::luxury("midnight_gold", "Playfair Display")]
    #[case::modern("slate_mint", "Montserrat")]
    #[case::traditional("heritage_green", "Merriweather")]
    #[case::fallback("coastal_blue", "DM Serif Display")]
    #[case::unknown("does_not_exist", "DM Serif Display")]
    fn font_dispatch(#[case] scheme_id: &str, #[case] heading: &str) {
        let pairing = FontPairing::for_scheme(scheme_id);
        assert_eq!(pairing.heading, heading);
    }

    #[test]
    fn scheme_tokens() {
        let scheme: ColorScheme = serde_yaml::from_str(
            "name: Test\nprimary: \"#111111\"\nsecondary: \"#222222\"\naccent: \"#333333\"\nbackground: \"#ffffff\"\ntext: \"#000000\"\n",
        )
        .expect("invalid scheme");
        assert_eq!(scheme.token("accent"), Some(Color::new(0x33, 0x33, 0x33)));
        assert_eq!(scheme.token("bogus"), None);
    }

    #[test]
    fn scheme_requires_all_colors() {
        let result: Result<ColorScheme, _> = serde_yaml::from_str("name: Broken\nprimary: \"#111111\"\n");
        result.expect_err("deserialization succeeded");
    }
}

use crate::theme::{Color, ColorScheme, FontPairing, ParseColorError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub(crate) mod presets;
pub(crate) mod store;

pub use presets::{BrandPreset, PRESETS};
pub use store::BrandKitStore;

/// The brand's five color slots, same shape as a scheme but user owned.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct BrandColors {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub text: Color,
}

impl BrandColors {
    /// The brand colors as a scheme, for rendering with brand overrides.
    pub fn to_scheme(&self, name: &str) -> ColorScheme {
        ColorScheme {
            name: name.into(),
            primary: self.primary,
            secondary: self.secondary,
            accent: self.accent,
            background: self.background,
            text: self.text,
        }
    }
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            primary: Color::new(0x1d, 0x35, 0x57),
            secondary: Color::new(0x45, 0x7b, 0x9d),
            accent: Color::new(0xe6, 0x39, 0x46),
            background: Color::new(0xf1, 0xfa, 0xee),
            text: Color::new(0x1d, 0x35, 0x57),
        }
    }
}

/// A stored brand logo.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    pub id: String,
    pub name: String,
    pub url: String,
    /// The MIME type recorded by the uploader. Opaque to the kit; carried so
    /// a round trip through the store keeps it.
    #[serde(rename = "type", default)]
    pub kind: String,
    pub format: String,
    #[serde(rename = "isSVG")]
    pub is_svg: bool,
}

/// A user-saved swatch outside the five brand slots.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomColor {
    pub id: String,
    pub color: Color,
    pub name: String,
}

/// The user's singleton brand kit.
///
/// Persisted as one JSON blob; field names match the original persisted shape
/// so an existing store keeps loading.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandKit {
    pub name: String,
    pub colors: BrandColors,
    pub fonts: FontPairing,
    #[serde(default)]
    pub logos: Vec<Logo>,
    #[serde(default)]
    pub custom_colors: Vec<CustomColor>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for BrandKit {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            name: "My Brand".into(),
            colors: BrandColors::default(),
            fonts: FontPairing::default(),
            logos: Vec::new(),
            custom_colors: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl BrandKit {
    /// Set one field by dotted path (`name`, `colors.primary`, `fonts.body`).
    pub fn set(&mut self, path: &str, value: &str) -> Result<(), BrandKitError> {
        match path {
            "name" => self.name = value.into(),
            "colors.primary" => self.colors.primary = value.parse()?,
            "colors.secondary" => self.colors.secondary = value.parse()?,
            "colors.accent" => self.colors.accent = value.parse()?,
            "colors.background" => self.colors.background = value.parse()?,
            "colors.text" => self.colors.text = value.parse()?,
            "fonts.heading" => self.fonts.heading = value.into(),
            "fonts.subheading" => self.fonts.subheading = value.into(),
            "fonts.body" => self.fonts.body = value.into(),
            other => return Err(BrandKitError::UnknownPath(other.into())),
        }
        Ok(())
    }

    /// Replace colors and fonts from a preset, keeping logos, custom colors
    /// and the creation timestamp.
    pub fn apply_preset(&mut self, preset_id: &str) -> Result<(), BrandKitError> {
        let preset = presets::find(preset_id).ok_or_else(|| BrandKitError::UnknownPreset(preset_id.into()))?;
        self.colors = preset.colors.clone();
        self.fonts = preset.fonts.clone();
        Ok(())
    }
}

/// An error mutating or persisting the brand kit.
#[derive(thiserror::Error, Debug)]
pub enum BrandKitError {
    #[error("unknown brand kit field '{0}'")]
    UnknownPath(String),

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error(transparent)]
    Color(#[from] ParseColorError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("serializing brand kit: {0}")]
    Serialize(#[from] serde_json::Error),
}

use super::BrandColors;
use crate::theme::{Color, FontPairing};
use once_cell::sync::Lazy;

/// A named estate-agency style bundle: five colors plus a font trio.
#[derive(Clone, Debug)]
pub struct BrandPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub colors: BrandColors,
    pub fonts: FontPairing,
}

fn colors(primary: u32, secondary: u32, accent: u32, background: u32, text: u32) -> BrandColors {
    let rgb = |value: u32| Color::new((value >> 16) as u8, (value >> 8) as u8, value as u8);
    BrandColors {
        primary: rgb(primary),
        secondary: rgb(secondary),
        accent: rgb(accent),
        background: rgb(background),
        text: rgb(text),
    }
}

fn fonts(heading: &str, subheading: &str, body: &str) -> FontPairing {
    FontPairing { heading: heading.into(), subheading: subheading.into(), body: body.into() }
}

/// The built-in agency presets. Pure data; applying one is a brand kit
/// operation, not a preset behavior.
pub static PRESETS: Lazy<Vec<BrandPreset>> = Lazy::new(|| {
    vec![
        BrandPreset {
            id: "prestige",
            name: "Prestige",
            colors: colors(0x0c1821, 0x1b2a41, 0xbfa06c, 0xf8f6f1, 0x14100b),
            fonts: fonts("Playfair Display", "Cormorant Garamond", "Lato"),
        },
        BrandPreset {
            id: "heritage",
            name: "Heritage",
            colors: colors(0x23442e, 0x3f6848, 0xa8853f, 0xf7f5ee, 0x1c2b20),
            fonts: fonts("Merriweather", "Lora", "Source Sans Pro"),
        },
        BrandPreset {
            id: "metropolitan",
            name: "Metropolitan",
            colors: colors(0x202124, 0x3c4043, 0xea4335, 0xfafafa, 0x202124),
            fonts: fonts("Montserrat", "Raleway", "Open Sans"),
        },
        BrandPreset {
            id: "coastal",
            name: "Coastal",
            colors: colors(0x1b6f8f, 0x4aa3bd, 0xf0b64c, 0xf6fbfc, 0x123c4c),
            fonts: fonts("DM Serif Display", "Inter", "Inter"),
        },
        BrandPreset {
            id: "village",
            name: "Village",
            colors: colors(0x6a994e, 0xa7c957, 0xbc4749, 0xf9f9f2, 0x386641),
            fonts: fonts("Lora", "Karla", "Karla"),
        },
        BrandPreset {
            id: "townhouse",
            name: "Townhouse",
            colors: colors(0x372f2b, 0x6e5f52, 0xc6a15b, 0xfaf7f1, 0x29221e),
            fonts: fonts("Libre Baskerville", "Source Serif Pro", "Source Sans Pro"),
        },
        BrandPreset {
            id: "penthouse",
            name: "Penthouse",
            colors: colors(0x0f0f10, 0x2d2d30, 0xcdb380, 0xf3f1ec, 0x0f0f10),
            fonts: fonts("Cormorant Garamond", "Josefin Sans", "Josefin Sans"),
        },
        BrandPreset {
            id: "garden",
            name: "Garden",
            colors: colors(0x40531b, 0x708238, 0xd8973c, 0xfbfaf3, 0x2c3a12),
            fonts: fonts("Fraunces", "Work Sans", "Work Sans"),
        },
        BrandPreset {
            id: "classic",
            name: "Classic",
            colors: colors(0x1d3557, 0x457b9d, 0xe63946, 0xf1faee, 0x1d3557),
            fonts: fonts("Georgia", "Georgia", "Helvetica Neue"),
        },
        BrandPreset {
            id: "minimal",
            name: "Minimal",
            colors: colors(0x111111, 0x555555, 0x111111, 0xffffff, 0x111111),
            fonts: fonts("Helvetica Neue", "Helvetica Neue", "Helvetica Neue"),
        },
        BrandPreset {
            id: "bold",
            name: "Bold",
            colors: colors(0x560bad, 0x7209b7, 0xf72585, 0xfdfcff, 0x240046),
            fonts: fonts("Archivo Black", "Archivo", "Archivo"),
        },
    ]
});

/// Look up a preset by id.
pub fn find(id: &str) -> Option<&'static BrandPreset> {
    PRESETS.iter().find(|preset| preset.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eleven_presets_with_unique_ids() {
        assert_eq!(PRESETS.len(), 11);
        let mut ids: Vec<_> = PRESETS.iter().map(|preset| preset.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 11);
    }

    #[test]
    fn lookup() {
        assert!(find("classic").is_some());
        assert!(find("missing").is_none());
    }
}

use crate::theme::ColorScheme;
use base64::{engine::general_purpose::STANDARD, Engine as _};

const WIDTH: u32 = 120;
const HEIGHT: u32 = 84;

/// Build the preview swatch for a scheme.
///
/// The output depends only on the scheme's five colors and fixed proportions,
/// so the same scheme always produces byte-identical SVG. The layout does not
/// participate; thumbnails are palette previews, not page previews.
pub fn svg(scheme: &ColorScheme) -> String {
    // Dark headers get a light title bar and vice versa.
    let title_bar = if scheme.primary.luminance() < 0.5 { scheme.background } else { scheme.text };
    format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\">",
            "<rect width=\"{w}\" height=\"{h}\" fill=\"{background}\"/>",
            "<rect width=\"{w}\" height=\"28\" fill=\"{primary}\"/>",
            "<rect x=\"8\" y=\"10\" width=\"56\" height=\"8\" rx=\"2\" fill=\"{title_bar}\"/>",
            "<rect x=\"8\" y=\"38\" width=\"104\" height=\"6\" rx=\"2\" fill=\"{secondary}\"/>",
            "<rect x=\"8\" y=\"50\" width=\"88\" height=\"6\" rx=\"2\" fill=\"{secondary}\"/>",
            "<rect x=\"8\" y=\"62\" width=\"64\" height=\"6\" rx=\"2\" fill=\"{text}\"/>",
            "<circle cx=\"102\" cy=\"64\" r=\"10\" fill=\"{accent}\"/>",
            "</svg>"
        ),
        w = WIDTH,
        h = HEIGHT,
        background = scheme.background,
        primary = scheme.primary,
        secondary = scheme.secondary,
        text = scheme.text,
        accent = scheme.accent,
        title_bar = title_bar,
    )
}

/// The swatch as a `data:` URI, ready for an `<img src>` attribute.
pub fn data_uri(scheme: &ColorScheme) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg(scheme)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Color;

    fn scheme() -> ColorScheme {
        ColorScheme {
            name: "Test".into(),
            primary: Color::new(0x0d, 0x1b, 0x2a),
            secondary: Color::new(0x1b, 0x26, 0x3b),
            accent: Color::new(0xd4, 0xaf, 0x37),
            background: Color::new(0xfa, 0xf8, 0xf2),
            text: Color::new(0x1a, 0x1a, 0x1a),
        }
    }

    #[test]
    fn uses_all_five_colors() {
        let svg = svg(&scheme());
        for color in ["#0d1b2a", "#1b263b", "#d4af37", "#faf8f2", "#1a1a1a"] {
            assert!(svg.contains(color), "missing {color}");
        }
    }

    #[test]
    fn deterministic() {
        assert_eq!(svg(&scheme()), svg(&scheme()));
    }

    #[test]
    fn data_uri_shape() {
        let uri = data_uri(&scheme());
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
        let encoded = uri.trim_start_matches("data:image/svg+xml;base64,");
        let decoded = STANDARD.decode(encoded).expect("invalid base64");
        assert_eq!(String::from_utf8(decoded).expect("invalid utf8"), svg(&scheme()));
    }
}

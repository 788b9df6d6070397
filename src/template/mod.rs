use crate::{
    layout::{Layout, LayoutRegistry},
    theme::{ColorScheme, FontPairing, SchemeRegistry},
};
use itertools::iproduct;
use std::rc::Rc;

pub(crate) mod store;
pub mod thumbnail;

pub use store::{FilteredTemplates, TemplateFilter, TemplateStore, PREVIEW_LIMIT};

/// The scheme id assigned to templates generated from user-entered colors.
pub const USER_SCHEME_ID: &str = "custom";

const DEFAULT_FORMAT: &str = "a4_portrait";
const DEFAULT_DIMENSIONS: &str = "794x1123";
const DEFAULT_PROPERTY_TYPE: &str = "residential";

/// Map a layout's aspect-ratio hint to a page format and pixel dimensions.
/// Layouts without a hint are portrait A4.
fn page_format(ratio: Option<&str>) -> (&'static str, &'static str) {
    match ratio {
        Some("297:210") => ("a4_landscape", "1123x794"),
        Some("1:1") => ("square", "1000x1000"),
        _ => (DEFAULT_FORMAT, DEFAULT_DIMENSIONS),
    }
}

/// One generated pairing of a layout with a color scheme.
///
/// The id is derived from the pair, so regenerating the catalog never
/// reassigns ids. `colors` is an owned copy per template: mutating one
/// template's palette can never leak into another.
#[derive(Clone, Debug)]
pub struct Template {
    pub id: String,
    pub base_id: String,
    pub scheme_id: String,
    pub name: String,
    pub category: String,
    pub property_type: String,
    pub format: String,
    pub dimensions: String,
    pub layout: Rc<Layout>,
    pub colors: ColorScheme,
    pub fonts: FontPairing,
    pub thumbnail: String,
}

fn build(layout: &Rc<Layout>, scheme_id: &str, scheme: &ColorScheme) -> Template {
    let (format, dimensions) = page_format(layout.ratio.as_deref());
    Template {
        id: format!("tpl_{}_{}", layout.id, scheme_id),
        base_id: layout.id.clone(),
        scheme_id: scheme_id.to_string(),
        name: format!("{} · {}", layout.name, scheme.name),
        category: layout.page.to_string(),
        property_type: DEFAULT_PROPERTY_TYPE.into(),
        format: format.into(),
        dimensions: dimensions.into(),
        layout: layout.clone(),
        colors: scheme.clone(),
        fonts: FontPairing::for_scheme(scheme_id),
        thumbnail: thumbnail::svg(scheme),
    }
}

/// Cross every layout with every scheme, in catalog order.
///
/// An empty layout or scheme catalog yields an empty list, never an error;
/// the picker is expected to show an empty state for that.
pub fn generate_all(layouts: &LayoutRegistry, schemes: &SchemeRegistry) -> Vec<Template> {
    let schemes: Vec<_> = schemes.iter().collect();
    iproduct!(layouts.iter(), schemes.iter())
        .map(|(layout, (scheme_id, scheme))| build(layout, scheme_id, scheme))
        .collect()
}

/// Generate one template per layout, all sharing the caller's colors.
pub fn generate_with_user_colors(layouts: &LayoutRegistry, colors: &ColorScheme) -> Vec<Template> {
    layouts.iter().map(|layout| build(layout, USER_SCHEME_ID, colors)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Color;

    fn user_colors() -> ColorScheme {
        ColorScheme {
            name: "User".into(),
            primary: Color::new(0, 0, 0),
            secondary: Color::new(0x11, 0x11, 0x11),
            accent: Color::new(0x22, 0x22, 0x22),
            background: Color::new(0xff, 0xff, 0xff),
            text: Color::new(0x33, 0x33, 0x33),
        }
    }

    #[test]
    fn catalog_totals() {
        let layouts = LayoutRegistry::built_in();
        let schemes = SchemeRegistry::default();
        let templates = generate_all(&layouts, &schemes);
        assert_eq!(templates.len(), layouts.len() * schemes.len());
    }

    #[test]
    fn empty_catalog_generates_nothing() {
        let layouts = LayoutRegistry::default();
        let schemes = SchemeRegistry::default();
        assert!(generate_all(&layouts, &schemes).is_empty());
        assert!(generate_with_user_colors(&layouts, &user_colors()).is_empty());
    }

    #[test]
    fn ids_are_distinct_and_stable() {
        let layouts = LayoutRegistry::built_in();
        let schemes = SchemeRegistry::default();
        let first = generate_all(&layouts, &schemes);
        let second = generate_all(&layouts, &schemes);

        let mut ids: Vec<_> = first.iter().map(|t| t.id.clone()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total, "generated ids are not unique");

        // Regeneration must not reassign identities.
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn colors_are_isolated_between_templates() {
        let layouts = LayoutRegistry::built_in();
        let schemes = SchemeRegistry::default();
        let mut templates = generate_all(&layouts, &schemes);
        let reference = templates[1].colors.clone();
        templates[0].colors.primary = Color::new(0xde, 0xad, 0x00);
        assert_eq!(templates[1].colors, reference);
    }

    #[test]
    fn user_colors_cover_every_layout() {
        let layouts = LayoutRegistry::built_in();
        let templates = generate_with_user_colors(&layouts, &user_colors());
        assert_eq!(templates.len(), layouts.len());
        assert!(templates.iter().all(|t| t.scheme_id == USER_SCHEME_ID));
        assert!(templates.iter().all(|t| t.colors.primary == Color::new(0, 0, 0)));
    }

    #[test]
    fn format_follows_layout_ratio() {
        let layouts = LayoutRegistry::built_in();
        let schemes = SchemeRegistry::default();
        let templates = generate_all(&layouts, &schemes);
        let landscape = templates.iter().find(|t| t.base_id == "gallery_split_2").expect("layout missing");
        assert_eq!(landscape.format, "a4_landscape");
        assert_eq!(landscape.dimensions, "1123x794");
        let portrait = templates.iter().find(|t| t.base_id == "hero_magazine").expect("layout missing");
        assert_eq!(portrait.format, "a4_portrait");
        assert_eq!(portrait.dimensions, "794x1123");
    }

    #[test]
    fn fonts_follow_scheme_dispatch() {
        let layouts = LayoutRegistry::built_in();
        let schemes = SchemeRegistry::default();
        let templates = generate_all(&layouts, &schemes);
        let luxury = templates.iter().find(|t| t.scheme_id == "midnight_gold").expect("scheme missing");
        assert_eq!(luxury.fonts.heading, "Playfair Display");
        let fallback = templates.iter().find(|t| t.scheme_id == "coastal_blue").expect("scheme missing");
        assert_eq!(fallback.fonts, FontPairing::default());
    }
}

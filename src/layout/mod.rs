use serde::Deserialize;
use std::{collections::BTreeMap, fmt};
use strum::EnumIter;

pub(crate) mod registry;

pub use registry::{LayoutRegistry, LoadLayoutError};

/// The vocabulary of layout elements.
///
/// Anything outside the vocabulary deserializes as [ElementKind::Other] and is
/// rendered as an inert container, so one unknown element never aborts a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Text,
    Image,
    Container,
    List,
    Specs,
    Badge,
    Divider,
    Grid,
    Shape,
    Logo,
    Qrcode,
    Overlay,
    Card,
    Polaroid,
    FeatureCard,
    StatCircle,
    ContactRow,
    SpecsList,
    #[serde(other)]
    Other,
}

/// An entry in a `specs` or `list` element.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SpecItem {
    Plain(String),
    Labeled { value: String, label: String },
}

impl fmt::Display for SpecItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(text) => write!(f, "{text}"),
            Self::Labeled { value, label } => write!(f, "{value} {label}"),
        }
    }
}

/// One node in a layout tree.
///
/// `style` values are either literal CSS values or symbolic theme tokens
/// (`$primary`, `$secondary`, `$accent`, `$background`, `$text`) resolved
/// against the active color scheme at render time.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: ElementKind,

    /// Stable identifier, unique within one layout, used to bind image slots.
    #[serde(default)]
    pub id: Option<String>,

    /// Semantic tag (`price`, `address`, `hero`, ...) used to bind property data.
    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub style: BTreeMap<String, String>,

    /// Literal text for this element.
    #[serde(default)]
    pub content: Option<String>,

    /// Fallback text when no bound data exists.
    #[serde(default)]
    pub placeholder: Option<String>,

    /// Entries for `specs` and `list` elements.
    #[serde(default)]
    pub items: Vec<SpecItem>,

    #[serde(default)]
    pub children: Vec<Element>,
}

impl Element {
    /// Construct a bare element of the given kind.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            id: None,
            role: None,
            style: BTreeMap::new(),
            content: None,
            placeholder: None,
            items: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_role<S: Into<String>>(mut self, role: S) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_content<S: Into<String>>(mut self, content: S) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_placeholder<S: Into<String>>(mut self, placeholder: S) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_style<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.style.insert(key.into(), value.into());
        self
    }

    pub fn with_children<I: IntoIterator<Item = Element>>(mut self, children: I) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    pub fn with_items<I: IntoIterator<Item = SpecItem>>(mut self, items: I) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    /// Find a descendant (or this element) by id, depth first.
    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    fn collect_ids<'a>(&'a self, ids: &mut Vec<&'a str>) {
        if let Some(id) = self.id.as_deref() {
            ids.push(id);
        }
        for child in &self.children {
            child.collect_ids(ids);
        }
    }
}

/// The page role a layout fills, which doubles as its catalog table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Cover,
    Details,
    Gallery,
    Contact,
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cover => "cover",
            Self::Details => "details",
            Self::Gallery => "gallery",
            Self::Contact => "contact",
        };
        write!(f, "{name}")
    }
}

/// A named, static tree of elements describing one page's visual structure.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layout {
    /// The catalog key; comes from the file stem, not the file contents.
    #[serde(skip)]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    pub page: PageKind,

    /// Aspect ratio hint, e.g. `210:297`.
    #[serde(default)]
    pub ratio: Option<String>,

    /// Number of image slots for gallery layouts.
    #[serde(default)]
    pub image_slots: Option<u8>,

    pub elements: Vec<Element>,
}

impl Layout {
    /// Check that every element id in this layout's tree is unique.
    pub(crate) fn validate(&self) -> Result<(), String> {
        let mut ids = Vec::new();
        for element in &self.elements {
            element.collect_ids(&mut ids);
        }
        ids.sort_unstable();
        for window in ids.windows(2) {
            if window[0] == window[1] {
                return Err(window[0].to_string());
            }
        }
        Ok(())
    }

    /// Find an element in this layout by id.
    pub fn find(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find_map(|element| element.find(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse_layout(input: &str) -> Layout {
        serde_yaml::from_str(input).expect("invalid layout")
    }

    #[test]
    fn parse_tree() {
        let layout = parse_layout(
            r#"
name: Hero
page: cover
elements:
  - type: container
    style:
      padding: 40px
    children:
      - type: text
        role: address
        placeholder: 123 Example Street
      - type: image
        id: hero_shot
"#,
        );
        assert_eq!(layout.page, PageKind::Cover);
        assert_eq!(layout.elements.len(), 1);
        let container = &layout.elements[0];
        assert_eq!(container.kind, ElementKind::Container);
        assert_eq!(container.children.len(), 2);
        assert_eq!(container.children[0].role.as_deref(), Some("address"));
        assert!(layout.find("hero_shot").is_some());
        assert!(layout.find("missing").is_none());
    }

    #[rstest]
    #[case::known("feature_card", ElementKind::FeatureCard)]
    #[case::unknown("hologram", ElementKind::Other)]
    fn parse_kind(#[case] input: &str, #[case] expected: ElementKind) {
        let element: Element = serde_yaml::from_str(&format!("type: {input}")).expect("invalid element");
        assert_eq!(element.kind, expected);
    }

    #[test]
    fn spec_item_display() {
        let plain = SpecItem::Plain("4 Beds".into());
        let labeled = SpecItem::Labeled { value: "4".into(), label: "Beds".into() };
        assert_eq!(plain.to_string(), "4 Beds");
        assert_eq!(labeled.to_string(), "4 Beds");
    }

    #[test]
    fn duplicate_ids_rejected() {
        let layout = parse_layout(
            r#"
name: Broken
page: cover
elements:
  - type: image
    id: hero
  - type: container
    children:
      - type: image
        id: hero
"#,
        );
        assert_eq!(layout.validate(), Err("hero".to_string()));
    }
}

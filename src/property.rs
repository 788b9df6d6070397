use serde::Deserialize;
use std::{collections::BTreeMap, fmt};

/// A value bound to a property field.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    List(Vec<String>),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Number(number) => write!(f, "{number}"),
            Self::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// The property being marketed, as an open bag of fields plus image slots.
///
/// Fields are keyed by semantic role (`address`, `price`, `features`, ...);
/// images are keyed by slot id or role. Everything is optional: rendering
/// falls back to the layout's own content and placeholders for anything
/// missing here.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyData {
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,

    #[serde(default)]
    pub images: BTreeMap<String, String>,
}

impl PropertyData {
    pub fn with_field<K: Into<String>, V: Into<FieldValue>>(mut self, key: K, value: V) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn with_image<K: Into<String>, V: Into<String>>(mut self, slot: K, url: V) -> Self {
        self.images.insert(slot.into(), url.into());
        self
    }

    /// Resolve the text for an element.
    ///
    /// Resolution order is role, then id; the caller appends the layout's
    /// content/placeholder/empty fallbacks.
    pub fn resolve_text(&self, role: Option<&str>, id: Option<&str>) -> Option<String> {
        self.lookup(role).or_else(|| self.lookup(id)).map(|value| value.to_string())
    }

    /// Resolve the image URL for an element.
    ///
    /// Resolution order is role, then id, then the image slot map by id, then
    /// the image slot map by role.
    pub fn resolve_image(&self, role: Option<&str>, id: Option<&str>) -> Option<String> {
        if let Some(value) = self.lookup(role).or_else(|| self.lookup(id)) {
            return Some(value.to_string());
        }
        id.and_then(|id| self.images.get(id))
            .or_else(|| role.and_then(|role| self.images.get(role)))
            .cloned()
    }

    /// Resolve the entries for a list element.
    pub fn resolve_list(&self, role: Option<&str>) -> Option<Vec<String>> {
        match self.lookup(role)? {
            FieldValue::List(items) => Some(items.clone()),
            value => Some(vec![value.to_string()]),
        }
    }

    fn lookup(&self, key: Option<&str>) -> Option<&FieldValue> {
        key.and_then(|key| self.fields.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PropertyData {
        PropertyData::default()
            .with_field("price", "£450,000")
            .with_field("features", vec!["Garden".to_string(), "Garage".to_string()])
            .with_image("hero_shot", "https://example.com/hero.jpg")
    }

    #[test]
    fn resolve_by_role() {
        let data = sample();
        assert_eq!(data.resolve_text(Some("price"), None).as_deref(), Some("£450,000"));
        assert_eq!(data.resolve_text(Some("missing"), None), None);
    }

    #[test]
    fn role_wins_over_id() {
        let data = PropertyData::default().with_field("price", "by role").with_field("price_tag", "by id");
        assert_eq!(data.resolve_text(Some("price"), Some("price_tag")).as_deref(), Some("by role"));
        assert_eq!(data.resolve_text(Some("missing"), Some("price_tag")).as_deref(), Some("by id"));
    }

    #[test]
    fn image_falls_back_to_slot_map() {
        let data = sample();
        assert_eq!(
            data.resolve_image(Some("hero"), Some("hero_shot")).as_deref(),
            Some("https://example.com/hero.jpg")
        );
        assert_eq!(data.resolve_image(Some("hero"), None), None);
    }

    #[test]
    fn list_resolution() {
        let data = sample();
        let items = data.resolve_list(Some("features")).expect("no list");
        assert_eq!(items, vec!["Garden".to_string(), "Garage".to_string()]);
        // A scalar bound to a list role is coerced to a single entry.
        let items = data.resolve_list(Some("price")).expect("no list");
        assert_eq!(items, vec!["£450,000".to_string()]);
        assert_eq!(data.resolve_list(Some("missing")), None);
    }

    #[test]
    fn parses_from_json() {
        let data: PropertyData = serde_json::from_str(
            r#"{"fields": {"address": "1 High St", "bedrooms": 4, "features": ["Garden"]}, "images": {"hero": "x.jpg"}}"#,
        )
        .expect("invalid data");
        assert_eq!(data.resolve_text(Some("bedrooms"), None).as_deref(), Some("4"));
    }
}

use super::node::Node;
use crate::{
    layout::{Element, ElementKind, Layout},
    property::PropertyData,
    theme::{ColorScheme, FontPairing},
};

/// How strictly to treat missing imagery.
///
/// The live editor renders a drop zone the host UI can bind later; an export
/// must not ship a brochure with drop zones in it, so missing images become
/// errors there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    #[default]
    Editor,
    Export,
}

/// An error rendering a layout.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("no image bound to slot '{0}'")]
    MissingImage(String),
}

/// The tree renderer.
///
/// Rendering is a pure function of (element, data): the engine holds only the
/// active colors, fonts and mode, and never mutates the catalog. Every data
/// lookup degrades through the layout's own content and placeholder down to
/// the empty string, so editor-mode rendering is total.
pub struct Renderer<'a> {
    colors: &'a ColorScheme,
    fonts: &'a FontPairing,
    mode: RenderMode,
}

impl<'a> Renderer<'a> {
    pub fn new(colors: &'a ColorScheme, fonts: &'a FontPairing, mode: RenderMode) -> Self {
        Self { colors, fonts, mode }
    }

    /// Render a whole layout into a page node.
    pub fn render_layout(&self, layout: &Layout, data: &PropertyData) -> Result<Node, RenderError> {
        let mut page = Node::new("section")
            .attr("class", format!("page page-{}", layout.page))
            .attr("data-layout", layout.id.clone())
            .style("background-color", self.colors.background.to_string())
            .style("color", self.colors.text.to_string())
            .style("font-family", self.fonts.body.clone());
        for element in &layout.elements {
            page.push_child(self.render(element, data)?);
        }
        Ok(page)
    }

    /// Render one element and its children, depth first.
    pub fn render(&self, element: &Element, data: &PropertyData) -> Result<Node, RenderError> {
        let node = match element.kind {
            ElementKind::Text => self.render_text(element, data, "div"),
            ElementKind::Badge => self.render_text(element, data, "span"),
            ElementKind::ContactRow => self.render_text(element, data, "div"),
            ElementKind::StatCircle => self.render_text(element, data, "div"),
            ElementKind::Image => self.render_image(element, data, self.mode == RenderMode::Export)?,
            // A logo is brand chrome, not property imagery; its absence never
            // fails an export.
            ElementKind::Logo => self.render_image(element, data, false)?,
            ElementKind::List => self.render_list(element, data),
            ElementKind::Specs => self.render_specs(element),
            ElementKind::SpecsList => self.render_specs_list(element),
            ElementKind::Divider => Node::new("hr"),
            // Everything structural or unrecognized becomes an inert
            // container so sibling spacing never shifts.
            ElementKind::Container
            | ElementKind::Grid
            | ElementKind::Shape
            | ElementKind::Qrcode
            | ElementKind::Overlay
            | ElementKind::Card
            | ElementKind::Polaroid
            | ElementKind::FeatureCard
            | ElementKind::Other => self.render_container(element, data)?,
        };
        Ok(self.apply_style(node, element))
    }

    fn render_text(&self, element: &Element, data: &PropertyData, tag: &str) -> Node {
        let text = data
            .resolve_text(element.role.as_deref(), element.id.as_deref())
            .or_else(|| element.content.clone())
            .or_else(|| element.placeholder.clone())
            .unwrap_or_default();
        let mut node = Node::new(tag).attr("class", class_name(element.kind)).text(text);
        if let Some(role) = &element.role {
            node = node.attr("data-role", role.clone()).attr("contenteditable", "true");
        }
        node
    }

    fn render_image(&self, element: &Element, data: &PropertyData, strict: bool) -> Result<Node, RenderError> {
        let slot = element.id.as_deref().or(element.role.as_deref()).unwrap_or_default();
        let node = Node::new("div").attr("class", class_name(element.kind));
        match data.resolve_image(element.role.as_deref(), element.id.as_deref()) {
            Some(url) => {
                let image = Node::new("img")
                    .attr("src", url)
                    .style("width", "100%")
                    .style("height", "100%")
                    .style("object-fit", "cover");
                Ok(node.child(image))
            }
            None if strict => Err(RenderError::MissingImage(slot.into())),
            None => {
                let label = element
                    .placeholder
                    .clone()
                    .or_else(|| element.content.clone())
                    .unwrap_or_else(|| "Drop image here".into());
                Ok(node
                    .attr("data-slot", slot)
                    .attr("data-drop-zone", "true")
                    .child(Node::new("span").text(label)))
            }
        }
    }

    fn render_list(&self, element: &Element, data: &PropertyData) -> Node {
        let entries = data
            .resolve_list(element.role.as_deref())
            .unwrap_or_else(|| element.items.iter().map(ToString::to_string).collect());
        let mut node = Node::new("ul").attr("class", class_name(element.kind));
        if let Some(role) = &element.role {
            node = node.attr("data-role", role.clone());
        }
        if entries.is_empty() {
            if let Some(placeholder) = &element.placeholder {
                return node.child(Node::new("li").text(placeholder.clone()));
            }
        }
        node.children(entries.into_iter().map(|entry| Node::new("li").text(entry)))
    }

    fn render_specs(&self, element: &Element) -> Node {
        let chips = element
            .items
            .iter()
            .map(|item| Node::new("span").attr("class", "spec-chip").text(item.to_string()));
        Node::new("div").attr("class", class_name(element.kind)).children(chips)
    }

    fn render_specs_list(&self, element: &Element) -> Node {
        let rows = element.items.iter().map(|item| Node::new("li").text(item.to_string()));
        Node::new("ul").attr("class", class_name(element.kind)).children(rows)
    }

    fn render_container(&self, element: &Element, data: &PropertyData) -> Result<Node, RenderError> {
        let mut node = Node::new("div").attr("class", class_name(element.kind));
        if element.children.is_empty() {
            if let Some(text) = element.content.clone().or_else(|| element.placeholder.clone()) {
                return Ok(node.text(text));
            }
            return Ok(node);
        }
        for child in &element.children {
            node.push_child(self.render(child, data)?);
        }
        Ok(node)
    }

    fn apply_style(&self, mut node: Node, element: &Element) -> Node {
        for (key, value) in &element.style {
            node = node.style(key.clone(), self.resolve_style_value(value));
        }
        node
    }

    /// Resolve a symbolic style token against the active scheme and fonts.
    /// Unknown tokens and literal values pass through untouched.
    fn resolve_style_value(&self, value: &str) -> String {
        let Some(token) = value.strip_prefix('$') else {
            return value.into();
        };
        if let Some(color) = self.colors.token(token) {
            return color.to_string();
        }
        match token {
            "heading-font" => self.fonts.heading.clone(),
            "subheading-font" => self.fonts.subheading.clone(),
            "body-font" => self.fonts.body.clone(),
            _ => value.into(),
        }
    }
}

fn class_name(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Text => "text",
        ElementKind::Image => "image",
        ElementKind::Container => "container",
        ElementKind::List => "list",
        ElementKind::Specs => "specs",
        ElementKind::Badge => "badge",
        ElementKind::Divider => "divider",
        ElementKind::Grid => "grid",
        ElementKind::Shape => "shape",
        ElementKind::Logo => "logo",
        ElementKind::Qrcode => "qrcode",
        ElementKind::Overlay => "overlay",
        ElementKind::Card => "card",
        ElementKind::Polaroid => "polaroid",
        ElementKind::FeatureCard => "feature-card",
        ElementKind::StatCircle => "stat-circle",
        ElementKind::ContactRow => "contact-row",
        ElementKind::SpecsList => "specs-list",
        ElementKind::Other => "container",
    }
}

use crate::{
    property::PropertyData,
    render::{HtmlDocument, Node, RenderError, RenderMode, Renderer},
    theme::{ColorScheme, FontPairing},
};
use strum::IntoEnumIterator;

pub(crate) mod pages;

pub use pages::BrochurePage;

/// The embedded stylesheet every exported brochure carries. Curated markup,
/// emitted verbatim.
const STYLESHEET: &str = "\
* { box-sizing: border-box; margin: 0; }
.page { width: 794px; min-height: 1123px; margin: 0 auto 24px; padding: 48px; page-break-after: always; }
.page .image, .page .logo { background: #00000010; display: flex; align-items: center; justify-content: center; overflow: hidden; }
.specs { display: flex; gap: 12px; }
.spec-chip { padding: 4px 12px; border: 1px solid currentColor; border-radius: 999px; font-size: 13px; }
.grid { display: grid; }
ul.list, ul.specs-list { padding-left: 20px; line-height: 1.8; }
[data-drop-zone] { border: 2px dashed #999; color: #777; font-size: 13px; min-height: 120px; }
@media print { .page { margin: 0; } }";

/// An error assembling a brochure.
#[derive(thiserror::Error, Debug)]
pub enum BuildBrochureError {
    #[error("rendering {page} page: {source}")]
    Render { page: BrochurePage, source: RenderError },
}

/// A fully assembled multi-page brochure.
#[derive(Debug)]
pub struct Brochure {
    title: String,
    pages: Vec<Node>,
}

impl Brochure {
    pub fn pages(&self) -> &[Node] {
        &self.pages
    }

    /// The brochure as one standalone HTML document.
    pub fn to_html(&self) -> String {
        let mut document = HtmlDocument::new(&self.title).stylesheet(STYLESHEET);
        for page in &self.pages {
            document.push(page.clone());
        }
        document.render()
    }
}

/// Assembles the fixed page sequence for one property.
///
/// Every page goes through the shared tree renderer, so the brochure output
/// and the editor canvas are the same markup. In export mode, optional pages
/// with none of their image slots bound are dropped; a required page with
/// missing imagery is an error.
pub struct BrochureBuilder<'a> {
    colors: &'a ColorScheme,
    fonts: &'a FontPairing,
    mode: RenderMode,
}

impl<'a> BrochureBuilder<'a> {
    pub fn new(colors: &'a ColorScheme, fonts: &'a FontPairing, mode: RenderMode) -> Self {
        Self { colors, fonts, mode }
    }

    pub fn build(&self, data: &PropertyData) -> Result<Brochure, BuildBrochureError> {
        let renderer = Renderer::new(self.colors, self.fonts, self.mode);
        let mut pages = Vec::new();
        for page in BrochurePage::iter() {
            if self.mode == RenderMode::Export && !page.is_required() && !self.has_imagery(page, data) {
                continue;
            }
            pages.push(self.render_page(&renderer, page, data)?);
        }
        let title = data
            .resolve_text(Some("address"), None)
            .unwrap_or_else(|| "Property Brochure".into());
        Ok(Brochure { title, pages })
    }

    fn has_imagery(&self, page: BrochurePage, data: &PropertyData) -> bool {
        page.image_slots().iter().any(|slot| data.resolve_image(None, Some(slot)).is_some())
    }

    fn render_page(
        &self,
        renderer: &Renderer<'_>,
        page: BrochurePage,
        data: &PropertyData,
    ) -> Result<Node, BuildBrochureError> {
        let mut node = Node::new("section")
            .attr("class", format!("page page-{page}"))
            .style("background-color", self.colors.background.to_string())
            .style("color", self.colors.text.to_string())
            .style("font-family", self.fonts.body.clone());
        for element in page.elements() {
            let child = renderer
                .render(&element, data)
                .map_err(|source| BuildBrochureError::Render { page, source })?;
            node.push_child(child);
        }
        Ok(node)
    }
}

use super::node::Node;
use std::borrow::Cow;

/// Escape text for inclusion in HTML content or attribute values.
///
/// Every string sourced from property or user input goes through here before
/// it is concatenated into markup. This is a hard requirement of the
/// renderer, not an optimization.
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            other => output.push(other),
        }
    }
    Cow::Owned(output)
}

/// A standalone HTML document: doctype, head with an embedded stylesheet, and
/// a body of rendered nodes.
pub struct HtmlDocument {
    title: String,
    stylesheet: String,
    body: Vec<Node>,
}

impl HtmlDocument {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self { title: title.into(), stylesheet: String::new(), body: Vec::new() }
    }

    /// Set the embedded stylesheet. The stylesheet is curated markup and is
    /// emitted verbatim.
    pub fn stylesheet<S: Into<String>>(mut self, css: S) -> Self {
        self.stylesheet = css.into();
        self
    }

    pub fn push(&mut self, node: Node) {
        self.body.push(node);
    }

    pub fn render(&self) -> String {
        let mut output = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        output.push_str("<meta charset=\"utf-8\" />\n");
        output.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
        output.push_str(&format!("<title>{}</title>\n", escape(&self.title)));
        if !self.stylesheet.is_empty() {
            output.push_str(&format!("<style>\n{}\n</style>\n", self.stylesheet));
        }
        output.push_str("</head>\n<body>\n");
        for node in &self.body {
            output.push_str(&node.to_string());
            output.push('\n');
        }
        output.push_str("</body>\n</html>\n");
        output
    }
}

use super::html::escape;
use std::fmt;

/// A rendered document node.
///
/// This is the single output of the renderer: a live tree a host editor can
/// walk and mutate, whose HTML form is its `Display` serialization. Keeping
/// one tree behind both outputs means the editor canvas and the exported
/// document cannot drift apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    content: NodeContent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum NodeContent {
    Empty,
    /// Text, escaped on serialization.
    Text(String),
    /// A curated markup fragment, emitted verbatim. Never fed from property
    /// or user input.
    Raw(String),
    Children(Vec<Node>),
}

impl Node {
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Self { tag: tag.into(), attributes: Vec::new(), styles: Vec::new(), content: NodeContent::Empty }
    }

    pub fn attr<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn style<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.styles.push((key.into(), value.into()));
        self
    }

    pub fn text<S: Into<String>>(mut self, text: S) -> Self {
        self.content = NodeContent::Text(text.into());
        self
    }

    pub fn raw<S: Into<String>>(mut self, fragment: S) -> Self {
        self.content = NodeContent::Raw(fragment.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.push_child(child);
        self
    }

    pub fn children<I: IntoIterator<Item = Node>>(mut self, children: I) -> Self {
        for child in children {
            self.push_child(child);
        }
        self
    }

    pub fn push_child(&mut self, child: Node) {
        match &mut self.content {
            NodeContent::Children(children) => children.push(child),
            _ => self.content = NodeContent::Children(vec![child]),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn inner_text(&self) -> Option<&str> {
        match &self.content {
            NodeContent::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn child_nodes(&self) -> &[Node] {
        match &self.content {
            NodeContent::Children(children) => children,
            _ => &[],
        }
    }

    fn is_void(&self) -> bool {
        matches!(self.tag.as_str(), "img" | "br" | "hr" | "meta" | "link")
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (key, value) in &self.attributes {
            write!(f, " {key}=\"{}\"", escape(value))?;
        }
        if !self.styles.is_empty() {
            let css: Vec<_> = self.styles.iter().map(|(key, value)| format!("{key}: {value}")).collect();
            write!(f, " style=\"{}\"", escape(&css.join("; ")))?;
        }
        if self.is_void() {
            return write!(f, " />");
        }
        write!(f, ">")?;
        match &self.content {
            NodeContent::Empty => (),
            NodeContent::Text(text) => write!(f, "{}", escape(text))?,
            NodeContent::Raw(fragment) => write!(f, "{fragment}")?,
            NodeContent::Children(children) => {
                for child in children {
                    write!(f, "{child}")?;
                }
            }
        }
        write!(f, "</{}>", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_tree() {
        let node = Node::new("div")
            .attr("class", "card")
            .style("color", "#112233")
            .child(Node::new("span").text("hello"));
        assert_eq!(node.to_string(), "<div class=\"card\" style=\"color: #112233\"><span>hello</span></div>");
    }

    #[test]
    fn text_is_escaped() {
        let node = Node::new("div").text("</div><script>alert(1)</script>");
        let html = node.to_string();
        assert!(html.contains("&lt;/div&gt;&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn attributes_are_escaped() {
        let node = Node::new("div").attr("data-slot", "\"><script>");
        let html = node.to_string();
        assert!(html.contains("data-slot=\"&quot;&gt;&lt;script&gt;\""));
    }

    #[test]
    fn raw_fragment_is_verbatim() {
        let node = Node::new("div").raw("<svg viewBox=\"0 0 1 1\"></svg>");
        assert_eq!(node.to_string(), "<div><svg viewBox=\"0 0 1 1\"></svg></div>");
    }

    #[test]
    fn void_elements_self_close() {
        let node = Node::new("img").attr("src", "x.jpg");
        assert_eq!(node.to_string(), "<img src=\"x.jpg\" />");
    }
}

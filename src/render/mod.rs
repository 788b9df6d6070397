pub(crate) mod engine;
pub(crate) mod html;
pub(crate) mod node;

pub use engine::{RenderError, RenderMode, Renderer};
pub use html::{escape, HtmlDocument};
pub use node::Node;

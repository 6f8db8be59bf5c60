//! The element tree and its text rendering.

use std::fmt;

use serde::Serialize;

use crate::{Attrs, Scalar};

/// Spaces prepended per nesting level in rendered output.
const INDENT: &str = "  ";

/// Content of an [`Element`].
///
/// An element with no content at all is self-closing; that state is
/// `None` on [`Element::content`], not a variant here. The three states
/// are mutually exclusive and never merged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Content {
    /// A single scalar, rendered as one indented text line.
    Text(Scalar),
    /// Child elements in creation order.
    Children(Vec<Element>),
}

/// One node of the tree: a tag name, optional attributes, and content.
///
/// Elements are plain values with no parent pointers; structure lives
/// entirely in the [`Content::Children`] sequences. The `sprig` builder
/// produces them from nested blocks, but they can also be assembled
/// directly:
///
/// ```
/// use sprig_tree::{Attrs, Element};
///
/// let clearance = Element::new("clearance")
///     .with_attrs(Attrs::new().set("level", "classified"));
/// assert_eq!(clearance.render(), "<clearance level=\"classified\" />");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    attrs: Option<Attrs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<Content>,
}

impl Element {
    /// Create a self-closing element with no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: None,
            content: None,
        }
    }

    /// Attach attributes. An empty map counts as no attributes.
    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = if attrs.is_empty() { None } else { Some(attrs) };
        self
    }

    /// Set scalar text content, replacing any previous content.
    pub fn with_text(mut self, text: impl Into<Scalar>) -> Self {
        self.content = Some(Content::Text(text.into()));
        self
    }

    /// Set child elements, replacing any previous content.
    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.content = Some(Content::Children(children));
        self
    }

    /// The tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The attributes, if any are set.
    pub fn attrs(&self) -> Option<&Attrs> {
        self.attrs.as_ref()
    }

    /// The content. `None` means the element is self-closing.
    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    /// Direct children, when content is a child sequence.
    pub fn children(&self) -> Option<&[Element]> {
        match &self.content {
            Some(Content::Children(children)) => Some(children),
            _ => None,
        }
    }

    /// Returns true if the element renders as a single self-closing tag.
    pub fn is_self_closing(&self) -> bool {
        self.content.is_none()
    }

    /// Render the element and everything below it, starting at depth 0.
    ///
    /// Lines are newline-joined with no trailing newline. Each nesting
    /// level indents by two spaces.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprig_tree::Element;
    ///
    /// let name = Element::new("name").with_text("X");
    /// assert_eq!(name.render(), "<name>\n  X\n</name>");
    /// ```
    pub fn render(&self) -> String {
        self.render_at(0)
    }

    /// Render with the outermost tag indented `depth` levels.
    pub fn render_at(&self, depth: usize) -> String {
        let mut output = String::new();
        self.render_into(&mut output, depth);
        output
    }

    fn render_into(&self, output: &mut String, depth: usize) {
        write_indent(output, depth);
        output.push('<');
        output.push_str(&self.tag);
        if let Some(attrs) = &self.attrs {
            for (key, value) in attrs.iter() {
                output.push_str(&format!(" {key}=\"{value}\""));
            }
        }
        match &self.content {
            None => output.push_str(" />"),
            Some(Content::Text(text)) => {
                output.push_str(">\n");
                write_indent(output, depth + 1);
                output.push_str(&format!("{text}\n"));
                self.write_closing_tag(output, depth);
            }
            Some(Content::Children(children)) => {
                output.push_str(">\n");
                for child in children {
                    child.render_into(output, depth + 1);
                    output.push('\n');
                }
                self.write_closing_tag(output, depth);
            }
        }
    }

    fn write_closing_tag(&self, output: &mut String, depth: usize) {
        write_indent(output, depth);
        output.push_str(&format!("</{}>", self.tag));
    }
}

fn write_indent(output: &mut String, depth: usize) {
    for _ in 0..depth {
        output.push_str(INDENT);
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

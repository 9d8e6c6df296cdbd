//! Render tree produced by the view layer
//!
//! The tree is plain data: elements with a tag, an optional id and class,
//! attributes and children; text leaves; and searchable fields, which carry
//! their own click behavior. A layout layer consumes it (see
//! [`to_html`](super::to_html) and [`to_text`](super::to_text)).

use std::fmt;

use super::searchable::SearchableField;

/// Element kinds used by the feature view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Main,
    Div,
    Header,
    H3,
    H4,
    Section,
    Span,
    Img,
}

impl Tag {
    /// Markup name of the tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Div => "div",
            Self::Header => "header",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::Section => "section",
            Self::Span => "span",
            Self::Img => "img",
        }
    }

    /// Whether the tag never has children
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Img)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named, nested display region
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: Tag,
    pub id: Option<&'static str>,
    pub class: Option<&'static str>,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    #[must_use]
    pub const fn new(tag: Tag) -> Self {
        Self {
            tag,
            id: None,
            class: None,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub const fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Value of a named attribute
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the element is identified by `name` (its id or its class)
    #[must_use]
    pub fn is_region(&self, name: &str) -> bool {
        self.id == Some(name) || self.class == Some(name)
    }
}

/// A node of the render tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Searchable(SearchableField),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<SearchableField> for Node {
    fn from(field: SearchableField) -> Self {
        Self::Searchable(field)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl Node {
    /// The element behind this node, if any
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Direct children; leaves have none
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Element(element) => &element.children,
            Self::Text(_) | Self::Searchable(_) => &[],
        }
    }

    /// Depth-first search for the first element named `name`
    #[must_use]
    pub fn region(&self, name: &str) -> Option<&Element> {
        let element = self.as_element()?;
        if element.is_region(name) {
            return Some(element);
        }
        element.children.iter().find_map(|child| child.region(name))
    }

    /// Every searchable field, in document order
    #[must_use]
    pub fn searchables(&self) -> Vec<&SearchableField> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if let Self::Searchable(field) = node {
                found.push(field);
            }
        });
        found
    }

    /// Concatenated visible text; a searchable contributes its term
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.walk(&mut |node| match node {
            Self::Text(text) => out.push_str(text),
            Self::Searchable(field) => out.push_str(field.term()),
            Self::Element(_) => {}
        });
        out
    }

    /// Pre-order traversal
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

//! Markup rendering of the render tree

use super::node::{Element, Node};

/// Render a tree as HTML markup
///
/// Searchable fields become `<span class="content"><a href="#">TERM</a></span>`.
/// Text and attribute values are escaped.
#[must_use]
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => out.push_str(&escape(text)),
        Node::Searchable(field) => {
            out.push_str(&format!(
                r##"<span class="content"><a href="#">{}</a></span>"##,
                escape(field.term())
            ));
        }
        Node::Element(element) => write_element(out, element),
    }
}

fn write_element(out: &mut String, element: &Element) {
    let tag = element.tag.as_str();
    out.push('<');
    out.push_str(tag);
    if let Some(id) = element.id {
        out.push_str(&format!(r#" id="{}""#, escape(id)));
    }
    if let Some(class) = element.class {
        out.push_str(&format!(r#" class="{}""#, escape(class)));
    }
    for (name, value) in &element.attrs {
        out.push_str(&format!(r#" {name}="{}""#, escape(value)));
    }

    if element.tag.is_void() {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for child in &element.children {
        write_node(out, child);
    }
    out.push_str(&format!("</{tag}>"));
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

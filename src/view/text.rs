//! Plain-text outline of the render tree for terminals

use colored::Colorize;

use super::feature::{FACTS_REGION, PHOTOS_REGION};
use super::node::{Element, Node, Tag};

/// Render a tree as an indented text outline
///
/// Searchable fields are shown as `[TERM]`. With `color` enabled the title
/// is bold, the date dimmed and searchable labels highlighted.
#[must_use]
pub fn to_text(node: &Node, color: bool) -> String {
    let mut lines = Vec::new();
    match node.as_element() {
        Some(root) if root.children.is_empty() => lines.push("(no record featured)".to_string()),
        _ => collect_lines(node, color, &mut lines),
    }
    lines.join("\n")
}

fn collect_lines(node: &Node, color: bool, lines: &mut Vec<String>) {
    let Some(element) = node.as_element() else {
        return;
    };

    match element.tag {
        Tag::H3 => {
            let title = inline(node, color);
            lines.push(if color { title.bold().to_string() } else { title });
        }
        Tag::H4 => {
            let dated = inline(node, color);
            lines.push(if color { dated.dimmed().to_string() } else { dated });
        }
        Tag::Section if element.is_region(FACTS_REGION) => {
            for child in &element.children {
                let line = inline(child, color);
                if !line.trim().is_empty() {
                    lines.push(format!("  {line}"));
                }
            }
        }
        Tag::Section if element.is_region(PHOTOS_REGION) => {
            for entry in &element.children {
                lines.push(format!("  photo: {}", photo(entry)));
            }
        }
        _ => {
            for child in &element.children {
                collect_lines(child, color, lines);
            }
        }
    }
}

fn inline(node: &Node, color: bool) -> String {
    match node {
        Node::Text(text) => text.clone(),
        Node::Searchable(field) => {
            let label = format!("[{}]", field.term());
            if color {
                label.cyan().underline().to_string()
            } else {
                label
            }
        }
        Node::Element(element) => element
            .children
            .iter()
            .map(|child| inline(child, color))
            .collect(),
    }
}

fn photo(entry: &Node) -> String {
    entry
        .children()
        .iter()
        .filter_map(Node::as_element)
        .find(|e| e.tag == Tag::Img)
        .and_then(|img: &Element| img.attr("src"))
        .unwrap_or("(none)")
        .to_string()
}

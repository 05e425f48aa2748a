// sitepatch-core/src/domain/markup/formatter.rs
//
// Canonical serialization: one node per line, two spaces per depth level,
// attributes sorted by name, text trimmed. Script/style bodies and
// preformatted blocks keep their inner layout.

use super::node::{Element, Node, is_preformatted, is_raw_text};
use super::parser::parse;

const INDENT: &str = "  ";

/// Parse and re-serialize `input` in canonical form.
///
/// Idempotent: `canonicalize(&canonicalize(x)) == canonicalize(x)`.
pub fn canonicalize(input: &str) -> String {
    serialize(&parse(input))
}

pub fn serialize(nodes: &[Node]) -> String {
    let mut out = String::with_capacity(nodes.len() * 64);
    for node in nodes {
        write_node(node, 0, &mut out);
    }
    out
}

fn write_node(node: &Node, depth: usize, out: &mut String) {
    match node {
        Node::Doctype(body) => write_line(out, depth, &format!("<!{}>", body.trim())),
        Node::Comment(body) => write_line(out, depth, &format!("<!--{}-->", body)),
        Node::Text(text) => {
            let text = text.trim();
            if !text.is_empty() {
                write_line(out, depth, text);
            }
        }
        Node::Element(element) => write_element(element, depth, out),
    }
}

fn write_element(element: &Element, depth: usize, out: &mut String) {
    let open = open_tag(element);
    if element.is_void() {
        write_line(out, depth, &open);
        return;
    }

    if is_preformatted(&element.name) {
        let mut inline = open;
        for child in &element.children {
            write_inline(child, &mut inline);
        }
        inline.push_str(&close_tag(element));
        write_line(out, depth, &inline);
        return;
    }

    write_line(out, depth, &open);
    if is_raw_text(&element.name) {
        for child in &element.children {
            if let Node::Text(body) = child {
                let body = body.trim();
                if !body.is_empty() {
                    write_line(out, depth + 1, body);
                }
            }
        }
    } else {
        for child in &element.children {
            write_node(child, depth + 1, out);
        }
    }
    write_line(out, depth, &close_tag(element));
}

fn write_inline(node: &Node, out: &mut String) {
    match node {
        Node::Doctype(body) => {
            out.push_str("<!");
            out.push_str(body);
            out.push('>');
        }
        Node::Comment(body) => {
            out.push_str("<!--");
            out.push_str(body);
            out.push_str("-->");
        }
        Node::Text(text) => out.push_str(text),
        Node::Element(element) => {
            out.push_str(&open_tag(element));
            if !element.is_void() {
                for child in &element.children {
                    write_inline(child, out);
                }
                out.push_str(&close_tag(element));
            }
        }
    }
}

fn open_tag(element: &Element) -> String {
    let mut attrs: Vec<&(String, String)> = element.attrs.iter().collect();
    attrs.sort_by(|a, b| a.0.cmp(&b.0));

    let mut tag = format!("<{}", element.name);
    for (name, value) in attrs {
        tag.push(' ');
        tag.push_str(name);
        tag.push_str("=\"");
        tag.push_str(&value.replace('"', "&quot;"));
        tag.push('"');
    }
    tag.push('>');
    tag
}

fn close_tag(element: &Element) -> String {
    format!("</{}>", element.name)
}

fn write_line(out: &mut String, depth: usize, content: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(content);
    out.push('\n');
}

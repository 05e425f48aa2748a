// sitepatch-core/src/domain/markup/parser.rs

use super::node::{Element, Node, is_raw_text, is_void};

/// Parse an HTML document (or fragment) into a forest of nodes.
///
/// The parser never fails: anything that does not look like markup is kept
/// as text, stray end tags are ignored and open elements are closed at the
/// end of the input. Tag and attribute names are lowercased; attribute values
/// are kept verbatim (no entity decoding), as is text.
pub fn parse(input: &str) -> Vec<Node> {
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut builder = TreeBuilder::default();
    let mut pos = 0;
    let mut text_start = 0;

    while pos < len {
        if bytes[pos] != b'<' {
            pos += 1;
            continue;
        }
        let rest = &input[pos..];
        let next = bytes.get(pos + 1).copied();

        // <!-- comment -->
        if rest.starts_with("<!--") {
            builder.text(&input[text_start..pos]);
            let body_start = pos + 4;
            pos = match input[body_start..].find("-->") {
                Some(offset) => {
                    builder.push(Node::Comment(
                        input[body_start..body_start + offset].to_string(),
                    ));
                    body_start + offset + 3
                }
                None => {
                    builder.push(Node::Comment(input[body_start..].to_string()));
                    len
                }
            };
            text_start = pos;
            continue;
        }

        // <!DOCTYPE ...>
        if next == Some(b'!') {
            builder.text(&input[text_start..pos]);
            let body_start = pos + 2;
            pos = match input[body_start..].find('>') {
                Some(offset) => {
                    builder.push(Node::Doctype(
                        input[body_start..body_start + offset].trim().to_string(),
                    ));
                    body_start + offset + 1
                }
                None => len,
            };
            text_start = pos;
            continue;
        }

        // </name>
        if next == Some(b'/') && bytes.get(pos + 2).is_some_and(u8::is_ascii_alphabetic) {
            let Some(offset) = input[pos..].find('>') else {
                builder.text(&truncated_tail(input, text_start, pos));
                text_start = len;
                break;
            };
            builder.text(&input[text_start..pos]);
            let inner = &input[pos + 2..pos + offset];
            let name = inner
                .split(|c: char| c.is_ascii_whitespace() || c == '/')
                .next()
                .unwrap_or_default()
                .to_ascii_lowercase();
            builder.close(&name);
            pos += offset + 1;
            text_start = pos;
            continue;
        }

        // <name attr="value">
        if next.is_some_and(|b| b.is_ascii_alphabetic()) {
            let Some(tag) = parse_start_tag(input, pos) else {
                builder.text(&truncated_tail(input, text_start, pos));
                text_start = len;
                break;
            };
            builder.text(&input[text_start..pos]);
            pos = tag.end;

            let raw = is_raw_text(&tag.element.name) && !tag.self_closing;
            let name = tag.element.name.clone();
            builder.open(tag.element, tag.self_closing);

            if raw {
                let closing = format!("</{}", name);
                let content_end = find_ignore_ascii_case(&bytes[pos..], closing.as_bytes())
                    .map_or(len, |offset| pos + offset);
                builder.text(&input[pos..content_end]);
                pos = content_end;
            }
            text_start = pos;
            continue;
        }

        // A lone '<' is plain text.
        pos += 1;
    }

    builder.text(&input[text_start..]);
    builder.finish()
}

/// Text from `text_start` to the end of input, where a tag cut off at `tag_start`
/// has its `<` escaped so that re-parsing the output cannot turn it into a tag.
fn truncated_tail(input: &str, text_start: usize, tag_start: usize) -> String {
    format!("{}&lt;{}", &input[text_start..tag_start], &input[tag_start + 1..])
}

fn find_ignore_ascii_case(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}

struct StartTag {
    element: Element,
    self_closing: bool,
    end: usize,
}

fn parse_start_tag(input: &str, start: usize) -> Option<StartTag> {
    let bytes = input.as_bytes();
    let len = bytes.len();
    let is_ws = |b: u8| b.is_ascii_whitespace();

    let mut i = start + 1;
    let name_start = i;
    while i < len && !is_ws(bytes[i]) && bytes[i] != b'>' && bytes[i] != b'/' {
        i += 1;
    }
    let mut element = Element::new(input[name_start..i].to_ascii_lowercase());
    let mut self_closing = false;

    loop {
        while i < len && is_ws(bytes[i]) {
            i += 1;
        }
        if i >= len {
            return None;
        }
        match bytes[i] {
            b'>' => {
                return Some(StartTag {
                    element,
                    self_closing,
                    end: i + 1,
                });
            }
            b'/' => {
                i += 1;
                self_closing = bytes.get(i) == Some(&b'>');
            }
            _ => {
                let attr_start = i;
                while i < len
                    && !is_ws(bytes[i])
                    && bytes[i] != b'>'
                    && bytes[i] != b'='
                    && bytes[i] != b'/'
                {
                    i += 1;
                }
                let attr_name = input[attr_start..i].to_ascii_lowercase();

                while i < len && is_ws(bytes[i]) {
                    i += 1;
                }
                let mut value = String::new();
                if bytes.get(i) == Some(&b'=') {
                    i += 1;
                    while i < len && is_ws(bytes[i]) {
                        i += 1;
                    }
                    match bytes.get(i) {
                        Some(&quote) if quote == b'"' || quote == b'\'' => {
                            let offset = input[i + 1..].find(quote as char)?;
                            value = input[i + 1..i + 1 + offset].to_string();
                            i += offset + 2;
                        }
                        _ => {
                            let value_start = i;
                            while i < len && !is_ws(bytes[i]) && bytes[i] != b'>' {
                                i += 1;
                            }
                            value = input[value_start..i].to_string();
                        }
                    }
                }

                // First occurrence wins, as in browsers.
                if !attr_name.is_empty() && element.attr(&attr_name).is_none() {
                    element.attrs.push((attr_name, value));
                }
            }
        }
    }
}

#[derive(Default)]
struct TreeBuilder {
    root: Vec<Node>,
    stack: Vec<Element>,
}

impl TreeBuilder {
    fn push(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.root.push(node),
        }
    }

    fn text(&mut self, text: &str) {
        if !text.is_empty() {
            self.push(Node::Text(text.to_string()));
        }
    }

    fn open(&mut self, element: Element, self_closing: bool) {
        if self_closing || element.is_void() {
            self.push(Node::Element(element));
        } else {
            self.stack.push(element);
        }
    }

    fn close(&mut self, name: &str) {
        if is_void(name) {
            return;
        }
        let Some(idx) = self.stack.iter().rposition(|e| e.name == name) else {
            return;
        };
        while self.stack.len() > idx {
            if let Some(element) = self.stack.pop() {
                self.push(Node::Element(element));
            }
        }
    }

    fn finish(mut self) -> Vec<Node> {
        while let Some(element) = self.stack.pop() {
            self.push(Node::Element(element));
        }
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only_element(nodes: &[Node]) -> &Element {
        match nodes {
            [Node::Element(e)] => e,
            other => panic!("expected a single element, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_nested_elements_and_attributes() {
        let nodes = parse(r#"<DIV Class="a b" id='x' hidden><span>hi</span></div>"#);
        let div = only_element(&nodes);

        assert_eq!(div.name, "div");
        assert_eq!(div.attr("class"), Some("a b"));
        assert_eq!(div.attr("id"), Some("x"));
        assert_eq!(div.attr("hidden"), Some(""));
        assert!(div.has_class("b"));
        assert_eq!(div.text_content(), "hi");
    }

    #[test]
    fn test_parse_keeps_script_content_verbatim() {
        let nodes = parse("<script>if (a < b && c > d) { x = '</div>'; }</script>");
        let script = only_element(&nodes);

        assert_eq!(
            script.children,
            vec![Node::Text("if (a < b && c > d) { x = '</div>'; }".to_string())]
        );
    }

    #[test]
    fn test_parse_ignores_stray_end_tags_and_closes_open_ones() {
        let nodes = parse("<div><p>one</span></div></div><ul><li>two");

        assert_eq!(nodes.len(), 2);
        let Node::Element(ul) = &nodes[1] else {
            panic!("expected <ul>");
        };
        assert_eq!(ul.name, "ul");
        assert_eq!(ul.child_elements().count(), 1);
    }

    #[test]
    fn test_parse_void_and_self_closing() {
        let nodes = parse(r#"<p>a<br>b<img src="x.png"/><i/>c</p>"#);
        let p = only_element(&nodes);

        let names: Vec<&str> = p.child_elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["br", "img", "i"]);
        assert_eq!(p.text_content(), "a b c");
    }

    #[test]
    fn test_parse_truncated_tag_at_end_is_escaped_text() {
        let nodes = parse("<div>x<span class=\"a");
        let div = only_element(&nodes);

        assert_eq!(
            div.children,
            vec![Node::Text("x&lt;span class=\"a".to_string())]
        );
    }

    #[test]
    fn test_parse_doctype_comment_and_lone_angle_bracket() {
        let nodes = parse("<!DOCTYPE html><!-- note --><p>1 < 2</p>");

        assert_eq!(nodes[0], Node::Doctype("DOCTYPE html".to_string()));
        assert_eq!(nodes[1], Node::Comment(" note ".to_string()));
        let Node::Element(p) = &nodes[2] else {
            panic!("expected <p>");
        };
        assert_eq!(p.text_content(), "1 < 2");
    }
}

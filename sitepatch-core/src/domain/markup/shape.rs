// sitepatch-core/src/domain/markup/shape.rs

use super::node::{Element, Node};

/// Tree-shape predicate: "a `<li>` with this class containing an `<a>` with
/// these attributes". Attribute order and incidental whitespace never matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementShape {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<ElementShape>,
}

impl ElementShape {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Whitespace-collapsed text content must equal `text`.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Some direct child element must match `child`.
    pub fn with_child(mut self, child: ElementShape) -> Self {
        self.children.push(child);
        self
    }

    pub fn matches(&self, element: &Element) -> bool {
        element.name == self.tag
            && self.classes.iter().all(|c| element.has_class(c))
            && self
                .attrs
                .iter()
                .all(|(name, value)| element.attr(name) == Some(value.as_str()))
            && self
                .text
                .as_ref()
                .is_none_or(|text| element.text_content() == *text)
            && self
                .children
                .iter()
                .all(|shape| element.child_elements().any(|c| shape.matches(c)))
    }

    /// Number of matching elements anywhere in the forest.
    pub fn count_in(&self, nodes: &[Node]) -> usize {
        nodes
            .iter()
            .map(|node| match node {
                Node::Element(e) => usize::from(self.matches(e)) + self.count_in(&e.children),
                _ => 0,
            })
            .sum()
    }

    /// Replace every matching element with a copy of `replacement`.
    /// Replaced subtrees are not searched again. Returns the number of replacements.
    pub fn replace_in(&self, nodes: &mut Vec<Node>, replacement: &[Node]) -> usize {
        let mut replaced = 0;
        let mut i = 0;
        while i < nodes.len() {
            let is_match = matches!(&nodes[i], Node::Element(e) if self.matches(e));
            if is_match {
                nodes.splice(i..=i, replacement.iter().cloned());
                i += replacement.len();
                replaced += 1;
                continue;
            }
            if let Node::Element(e) = &mut nodes[i] {
                replaced += self.replace_in(&mut e.children, replacement);
            }
            i += 1;
        }
        replaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::markup::parse;

    fn tab_shape() -> ElementShape {
        ElementShape::new("li").with_class("nav-item").with_child(
            ElementShape::new("a")
                .with_attr("id", "Expectation-Suites-tab")
                .with_text("Expectation Suites"),
        )
    }

    #[test]
    fn test_shape_ignores_attribute_order_and_whitespace() {
        let a = parse(r#"<li class="nav-item"><a id="Expectation-Suites-tab" role="tab">Expectation Suites</a></li>"#);
        let b = parse("<li class=\"first nav-item\">\n  <a role=\"tab\"\n id=\"Expectation-Suites-tab\">\n   Expectation\n   Suites\n  </a>\n</li>");

        assert_eq!(tab_shape().count_in(&a), 1);
        assert_eq!(tab_shape().count_in(&b), 1);
    }

    #[test]
    fn test_shape_rejects_wrong_attribute_value() {
        let nodes = parse(r#"<li class="nav-item"><a id="Overview-tab">Expectation Suites</a></li>"#);
        assert_eq!(tab_shape().count_in(&nodes), 0);
    }

    #[test]
    fn test_replace_in_nested_tree() {
        let mut nodes = parse(
            r#"<ul><li class="nav-item"><a id="Expectation-Suites-tab">Expectation Suites</a></li></ul>"#,
        );
        let replacement = parse("<li>one</li><li>two</li>");

        let replaced = tab_shape().replace_in(&mut nodes, &replacement);

        assert_eq!(replaced, 1);
        let Node::Element(ul) = &nodes[0] else {
            panic!("expected <ul>");
        };
        let items: Vec<String> = ul.child_elements().map(|e| e.text_content()).collect();
        assert_eq!(items, vec!["one", "two"]);
    }
}

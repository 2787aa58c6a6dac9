//! Owned DOM tree over the scraper crate
//!
//! Parsing itself is delegated to scraper (html5ever); this module converts
//! its node graph into a small owned tree. Children are materialized as
//! ordered vectors, so sibling traversal is plain slice indexing and test
//! fixtures can be built as literal arrays of nodes.

use std::collections::HashMap;

use ego_tree::NodeRef;
use scraper::{Html, Node as HtmlNode};

/// One parsed element or text run.
///
/// Comments, doctypes and processing instructions are dropped during
/// conversion; extraction only ever looks at elements and text.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element {
        name: String,
        attrs: HashMap<String, String>,
        children: Vec<Node>,
    },
    Text(String),
}

impl Node {
    /// Element node without attributes
    pub fn element(name: &str, children: Vec<Node>) -> Node {
        Node::Element {
            name: name.to_string(),
            attrs: HashMap::new(),
            children,
        }
    }

    /// Element node with attributes
    pub fn element_with_attrs(name: &str, attrs: &[(&str, &str)], children: Vec<Node>) -> Node {
        Node::Element {
            name: name.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            children,
        }
    }

    /// Text node
    pub fn text_node(value: &str) -> Node {
        Node::Text(value.to_string())
    }

    /// Tag name for elements, None for text runs
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Element { name, .. } => Some(name),
            Node::Text(_) => None,
        }
    }

    /// Attribute value, None for text runs or absent attributes
    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            Node::Element { attrs, .. } => attrs.get(key).map(String::as_str),
            Node::Text(_) => None,
        }
    }

    /// Ordered child nodes; empty for text runs
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text(_) => &[],
        }
    }

    /// True for an element with the given tag name
    pub fn is_element(&self, name: &str) -> bool {
        self.name() == Some(name)
    }

    /// True for a text run that is empty after trimming
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Node::Text(text) if text.trim().is_empty())
    }

    /// Raw text for a text run, concatenated descendant text for an element
    pub fn text(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element { children, .. } => {
                let mut out = String::new();
                for child in children {
                    out.push_str(&child.text());
                }
                out
            }
        }
    }

    /// First descendant element with the given tag name, document order
    pub fn find(&self, name: &str) -> Option<&Node> {
        for child in self.children() {
            if child.is_element(name) {
                return Some(child);
            }
            if let Some(found) = child.find(name) {
                return Some(found);
            }
        }
        None
    }

    /// All descendant elements with the given tag name, document order
    pub fn find_all<'a>(&'a self, name: &str) -> Vec<&'a Node> {
        let mut out = Vec::new();
        self.collect_named(name, &mut out);
        out
    }

    fn collect_named<'a>(&'a self, name: &str, out: &mut Vec<&'a Node>) {
        for child in self.children() {
            if child.is_element(name) {
                out.push(child);
            }
            child.collect_named(name, out);
        }
    }

    /// First descendant element carrying the given id attribute
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        for child in self.children() {
            if child.attr("id") == Some(id) {
                return Some(child);
            }
            if let Some(found) = child.find_by_id(id) {
                return Some(found);
            }
        }
        None
    }
}

/// Parse an HTML document into an owned tree rooted at the html element
pub fn parse_document(html: &str) -> Node {
    let document = Html::parse_document(html);
    convert(*document.root_element()).unwrap_or_else(|| Node::element("html", vec![]))
}

fn convert(node: NodeRef<'_, HtmlNode>) -> Option<Node> {
    match node.value() {
        HtmlNode::Element(element) => Some(Node::Element {
            name: element.name().to_string(),
            attrs: element
                .attrs()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            children: node.children().filter_map(convert).collect(),
        }),
        HtmlNode::Text(text) => Some(Node::Text(text.text.to_string())),
        _ => None,
    }
}

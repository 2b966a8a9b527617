//! Nodes of the document tree

use std::fmt;

/// Index handle for a node in a [`Document`](crate::dom::Document) arena.
///
/// Handles are cheap to copy and never dangle while the document is alive,
/// but a handle to a detached node keeps resolving — use
/// [`Document::is_connected`](crate::dom::Document::is_connected) when
/// attachment matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the tree: structural links plus node-specific data
#[derive(Debug)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) last_child: Option<NodeId>,
    pub(crate) prev_sibling: Option<NodeId>,
    pub(crate) next_sibling: Option<NodeId>,
    pub(crate) data: NodeData,
}

impl Node {
    pub(crate) fn new(data: NodeData) -> Self {
        Node {
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            data,
        }
    }

    /// Node-specific data
    pub fn data(&self) -> &NodeData {
        &self.data
    }

    /// Parent node, if attached
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Get element data if this is an element
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Get mutable element data if this is an element
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(content) => Some(content),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element with tag name and attributes
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Element data: tag name and ordered attribute list
#[derive(Debug)]
pub struct ElementData {
    tag: String,
    attrs: Vec<Attribute>,
}

impl ElementData {
    pub(crate) fn new(tag: impl Into<String>) -> Self {
        ElementData {
            tag: tag.into().to_ascii_lowercase(),
            attrs: Vec::new(),
        }
    }

    /// Tag name, lowercase
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Get an attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Check whether an attribute is present, regardless of value
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|attr| attr.name == name)
    }

    /// Set an attribute, replacing any existing value
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        for attr in &mut self.attrs {
            if attr.name == name {
                attr.value = value;
                return;
            }
        }
        self.attrs.push(Attribute { name, value });
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let index = self.attrs.iter().position(|attr| attr.name == name)?;
        Some(self.attrs.remove(index).value)
    }

    /// Iterate attributes in document order
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs
            .iter()
            .map(|attr| (attr.name.as_str(), attr.value.as_str()))
    }

    /// Check whether the `class` attribute contains the given class
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|value| value.split_ascii_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Add a class to the `class` attribute if not already present
    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        match self.attr("class") {
            Some(existing) if !existing.is_empty() => {
                let updated = format!("{existing} {class}");
                self.set_attr("class", updated);
            }
            _ => self.set_attr("class", class),
        }
    }

    /// Remove a class from the `class` attribute
    pub fn remove_class(&mut self, class: &str) {
        let Some(existing) = self.attr("class") else {
            return;
        };
        let updated = existing
            .split_ascii_whitespace()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr("class", updated);
    }
}

/// A single element attribute
#[derive(Debug)]
pub struct Attribute {
    pub(crate) name: String,
    pub(crate) value: String,
}

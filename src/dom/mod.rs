//! Document model - arena tree, queries, and the active-element focus model
//!
//! The host owns the markup; widgets hold [`NodeId`] handles into the arena
//! and never assume a node outlives the document. Moving input focus queues a
//! [`Event::Blur`] for the element losing it; the page dispatcher drains the
//! queue after each delivery, so all focus side effects stay on the single
//! event-driven path.
//!
//! # Example
//!
//! ```
//! use uplift::dom::Document;
//!
//! let mut dom = Document::new();
//! let body = dom.append_element(dom.root(), "body");
//! let main = dom.append_element(body, "main");
//! dom.set_attr(main, "id", "content");
//!
//! assert_eq!(dom.get_element_by_id("content"), Some(main));
//! ```

pub mod node;

pub use node::{ElementData, Node, NodeData, NodeId};

use crate::event::Event;

/// Class toggled on `<body>` by the host once it has verified the environment
/// can run enhanced widgets. Widgets refuse to initialize without it.
pub const SUPPORT_CLASS: &str = "uplift-supported";

/// An HTML document as an arena of nodes
///
/// Nodes are created detached and attached with [`append_child`]. Detaching a
/// node keeps its id valid but disconnects its subtree; structural validation
/// treats disconnected roots as missing.
///
/// [`append_child`]: Document::append_child
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    active: Option<NodeId>,
    pending: Vec<Event>,
}

impl Document {
    /// Create an empty document containing only the document root
    pub fn new() -> Self {
        Document {
            nodes: vec![Node::new(NodeData::Document)],
            active: None,
            pending: Vec::new(),
        }
    }

    /// The document root node
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Get a node by id
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by id
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Element data for a node, if it is an element
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    /// Mutable element data for a node, if it is an element
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(Node::as_element_mut)
    }

    /// Create a detached element node
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.push(Node::new(NodeData::Element(ElementData::new(tag))))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: impl Into<String>) -> NodeId {
        self.push(Node::new(NodeData::Text(content.into())))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: impl Into<String>) -> NodeId {
        self.push(Node::new(NodeData::Comment(content.into())))
    }

    /// Create an element and append it to `parent` in one step
    pub fn append_element(&mut self, parent: NodeId, tag: impl Into<String>) -> NodeId {
        let id = self.create_element(tag);
        self.append_child(parent, id);
        id
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Append `child` as the last child of `parent`
    ///
    /// A child already attached elsewhere is detached first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.get(parent).is_none() || self.get(child).is_none() || parent == child {
            return;
        }
        self.detach(child);

        let prev_last = match self.get_mut(parent) {
            Some(node) => node.last_child.replace(child),
            None => return,
        };
        if let Some(prev) = prev_last {
            if let Some(node) = self.get_mut(prev) {
                node.next_sibling = Some(child);
            }
        } else if let Some(node) = self.get_mut(parent) {
            node.first_child = Some(child);
        }
        if let Some(node) = self.get_mut(child) {
            node.parent = Some(parent);
            node.prev_sibling = prev_last;
            node.next_sibling = None;
        }
    }

    /// Detach a node (and its subtree) from its parent
    ///
    /// The node id stays valid; the subtree is simply no longer reachable
    /// from the document root.
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else {
            return;
        };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);

        if let Some(prev) = prev {
            if let Some(node) = self.get_mut(prev) {
                node.next_sibling = next;
            }
        } else if let Some(parent) = parent {
            if let Some(node) = self.get_mut(parent) {
                node.first_child = next;
            }
        }
        if let Some(next) = next {
            if let Some(node) = self.get_mut(next) {
                node.prev_sibling = prev;
            }
        } else if let Some(parent) = parent {
            if let Some(node) = self.get_mut(parent) {
                node.last_child = prev;
            }
        }
        if let Some(node) = self.get_mut(id) {
            node.parent = None;
            node.prev_sibling = None;
            node.next_sibling = None;
        }
    }

    /// Check whether a node is still reachable from the document root
    pub fn is_connected(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == self.root() {
                return true;
            }
            match self.get(current).and_then(Node::parent) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Iterate the descendants of `scope` in document (preorder) order,
    /// excluding `scope` itself
    pub fn descendants(&self, scope: NodeId) -> Descendants<'_> {
        Descendants {
            dom: self,
            scope,
            next: self.get(scope).and_then(|node| node.first_child),
        }
    }

    /// Find the first element in document order with the given `id` attribute
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .find(|node| self.element(*node).and_then(|e| e.attr("id")) == Some(id))
    }

    /// Elements under `scope` carrying the given attribute, in document order
    pub fn elements_with_attr<'a>(
        &'a self,
        scope: NodeId,
        name: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.descendants(scope)
            .filter(move |id| self.element(*id).is_some_and(|e| e.has_attr(name)))
    }

    /// The `<body>` element, if present
    pub fn body(&self) -> Option<NodeId> {
        self.descendants(self.root())
            .find(|id| self.tag(*id) == Some("body"))
    }

    /// Tag name of an element node
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(ElementData::tag)
    }

    /// Attribute value of an element node
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.attr(name))
    }

    /// Check whether an element carries an attribute
    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_attr(name))
    }

    /// Set an attribute on an element node; ignored for non-elements
    pub fn set_attr(&mut self, id: NodeId, name: impl Into<String>, value: impl Into<String>) {
        if let Some(element) = self.element_mut(id) {
            element.set_attr(name, value);
        }
    }

    /// Remove an attribute from an element node
    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> Option<String> {
        self.element_mut(id).and_then(|e| e.remove_attr(name))
    }

    /// Check whether an element's class list contains `class`
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_class(class))
    }

    /// Add a class to an element node
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(element) = self.element_mut(id) {
            element.add_class(class);
        }
    }

    /// Remove a class from an element node
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(element) = self.element_mut(id) {
            element.remove_class(class);
        }
    }

    /// Mark the document as supporting enhanced widgets by adding
    /// [`SUPPORT_CLASS`] to `<body>`
    pub fn mark_supported(&mut self) {
        if let Some(body) = self.body() {
            self.add_class(body, SUPPORT_CLASS);
        }
    }

    /// Check whether the host has marked the document as supported
    pub fn is_supported(&self) -> bool {
        self.body()
            .is_some_and(|body| self.has_class(body, SUPPORT_CLASS))
    }

    /// The element currently holding input focus
    pub fn active_element(&self) -> Option<NodeId> {
        self.active
    }

    /// Move input focus to an element
    ///
    /// Queues a [`Event::Blur`] for the element losing focus; the queue is
    /// drained by [`Page::dispatch`](crate::page::Page::dispatch).
    pub fn focus(&mut self, id: NodeId) {
        if self.active == Some(id) || self.element(id).is_none() {
            return;
        }
        if let Some(prev) = self.active.replace(id) {
            self.pending.push(Event::Blur { target: prev });
        }
    }

    /// Remove input focus from an element, if it currently holds it
    pub fn blur(&mut self, id: NodeId) {
        if self.active == Some(id) {
            self.active = None;
            self.pending.push(Event::Blur { target: id });
        }
    }

    /// Drain focus events queued by [`focus`](Document::focus) /
    /// [`blur`](Document::blur)
    pub(crate) fn take_pending(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.pending)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Preorder iterator over a subtree, excluding the scope node itself
pub struct Descendants<'a> {
    dom: &'a Document,
    scope: NodeId,
    next: Option<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;

        // Advance: first child, else next sibling of the nearest ancestor
        // still inside the scope.
        let node = self.dom.get(current)?;
        self.next = node.first_child.or_else(|| {
            let mut cursor = current;
            loop {
                if cursor == self.scope {
                    return None;
                }
                let node = self.dom.get(cursor)?;
                if let Some(sibling) = node.next_sibling {
                    return Some(sibling);
                }
                cursor = node.parent?;
            }
        });

        Some(current)
    }
}

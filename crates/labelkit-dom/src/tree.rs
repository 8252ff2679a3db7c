//! DOM Tree (arena-based allocation)
//!
//! Owns every node and the links between them. Traversal is in
//! document order and never descends into shadow trees; shadow
//! content is reached only through `shadow_root()` on the host.

use tracing::trace;

use crate::node::{ElementData, Node, NodeData};
use crate::shadow::{ShadowRootData, ShadowRootMode};
use crate::NodeId;

/// Arena-based DOM tree
#[derive(Debug, Default)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new empty DOM tree
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(data));
        id
    }

    /// Create a document node
    pub fn create_document(&mut self) -> NodeId {
        self.alloc(NodeData::Document)
    }

    /// Create a detached document fragment
    pub fn create_fragment(&mut self) -> NodeId {
        self.alloc(NodeData::Fragment)
    }

    /// Create an element node
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(NodeData::Element(ElementData::new(tag.to_lowercase())))
    }

    /// Create a text node
    pub fn create_text(&mut self, content: impl Into<String>) -> NodeId {
        self.alloc(NodeData::Text(content.into()))
    }

    /// Create a comment node
    pub fn create_comment(&mut self, content: impl Into<String>) -> NodeId {
        self.alloc(NodeData::Comment(content.into()))
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id.is_valid() {
            self.nodes.get(id.index())
        } else {
            None
        }
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if id.is_valid() {
            self.nodes.get_mut(id.index())
        } else {
            None
        }
    }

    /// Number of nodes in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append `child` as the last child of `parent`
    ///
    /// The child must be detached (no current parent).
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(self.get(child).map(|n| !n.parent.is_valid()).unwrap_or(false));
        let Some(parent_node) = self.get(parent) else {
            return;
        };
        let old_last = parent_node.last_child;

        if let Some(node) = self.get_mut(child) {
            node.parent = parent;
            node.prev_sibling = old_last;
            node.next_sibling = NodeId::NONE;
        } else {
            return;
        }

        if old_last.is_valid() {
            if let Some(last) = self.get_mut(old_last) {
                last.next_sibling = child;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.first_child = child;
        }
        if let Some(p) = self.get_mut(parent) {
            p.last_child = child;
        }
        trace!(?parent, ?child, "appended child");
    }

    /// Unlink a node from its parent; the subtree below it stays intact
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else {
            return;
        };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);

        if prev.is_valid() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = next;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.first_child = next;
        }
        if next.is_valid() {
            if let Some(n) = self.get_mut(next) {
                n.prev_sibling = prev;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.last_child = prev;
        }

        if let Some(node) = self.get_mut(id) {
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
        }
        trace!(?id, "detached node");
    }

    /// Iterate direct children in order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE),
        }
    }

    /// Iterate the subtree rooted at `scope` (inclusive) in document order
    ///
    /// Shadow trees are not visited; they are separate scopes.
    pub fn scope_nodes(&self, scope: NodeId) -> ScopeNodes<'_> {
        ScopeNodes {
            tree: self,
            scope,
            next: if self.get(scope).is_some() {
                scope
            } else {
                NodeId::NONE
            },
        }
    }

    /// Resolve the root scope of a node
    ///
    /// The nearest containing document, fragment, or shadow root; for a
    /// fully detached tree, the topmost ancestor (possibly the node
    /// itself).
    pub fn root_scope(&self, id: NodeId) -> NodeId {
        let mut current = id;
        loop {
            let Some(node) = self.get(current) else {
                return NodeId::NONE;
            };
            if node.is_scope_root() || !node.parent.is_valid() {
                return current;
            }
            current = node.parent;
        }
    }

    /// Tag name of an element node
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_element().map(|e| e.name.as_str())
    }

    /// Get an attribute of an element node
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.attr(name)
    }

    /// Check an attribute on an element node
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    /// Set an attribute on an element node (no-op on non-elements)
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(elem) = self.get_mut(id).and_then(|n| n.as_element_mut()) {
            elem.set_attr(name, value);
        }
    }

    /// Remove an attribute from an element node; returns whether it was present
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> bool {
        self.get_mut(id)
            .and_then(|n| n.as_element_mut())
            .map(|e| e.remove_attr(name))
            .unwrap_or(false)
    }

    /// The `id` attribute of an element node, empty when unset or not an element
    pub fn element_id(&self, id: NodeId) -> &str {
        self.get(id)
            .and_then(|n| n.as_element())
            .map(|e| e.id())
            .unwrap_or("")
    }

    /// Find the first element with the given id attribute under `scope`
    pub fn element_by_id(&self, scope: NodeId, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.scope_nodes(scope)
            .find(|&n| self.element_id(n) == id)
    }

    /// Attach a shadow root to a host element
    ///
    /// Returns the existing root when one is already attached.
    pub fn attach_shadow(&mut self, host: NodeId, mode: ShadowRootMode) -> NodeId {
        if let Some(existing) = self.shadow_root(host) {
            return existing;
        }
        if self.get(host).and_then(|n| n.as_element()).is_none() {
            return NodeId::NONE;
        }
        let root = self.alloc(NodeData::ShadowRoot(ShadowRootData::new(host, mode)));
        if let Some(elem) = self.get_mut(host).and_then(|n| n.as_element_mut()) {
            elem.shadow_root = root;
        }
        trace!(?host, ?root, "attached shadow root");
        root
    }

    /// Shadow root of a host element, if attached
    pub fn shadow_root(&self, host: NodeId) -> Option<NodeId> {
        let root = self.get(host)?.as_element()?.shadow_root;
        root.is_valid().then_some(root)
    }
}

/// Iterator over direct children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if !self.next.is_valid() {
            return None;
        }
        let current = self.next;
        self.next = self
            .tree
            .get(current)
            .map(|n| n.next_sibling)
            .unwrap_or(NodeId::NONE);
        Some(current)
    }
}

/// Document-order iterator over a scope's subtree, scope included
pub struct ScopeNodes<'a> {
    tree: &'a DomTree,
    scope: NodeId,
    next: NodeId,
}

impl Iterator for ScopeNodes<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if !self.next.is_valid() {
            return None;
        }
        let current = self.next;
        self.next = self.successor(current);
        Some(current)
    }
}

impl ScopeNodes<'_> {
    fn successor(&self, id: NodeId) -> NodeId {
        let node = match self.tree.get(id) {
            Some(n) => n,
            None => return NodeId::NONE,
        };
        if node.first_child.is_valid() {
            return node.first_child;
        }
        // Climb until a next sibling exists, stopping at the scope root.
        let mut current = id;
        loop {
            if current == self.scope {
                return NodeId::NONE;
            }
            let node = match self.tree.get(current) {
                Some(n) => n,
                None => return NodeId::NONE,
            };
            if node.next_sibling.is_valid() {
                return node.next_sibling;
            }
            if !node.parent.is_valid() {
                return NodeId::NONE;
            }
            current = node.parent;
        }
    }
}

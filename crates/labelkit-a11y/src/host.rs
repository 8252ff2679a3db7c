//! Label host
//!
//! Owns a DOM tree and an element registry and ties the two together:
//! subtree insertion runs attach hooks for every defined element in it,
//! removal runs detach hooks before unlinking, and `refresh` re-runs
//! the attach pass on demand without a reattach.

use labelkit_dom::{DomTree, NodeId};
use tracing::debug;

use crate::registry::ElementRegistry;

/// A DOM tree with lifecycle-driven label association
#[derive(Debug)]
pub struct LabelHost {
    dom: DomTree,
    registry: ElementRegistry,
    document: NodeId,
    body: NodeId,
}

impl LabelHost {
    /// Create a host with an empty document and registry
    pub fn new() -> Self {
        let mut dom = DomTree::new();
        let document = dom.create_document();
        let html = dom.create_element("html");
        let body = dom.create_element("body");
        dom.append_child(document, html);
        dom.append_child(html, body);
        Self {
            dom,
            registry: ElementRegistry::new(),
            document,
            body,
        }
    }

    /// The document node
    pub fn document(&self) -> NodeId {
        self.document
    }

    /// The `<body>` element
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Access the DOM tree
    pub fn dom(&self) -> &DomTree {
        &self.dom
    }

    /// Access the DOM tree mutably
    ///
    /// Mutations made here do not trigger lifecycle hooks; use
    /// [`refresh`](Self::refresh) afterwards when they should be
    /// reflected in label associations.
    pub fn dom_mut(&mut self) -> &mut DomTree {
        &mut self.dom
    }

    /// Access the registry
    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    /// Access the registry mutably
    pub fn registry_mut(&mut self) -> &mut ElementRegistry {
        &mut self.registry
    }

    /// Defined elements in the subtree rooted at `node`, document order
    fn defined_elements(&self, node: NodeId) -> Vec<NodeId> {
        self.dom
            .scope_nodes(node)
            .filter(|&n| self.registry.class_of(&self.dom, n).is_some())
            .collect()
    }

    /// Insert a subtree and run attach hooks for its defined elements
    pub fn insert(&mut self, parent: NodeId, node: NodeId) {
        self.dom.append_child(parent, node);
        let attached = self.defined_elements(node);
        debug!(?node, count = attached.len(), "attached subtree");
        for element in attached {
            self.registry.connect(&mut self.dom, element);
        }
    }

    /// Run detach hooks for a subtree's defined elements, then unlink it
    pub fn remove(&mut self, node: NodeId) {
        let detached = self.defined_elements(node);
        debug!(?node, count = detached.len(), "detaching subtree");
        for element in detached {
            self.registry.disconnect(&mut self.dom, element);
        }
        self.dom.detach(node);
    }

    /// Re-run attach hooks for one element, without a reattach
    ///
    /// Useful after its id changed or labels were added dynamically.
    pub fn refresh(&mut self, node: NodeId) {
        self.registry.connect(&mut self.dom, node);
    }
}

impl Default for LabelHost {
    fn default() -> Self {
        Self::new()
    }
}

//! Document - High-level document API

use crate::{DomTree, NodeId};

/// HTML document with the usual html/body skeleton
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    root: NodeId,
    html_element: NodeId,
    body_element: NodeId,
}

impl Document {
    /// Create a new document with html and body elements
    pub fn new() -> Self {
        let mut tree = DomTree::new();
        let root = tree.create_document();
        let html = tree.create_element("html");
        let body = tree.create_element("body");
        tree.append_child(root, html);
        tree.append_child(html, body);
        Self {
            tree,
            root,
            html_element: html,
            body_element: body,
        }
    }

    /// The document node
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get `<html>` element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get `<body>` element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Get element by id, anywhere in the document
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree.element_by_id(self.root, id)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

//! labelkit DOM - Document Object Model
//!
//! Compact arena-based DOM tree, just enough surface for label
//! association: element attributes, id lookup, document-order
//! traversal, shadow roots, and root-scope resolution.

mod document;
mod node;
mod shadow;
mod tree;

pub use document::Document;
pub use node::{Attribute, ElementData, Node, NodeData};
pub use shadow::{ShadowRootData, ShadowRootMode};
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check the id refers to a node at all
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index as u32)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

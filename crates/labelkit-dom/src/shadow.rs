//! Shadow DOM
//!
//! Shadow roots bound label lookup: their subtrees hang off the host
//! element rather than the child list, so ordinary traversal never
//! pierces them, and their parent link is NONE so upward root-scope
//! walks stop at the boundary.

use crate::NodeId;

/// Shadow root mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowRootMode {
    #[default]
    Open,
    Closed,
}

/// Data carried by a shadow-root node
#[derive(Debug, Clone)]
pub struct ShadowRootData {
    /// Host element
    pub host: NodeId,
    pub mode: ShadowRootMode,
}

impl ShadowRootData {
    pub fn new(host: NodeId, mode: ShadowRootMode) -> Self {
        Self { host, mode }
    }
}

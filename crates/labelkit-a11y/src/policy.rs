//! Label predicate policy
//!
//! Which elements count as label candidates. Two policies exist because
//! both appear in the wild: matching `<label>` tags only, or also
//! accepting any element that opts in with `role="label"`.

use labelkit_dom::{DomTree, NodeId};

/// Which elements are treated as label candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPolicy {
    /// Only `<label>` elements
    #[default]
    TagOnly,
    /// `<label>` elements, or any element with `role="label"`
    TagOrRole,
}

impl LabelPolicy {
    /// Check whether a node is a label candidate under this policy
    pub fn is_label(self, dom: &DomTree, node: NodeId) -> bool {
        let Some(tag) = dom.tag_name(node) else {
            return false;
        };
        if tag == "label" {
            return true;
        }
        match self {
            LabelPolicy::TagOnly => false,
            LabelPolicy::TagOrRole => dom.attribute(node, "role") == Some("label"),
        }
    }
}

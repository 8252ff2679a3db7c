//! DOM Node - Compact representation
//!
//! Nodes are linked by `NodeId` (4 bytes) instead of pointers.
//! Attributes live inline on the element; most elements carry
//! only a handful, so linear search beats a map here.

use crate::shadow::ShadowRootData;
use crate::NodeId;

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if root or shadow root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    pub(crate) fn new(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this node bounds a root scope (document, fragment, shadow root)
    #[inline]
    pub fn is_scope_root(&self) -> bool {
        matches!(
            self.data,
            NodeData::Document | NodeData::Fragment | NodeData::ShadowRoot(_)
        )
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t.as_str()),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Detached document fragment
    Fragment,
    /// Shadow root (reached through its host, never through child links)
    ShadowRoot(ShadowRootData),
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Tag name (lowercase)
    pub name: String,
    /// Attributes in set order
    pub attrs: Vec<Attribute>,
    /// Attached shadow root, if any
    pub shadow_root: NodeId,
}

impl ElementData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            shadow_root: NodeId::NONE,
        }
    }

    /// Get an attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Check an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Set an attribute, replacing any previous value
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

    /// Remove an attribute; returns whether it was present
    pub fn remove_attr(&mut self, name: &str) -> bool {
        let before = self.attrs.len();
        self.attrs.retain(|a| a.name != name);
        self.attrs.len() != before
    }

    /// The `id` attribute, empty string when unset
    pub fn id(&self) -> &str {
        self.attr("id").unwrap_or("")
    }
}

/// Attribute
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_roundtrip() {
        let mut elem = ElementData::new("label");
        assert_eq!(elem.attr("for"), None);
        assert!(!elem.has_attr("for"));

        elem.set_attr("for", "foo");
        assert_eq!(elem.attr("for"), Some("foo"));

        elem.set_attr("for", "bar");
        assert_eq!(elem.attr("for"), Some("bar"));
        assert_eq!(elem.attrs.len(), 1);

        assert!(elem.remove_attr("for"));
        assert!(!elem.remove_attr("for"));
    }

    #[test]
    fn test_id_defaults_empty() {
        let mut elem = ElementData::new("div");
        assert_eq!(elem.id(), "");
        elem.set_attr("id", "foo");
        assert_eq!(elem.id(), "foo");
    }
}

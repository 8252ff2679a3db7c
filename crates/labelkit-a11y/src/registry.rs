//! Element registry
//!
//! Maps tag names to element classes and drives their lifecycle hooks
//! for individual instances. Instance-level capability membership is
//! answered here: a node carries the labelable capability when it is an
//! element whose tag is defined with it.

use std::collections::HashMap;

use labelkit_dom::{DomTree, NodeId};
use tracing::debug;

use crate::capability::{Capability, ElementClass};

/// Registry definition errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefineError {
    #[error("invalid custom element name: {0}")]
    InvalidName(String),

    #[error("element already defined: {0}")]
    AlreadyDefined(String),
}

/// Custom element registry
#[derive(Debug, Default)]
pub struct ElementRegistry {
    definitions: HashMap<String, ElementClass>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a class under its tag name
    pub fn define(&mut self, class: ElementClass) -> Result<(), DefineError> {
        let name = class.tag_name().to_owned();
        if !Self::is_valid_name(&name) {
            return Err(DefineError::InvalidName(name));
        }
        if self.definitions.contains_key(&name) {
            return Err(DefineError::AlreadyDefined(name));
        }
        debug!(%name, "defined element class");
        self.definitions.insert(name, class);
        Ok(())
    }

    /// Get a class by tag name
    pub fn get(&self, name: &str) -> Option<&ElementClass> {
        self.definitions.get(name)
    }

    /// Check if a tag name is defined
    pub fn is_defined(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Class of a node, when it is an element with a defined tag
    pub fn class_of(&self, dom: &DomTree, node: NodeId) -> Option<&ElementClass> {
        self.get(dom.tag_name(node)?)
    }

    /// Check whether a node carries the labelable capability
    ///
    /// False, never an error, for invalid ids, non-element nodes, and
    /// elements whose tag is undefined or defined without it.
    pub fn has_labelable_capability(&self, dom: &DomTree, node: NodeId) -> bool {
        self.class_of(dom, node)
            .map(|class| class.has_capability(Capability::Labelable))
            .unwrap_or(false)
    }

    /// Run attach hooks for one instance
    pub fn connect(&self, dom: &mut DomTree, node: NodeId) {
        if let Some(class) = self.class_of(dom, node) {
            class.run_attach(dom, node);
        }
    }

    /// Run detach hooks for one instance
    pub fn disconnect(&self, dom: &mut DomTree, node: NodeId) {
        if let Some(class) = self.class_of(dom, node) {
            class.run_detach(dom, node);
        }
    }

    /// Validate a custom element name
    ///
    /// Must contain a hyphen, start with a lowercase ASCII letter, and
    /// avoid the names reserved by the custom-elements spec.
    fn is_valid_name(name: &str) -> bool {
        if !name.contains('-') {
            return false;
        }
        if !name
            .chars()
            .next()
            .map(|c| c.is_ascii_lowercase())
            .unwrap_or(false)
        {
            return false;
        }
        let reserved = [
            "annotation-xml",
            "color-profile",
            "font-face",
            "font-face-src",
            "font-face-uri",
            "font-face-format",
            "font-face-name",
            "missing-glyph",
        ];
        !reserved.contains(&name)
    }
}

//! Element classes and capability tagging
//!
//! An [`ElementClass`] is a runtime definition of a custom element:
//! a tag name, a capability tag set, and two-phase lifecycle hook
//! lists. Capabilities extend a class by appending hooks, never by
//! replacing what an earlier definition installed, so base behavior
//! always runs first and capability behavior after it.

use std::fmt;
use std::sync::Arc;

use labelkit_dom::{DomTree, NodeId};
use tracing::debug;

use crate::policy::LabelPolicy;
use crate::sync::{connect_labels, disconnect_labels};

/// Lifecycle hook run when an instance is attached to or detached from a tree
pub type LifecycleHook = Arc<dyn Fn(&mut DomTree, NodeId) + Send + Sync>;

/// Capability tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Automatic `aria-labelledby` association
    Labelable,
}

/// Runtime definition of a custom element class
#[derive(Clone)]
pub struct ElementClass {
    tag_name: String,
    capabilities: Vec<Capability>,
    attach_hooks: Vec<LifecycleHook>,
    detach_hooks: Vec<LifecycleHook>,
}

impl ElementClass {
    /// Create a class with no hooks and no capabilities
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into().to_lowercase(),
            capabilities: Vec::new(),
            attach_hooks: Vec::new(),
            detach_hooks: Vec::new(),
        }
    }

    /// Tag name instances of this class use
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Check whether a capability tag is present
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    fn add_capability(&mut self, capability: Capability) {
        if !self.has_capability(capability) {
            self.capabilities.push(capability);
        }
    }

    /// Append an attach hook; existing hooks keep running first
    pub fn on_attach(&mut self, hook: LifecycleHook) {
        self.attach_hooks.push(hook);
    }

    /// Append a detach hook; existing hooks keep running first
    pub fn on_detach(&mut self, hook: LifecycleHook) {
        self.detach_hooks.push(hook);
    }

    /// Number of installed attach hooks
    pub fn attach_hook_count(&self) -> usize {
        self.attach_hooks.len()
    }

    /// Number of installed detach hooks
    pub fn detach_hook_count(&self) -> usize {
        self.detach_hooks.len()
    }

    /// Run every attach hook, in installation order
    pub fn run_attach(&self, dom: &mut DomTree, node: NodeId) {
        for hook in &self.attach_hooks {
            hook(dom, node);
        }
    }

    /// Run every detach hook, in installation order
    pub fn run_detach(&self, dom: &mut DomTree, node: NodeId) {
        for hook in &self.detach_hooks {
            hook(dom, node);
        }
    }
}

impl fmt::Debug for ElementClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementClass")
            .field("tag_name", &self.tag_name)
            .field("capabilities", &self.capabilities)
            .field("attach_hooks", &self.attach_hooks.len())
            .field("detach_hooks", &self.detach_hooks.len())
            .finish()
    }
}

/// Give a class the labelable capability
///
/// Returns the class unchanged when it already carries the capability,
/// so applying twice never installs duplicate hooks. Otherwise the
/// capability tag is set and one attach plus one detach hook are
/// appended after whatever the class already defined.
pub fn apply_labelable(mut class: ElementClass, policy: LabelPolicy) -> ElementClass {
    if class.has_capability(Capability::Labelable) {
        return class;
    }
    debug!(tag = class.tag_name(), ?policy, "applying labelable capability");
    class.add_capability(Capability::Labelable);
    class.on_attach(Arc::new(move |dom, node| connect_labels(dom, node, policy)));
    class.on_detach(Arc::new(move |dom, node| {
        disconnect_labels(dom, node, policy)
    }));
    class
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_is_idempotent() {
        let class = apply_labelable(ElementClass::new("my-element"), LabelPolicy::TagOnly);
        assert!(class.has_capability(Capability::Labelable));
        assert_eq!(class.attach_hook_count(), 1);
        assert_eq!(class.detach_hook_count(), 1);

        let again = apply_labelable(class, LabelPolicy::TagOnly);
        assert!(again.has_capability(Capability::Labelable));
        assert_eq!(again.attach_hook_count(), 1);
        assert_eq!(again.detach_hook_count(), 1);
    }

    #[test]
    fn test_plain_class_lacks_capability() {
        let class = ElementClass::new("my-element");
        assert!(!class.has_capability(Capability::Labelable));
        assert_eq!(class.attach_hook_count(), 0);
    }

    #[test]
    fn test_base_hooks_run_before_capability_hooks() {
        // The base hook assigns the id the label sync then picks up, so
        // the association only forms if chaining order is base-first.
        let mut class = ElementClass::new("my-element");
        class.on_attach(Arc::new(|dom, node| {
            dom.set_attribute(node, "id", "foo");
        }));
        let class = apply_labelable(class, LabelPolicy::TagOnly);
        assert_eq!(class.attach_hook_count(), 2);

        let mut dom = DomTree::new();
        let doc = dom.create_document();
        let label = dom.create_element("label");
        dom.set_attribute(label, "for", "foo");
        dom.set_attribute(label, "id", "bar");
        dom.append_child(doc, label);
        let elem = dom.create_element("my-element");
        dom.append_child(doc, elem);

        class.run_attach(&mut dom, elem);
        assert_eq!(dom.attribute(elem, "aria-labelledby"), Some("bar"));
    }
}

//! Label synchronization
//!
//! The attach/detach halves of the association algorithm. Both scope
//! their label query to the element's root (document, fragment, or
//! shadow root), so matching never crosses a shadow boundary.

use labelkit_dom::{DomTree, NodeId};
use tracing::debug;

use crate::label_id::generate_label_id;
use crate::policy::LabelPolicy;

const ARIA_LABELLEDBY: &str = "aria-labelledby";

/// Labels in `scope` whose `for` attribute equals `id`, in document order
fn find_labels(dom: &DomTree, scope: NodeId, id: &str, policy: LabelPolicy) -> Vec<NodeId> {
    dom.scope_nodes(scope)
        .filter(|&n| policy.is_label(dom, n) && dom.attribute(n, "for") == Some(id))
        .collect()
}

/// Connect an element to its labels
///
/// Computes `aria-labelledby` from every label in the element's root
/// scope whose `for` attribute matches its id, assigning generated ids
/// to labels that lack one. No id means no labels: any stale
/// `aria-labelledby` is cleared and nothing else happens. The attribute
/// is removed, never left empty, when no label matches.
pub fn connect_labels(dom: &mut DomTree, element: NodeId, policy: LabelPolicy) {
    let id = dom.element_id(element).to_owned();
    if id.is_empty() {
        dom.remove_attribute(element, ARIA_LABELLEDBY);
        return;
    }

    let scope = dom.root_scope(element);
    if !scope.is_valid() {
        dom.remove_attribute(element, ARIA_LABELLEDBY);
        return;
    }

    let labels = find_labels(dom, scope, &id, policy);
    if labels.is_empty() {
        dom.remove_attribute(element, ARIA_LABELLEDBY);
        return;
    }

    let mut labelled_by = Vec::with_capacity(labels.len());
    for label in labels {
        if dom.element_id(label).is_empty() {
            let generated = generate_label_id(dom, scope);
            dom.set_attribute(label, "id", &generated);
        }
        labelled_by.push(dom.element_id(label).to_owned());
    }

    let value = labelled_by.join(" ");
    debug!(%id, %value, "connected labels");
    dom.set_attribute(element, ARIA_LABELLEDBY, &value);
}

/// Disconnect an element from its labels
///
/// Strips the `for` attribute from every matching label so nothing
/// keeps pointing at a removed element, and clears the element's own
/// `aria-labelledby`. Must run while the element is still in its tree.
pub fn disconnect_labels(dom: &mut DomTree, element: NodeId, policy: LabelPolicy) {
    let id = dom.element_id(element).to_owned();
    if !id.is_empty() {
        let scope = dom.root_scope(element);
        if scope.is_valid() {
            for label in find_labels(dom, scope, &id, policy) {
                dom.remove_attribute(label, "for");
            }
        }
        debug!(%id, "disconnected labels");
    }
    dom.remove_attribute(element, ARIA_LABELLEDBY);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        dom: DomTree,
        body: NodeId,
    }

    fn fixture() -> Fixture {
        let mut dom = DomTree::new();
        let doc = dom.create_document();
        let body = dom.create_element("body");
        dom.append_child(doc, body);
        Fixture { dom, body }
    }

    impl Fixture {
        fn label(&mut self, for_id: &str, id: Option<&str>) -> NodeId {
            let label = self.dom.create_element("label");
            self.dom.set_attribute(label, "for", for_id);
            if let Some(id) = id {
                self.dom.set_attribute(label, "id", id);
            }
            let body = self.body;
            self.dom.append_child(body, label);
            label
        }

        fn element(&mut self, id: &str) -> NodeId {
            let elem = self.dom.create_element("my-element");
            if !id.is_empty() {
                self.dom.set_attribute(elem, "id", id);
            }
            let body = self.body;
            self.dom.append_child(body, elem);
            elem
        }
    }

    #[test]
    fn test_single_label() {
        let mut f = fixture();
        f.label("foo", Some("bar"));
        let elem = f.element("foo");

        connect_labels(&mut f.dom, elem, LabelPolicy::TagOnly);
        assert_eq!(f.dom.attribute(elem, "aria-labelledby"), Some("bar"));
    }

    #[test]
    fn test_no_id_is_noop_and_clears_stale() {
        let mut f = fixture();
        f.label("foo", Some("bar"));
        let elem = f.element("");
        f.dom.set_attribute(elem, "aria-labelledby", "stale");

        connect_labels(&mut f.dom, elem, LabelPolicy::TagOnly);
        assert!(!f.dom.has_attribute(elem, "aria-labelledby"));
    }

    #[test]
    fn test_no_matching_label_removes_attribute() {
        let mut f = fixture();
        f.label("other", Some("bar"));
        let elem = f.element("foo");
        f.dom.set_attribute(elem, "aria-labelledby", "stale");

        connect_labels(&mut f.dom, elem, LabelPolicy::TagOnly);
        // Absent, not present-but-empty.
        assert_eq!(f.dom.attribute(elem, "aria-labelledby"), None);
    }

    #[test]
    fn test_label_without_id_gets_generated_one() {
        let mut f = fixture();
        let label = f.label("foo", None);
        let elem = f.element("foo");

        connect_labels(&mut f.dom, elem, LabelPolicy::TagOnly);
        let label_id = f.dom.element_id(label).to_owned();
        assert!(label_id.starts_with("uuid-"));
        assert_eq!(
            f.dom.attribute(elem, "aria-labelledby"),
            Some(label_id.as_str())
        );
    }

    #[test]
    fn test_multiple_labels_join_in_document_order() {
        let mut f = fixture();
        f.label("foo", Some("a"));
        f.label("foo", Some("b"));
        let elem = f.element("foo");

        connect_labels(&mut f.dom, elem, LabelPolicy::TagOnly);
        assert_eq!(f.dom.attribute(elem, "aria-labelledby"), Some("a b"));
    }

    #[test]
    fn test_disconnect_strips_for_and_labelledby() {
        let mut f = fixture();
        let label = f.label("foo", Some("bar"));
        let elem = f.element("foo");
        connect_labels(&mut f.dom, elem, LabelPolicy::TagOnly);

        disconnect_labels(&mut f.dom, elem, LabelPolicy::TagOnly);
        assert!(!f.dom.has_attribute(label, "for"));
        assert!(!f.dom.has_attribute(elem, "aria-labelledby"));
    }

    #[test]
    fn test_role_label_only_matches_under_role_policy() {
        let mut f = fixture();
        let span = f.dom.create_element("span");
        f.dom.set_attribute(span, "role", "label");
        f.dom.set_attribute(span, "for", "foo");
        f.dom.set_attribute(span, "id", "r");
        let body = f.body;
        f.dom.append_child(body, span);
        let elem = f.element("foo");

        connect_labels(&mut f.dom, elem, LabelPolicy::TagOnly);
        assert_eq!(f.dom.attribute(elem, "aria-labelledby"), None);

        connect_labels(&mut f.dom, elem, LabelPolicy::TagOrRole);
        assert_eq!(f.dom.attribute(elem, "aria-labelledby"), Some("r"));
    }

    #[test]
    fn test_shadow_boundary_is_not_crossed() {
        let mut f = fixture();
        f.label("foo", Some("outer"));
        let host = f.element("");
        let shadow = f
            .dom
            .attach_shadow(host, labelkit_dom::ShadowRootMode::Open);

        // Element inside the shadow root: the document-level label is
        // outside its scope.
        let inner = f.dom.create_element("my-element");
        f.dom.set_attribute(inner, "id", "foo");
        f.dom.append_child(shadow, inner);
        connect_labels(&mut f.dom, inner, LabelPolicy::TagOnly);
        assert_eq!(f.dom.attribute(inner, "aria-labelledby"), None);

        // A label in the same shadow root does associate.
        let shadow_label = f.dom.create_element("label");
        f.dom.set_attribute(shadow_label, "for", "foo");
        f.dom.set_attribute(shadow_label, "id", "inner-label");
        f.dom.append_child(shadow, shadow_label);
        connect_labels(&mut f.dom, inner, LabelPolicy::TagOnly);
        assert_eq!(
            f.dom.attribute(inner, "aria-labelledby"),
            Some("inner-label")
        );
    }

    #[test]
    fn test_detached_fragment_acts_as_scope() {
        let mut f = fixture();
        let frag = f.dom.create_fragment();
        let label = f.dom.create_element("label");
        f.dom.set_attribute(label, "for", "foo");
        f.dom.set_attribute(label, "id", "frag-label");
        f.dom.append_child(frag, label);
        let elem = f.dom.create_element("my-element");
        f.dom.set_attribute(elem, "id", "foo");
        f.dom.append_child(frag, elem);

        connect_labels(&mut f.dom, elem, LabelPolicy::TagOnly);
        assert_eq!(f.dom.attribute(elem, "aria-labelledby"), Some("frag-label"));
    }
}

//! labelkit Accessibility
//!
//! Automatic `aria-labelledby` association for custom elements.
//!
//! An element class gains the labelable capability through
//! [`apply_labelable`]; from then on, whenever an instance of that class
//! is attached to a tree, every `<label for="...">` pointing at its id
//! is collected, given an id of its own when it lacks one, and listed in
//! the element's `aria-labelledby` attribute. Detaching reverses the
//! association, and [`LabelHost::refresh`] re-runs it on demand.
//!
//! ```
//! use labelkit_a11y::{apply_labelable, ElementClass, LabelHost, LabelPolicy};
//!
//! let mut host = LabelHost::new();
//! let class = apply_labelable(ElementClass::new("my-element"), LabelPolicy::TagOnly);
//! host.registry_mut().define(class).unwrap();
//!
//! let label = host.dom_mut().create_element("label");
//! host.dom_mut().set_attribute(label, "for", "foo");
//! host.dom_mut().set_attribute(label, "id", "bar");
//! let element = host.dom_mut().create_element("my-element");
//! host.dom_mut().set_attribute(element, "id", "foo");
//!
//! let body = host.body();
//! host.insert(body, label);
//! host.insert(body, element);
//! assert_eq!(host.dom().attribute(element, "aria-labelledby"), Some("bar"));
//! ```

mod capability;
mod host;
mod label_id;
mod policy;
mod registry;
mod sync;

pub use capability::{apply_labelable, Capability, ElementClass, LifecycleHook};
pub use host::LabelHost;
pub use label_id::generate_label_id;
pub use policy::LabelPolicy;
pub use registry::{DefineError, ElementRegistry};
pub use sync::{connect_labels, disconnect_labels};

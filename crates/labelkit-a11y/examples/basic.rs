//! Example: Basic label association

use anyhow::Result;
use labelkit_a11y::{apply_labelable, ElementClass, LabelHost, LabelPolicy};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut host = LabelHost::new();
    let class = apply_labelable(ElementClass::new("demo-input"), LabelPolicy::TagOnly);
    host.registry_mut().define(class)?;

    // <label for="name">Your name:</label> <demo-input id="name">
    let label = host.dom_mut().create_element("label");
    host.dom_mut().set_attribute(label, "for", "name");
    let text = host.dom_mut().create_text("Your name:");
    host.dom_mut().append_child(label, text);
    let input = host.dom_mut().create_element("demo-input");
    host.dom_mut().set_attribute(input, "id", "name");

    let body = host.body();
    host.insert(body, label);
    host.insert(body, input);

    // The label had no id, so one was generated for it.
    println!(
        "label id:        {}",
        host.dom().element_id(label)
    );
    println!(
        "aria-labelledby: {}",
        host.dom().attribute(input, "aria-labelledby").unwrap_or("-")
    );

    host.remove(input);
    println!(
        "after removal:   {}",
        host.dom().attribute(input, "aria-labelledby").unwrap_or("-")
    );

    Ok(())
}

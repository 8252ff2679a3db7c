//! Label id generation
//!
//! Labels referenced from `aria-labelledby` must carry an id. Generated
//! ids are v4 UUIDs behind a fixed prefix; the prefix keeps the id from
//! starting with a digit, which element ids must not do.

use labelkit_dom::{DomTree, NodeId};
use tracing::debug;
use uuid::Uuid;

/// Prefix for generated label ids
const ID_PREFIX: &str = "uuid-";

/// Generate an id unique within `scope`
///
/// 128 bits of entropy make a collision with an existing generated id
/// statistically negligible; a collision with a hand-written id is
/// handled by regenerating until the candidate is free.
pub fn generate_label_id(dom: &DomTree, scope: NodeId) -> String {
    loop {
        let candidate = format!("{ID_PREFIX}{}", Uuid::new_v4());
        if dom.element_by_id(scope, &candidate).is_none() {
            return candidate;
        }
        debug!(%candidate, "generated label id collided, retrying");
    }
}

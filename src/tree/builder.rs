//! Fold algorithm: flat path entries into a rooted node hierarchy.

use crate::tree::node::Node;
use crate::tree::BuildOptions;
use serde_json::Value;
use tracing::trace;

/// One pre-validated input entry: a path and an optional leaf identifier.
pub(crate) struct Entry {
    pub path: String,
    pub id: Option<Value>,
}

/// Fold entries into a root node.
///
/// Each path is split on the separator with plain `str::split` semantics:
/// empty segments from leading, trailing, or doubled separators are kept as
/// literal segments. Entries are processed in input order, so when duplicate
/// paths carry different identifiers the last one wins.
pub(crate) fn fold(entries: Vec<Entry>, options: &BuildOptions) -> Node {
    let mut root = Node::new("", options.metadata.clone());
    for entry in entries {
        trace!(path = %entry.path, "inserting path");
        let mut curr = &mut root;
        for segment in entry.path.split(options.separator) {
            curr = curr.child_entry(segment, &options.metadata);
        }
        if let Some(id) = entry.id {
            // Identifier lands on the node reached by fully consuming the
            // path, overriding any same-named construction-time key.
            curr.insert_metadata("id", id);
        }
    }
    root
}

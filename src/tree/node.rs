//! Tree node entity: one path segment with label-sorted children and an
//! open-ended metadata bag.

use crate::error::TreeError;
use serde_json::Value;
use std::collections::BTreeMap;

/// One vertex in the tree, corresponding to exactly one path segment.
///
/// Children are keyed by label in a `BTreeMap`, so ascending lexicographic
/// emission order is a structural invariant rather than a sort performed at
/// serialization time. Equality is deep structural equality over label,
/// children, and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    label: String,
    children: BTreeMap<String, Node>,
    metadata: BTreeMap<String, Value>,
}

impl Node {
    pub(crate) fn new(label: impl Into<String>, metadata: BTreeMap<String, Value>) -> Self {
        Node {
            label: label.into(),
            children: BTreeMap::new(),
            metadata,
        }
    }

    /// The path segment this node represents. The root's label is `""`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Child with the given label, if present.
    pub fn child(&self, label: &str) -> Option<&Node> {
        self.children.get(label)
    }

    /// Children in ascending lexicographic label order.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.values()
    }

    /// Metadata attached to this node.
    pub fn metadata(&self) -> &BTreeMap<String, Value> {
        &self.metadata
    }

    /// True when this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes strictly below this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .values()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }

    /// Follow or create the child for one segment, giving a freshly created
    /// child a copy of the construction-time metadata bag.
    pub(crate) fn child_entry(
        &mut self,
        label: &str,
        metadata: &BTreeMap<String, Value>,
    ) -> &mut Node {
        self.children
            .entry(label.to_string())
            .or_insert_with(|| Node::new(label, metadata.clone()))
    }

    pub(crate) fn insert_metadata(&mut self, key: impl Into<String>, value: Value) {
        self.metadata.insert(key.into(), value);
    }

    /// Attach a fully built child, replacing any existing child with the
    /// same label.
    pub(crate) fn adopt(&mut self, child: Node) {
        self.children.insert(child.label.clone(), child);
    }

    /// Rebuild a node from an exported record: an object with a string
    /// `data` field, an optional `children` array of records, and an
    /// optional `metadata` object.
    ///
    /// Fails with [`TreeError::ChildTypeMismatch`] before returning any
    /// partial node when an element of `children` is not a valid record.
    pub fn from_value(value: &Value) -> Result<Node, TreeError> {
        record_node("", value)
    }
}

fn mismatch(label: &str, reason: impl Into<String>) -> TreeError {
    TreeError::ChildTypeMismatch {
        label: label.to_string(),
        reason: reason.into(),
    }
}

fn record_node(parent: &str, value: &Value) -> Result<Node, TreeError> {
    let record = value
        .as_object()
        .ok_or_else(|| mismatch(parent, "expected an object"))?;
    let data = record
        .get("data")
        .and_then(Value::as_str)
        .ok_or_else(|| mismatch(parent, "missing string 'data' field"))?;

    let mut node = Node::new(data, BTreeMap::new());
    if let Some(children) = record.get("children") {
        let children = children
            .as_array()
            .ok_or_else(|| mismatch(data, "'children' is not an array"))?;
        for child in children {
            node.adopt(record_node(data, child)?);
        }
    }
    if let Some(metadata) = record.get("metadata") {
        let metadata = metadata
            .as_object()
            .ok_or_else(|| mismatch(data, "'metadata' is not an object"))?;
        node.metadata = metadata
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
    }
    Ok(node)
}

//! Structured export for a tree-view widget.
//!
//! Leaf policy: omit-empty-children. A leaf record carries no `children`
//! key at all, and empty metadata is likewise omitted, so the serialized
//! shape only ever contains `data`, `children`, and caller-supplied
//! metadata keys.

use crate::tree::node::Node;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One exported record: a node's label, its child records, and its
/// metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportNode {
    pub data: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ExportNode>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,
}

/// Records for the root's children; the root itself never appears.
pub(crate) fn records(root: &Node) -> Vec<ExportNode> {
    root.children().map(record).collect()
}

fn record(node: &Node) -> ExportNode {
    ExportNode {
        data: node.label().to_string(),
        children: node.children().map(record).collect(),
        metadata: node.metadata().clone(),
    }
}

/// Same shape as [`records`], assembled directly as a JSON value array so
/// callers can hand it straight to a text encoder.
pub(crate) fn value(root: &Node) -> Value {
    Value::Array(root.children().map(value_record).collect())
}

fn value_record(node: &Node) -> Value {
    let mut record = serde_json::Map::new();
    record.insert("data".to_string(), Value::String(node.label().to_string()));
    if !node.is_leaf() {
        record.insert(
            "children".to_string(),
            Value::Array(node.children().map(value_record).collect()),
        );
    }
    if !node.metadata().is_empty() {
        record.insert(
            "metadata".to_string(),
            Value::Object(
                node.metadata()
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            ),
        );
    }
    Value::Object(record)
}

#[cfg(test)]
mod tests {
    use crate::tree::PathTree;
    use serde_json::json;

    #[test]
    fn root_children_form_the_top_level_sequence() {
        let tree = PathTree::from_paths(["b/x", "a/y"]).unwrap();
        let records = tree.export();
        let top: Vec<&str> = records.iter().map(|r| r.data.as_str()).collect();
        assert_eq!(top, vec!["a", "b"]);
    }

    #[test]
    fn leaf_records_omit_children_and_metadata_keys() {
        let tree = PathTree::from_paths(["a/b"]).unwrap();
        assert_eq!(
            tree.export_value(),
            json!([{"data": "a", "children": [{"data": "b"}]}])
        );
    }

    #[test]
    fn serialized_export_nodes_match_export_value() {
        let tree = PathTree::from_tagged_paths([
            ("a/b", json!(1)),
            ("a/c", json!("two")),
        ])
        .unwrap();
        let via_records = serde_json::to_value(tree.export()).unwrap();
        assert_eq!(via_records, tree.export_value());
    }

    #[test]
    fn metadata_passes_through_untouched() {
        let tree = PathTree::from_tagged_paths([(
            "a",
            json!({"nested": {"deep": true}, "n": 3}),
        )])
        .unwrap();
        assert_eq!(
            tree.export_value(),
            json!([{
                "data": "a",
                "metadata": {"id": {"nested": {"deep": true}, "n": 3}}
            }])
        );
    }

    #[test]
    fn empty_tree_exports_empty_sequence() {
        let tree = PathTree::from_paths(Vec::<String>::new()).unwrap();
        assert!(tree.export().is_empty());
        assert_eq!(tree.export_value(), json!([]));
    }

    #[test]
    fn nested_children_stay_label_ordered() {
        let tree = PathTree::from_paths(["a/z", "a/b", "a/m"]).unwrap();
        let records = tree.export();
        let inner: Vec<&str> = records[0]
            .children
            .iter()
            .map(|r| r.data.as_str())
            .collect();
        assert_eq!(inner, vec!["b", "m", "z"]);
    }
}

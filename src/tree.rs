//! PathTree: ordered tree built from flat path strings.
//!
//! Construction is all-or-nothing: a [`TreeSource`] names exactly one input
//! form, and validation failures abort before any node is created. The
//! returned tree is read-only; serializers never mutate it.

mod builder;
pub mod node;

use crate::error::TreeError;
use crate::render::export::ExportNode;
use crate::render::{export, pretty};
use self::node::Node;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

const DEFAULT_INDENT_WIDTH: usize = 2;

/// Input to [`PathTree::build`], one discriminant per construction form.
#[derive(Debug, Clone)]
pub enum TreeSource {
    /// Flat path strings.
    Paths(Vec<String>),
    /// Paths with an identifier to merge into the leaf node's metadata.
    TaggedPaths(Vec<(String, Value)>),
    /// An existing tree, taken as-is; clone it first to copy-construct.
    Tree(PathTree),
}

impl TreeSource {
    /// Adapt the optional-argument construction shape: exactly one of
    /// `paths` or `tree` must be supplied.
    pub fn from_parts(
        paths: Option<Vec<String>>,
        tree: Option<PathTree>,
    ) -> Result<TreeSource, TreeError> {
        match (paths, tree) {
            (Some(paths), None) => Ok(TreeSource::Paths(paths)),
            (None, Some(tree)) => Ok(TreeSource::Tree(tree)),
            (Some(_), Some(_)) => Err(TreeError::InvalidConstruction(
                "only one of 'paths' or 'tree' may be supplied".to_string(),
            )),
            (None, None) => Err(TreeError::InvalidConstruction(
                "either 'paths' or 'tree' must be supplied".to_string(),
            )),
        }
    }
}

/// Construction options.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Path segment delimiter.
    pub separator: char,
    /// Metadata applied to every node built by this invocation. A path's
    /// identifier overrides a same-named `"id"` key on its leaf.
    pub metadata: BTreeMap<String, Value>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            separator: '/',
            metadata: BTreeMap::new(),
        }
    }
}

/// A rooted ordered tree of path segments.
///
/// The root node's label is `""` and it exists even for an empty path list.
/// Equality is deep structural equality of the root and all descendants.
#[derive(Debug, Clone)]
pub struct PathTree {
    root: Node,
    separator: char,
}

impl PartialEq for PathTree {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl Default for PathTree {
    fn default() -> Self {
        PathTree {
            root: Node::new("", BTreeMap::new()),
            separator: '/',
        }
    }
}

impl PathTree {
    /// Build a tree from one input source.
    ///
    /// Tagged entries are validated up front; a malformed entry fails the
    /// whole construction with no partial tree.
    pub fn build(source: TreeSource, options: &BuildOptions) -> Result<PathTree, TreeError> {
        let entries = match source {
            TreeSource::Paths(paths) => paths
                .into_iter()
                .map(|path| builder::Entry { path, id: None })
                .collect(),
            TreeSource::TaggedPaths(pairs) => {
                for (index, (_, id)) in pairs.iter().enumerate() {
                    if id.is_null() {
                        return Err(TreeError::InvalidEntry {
                            index,
                            reason: "identifier must not be null".to_string(),
                        });
                    }
                }
                pairs
                    .into_iter()
                    .map(|(path, id)| builder::Entry { path, id: Some(id) })
                    .collect()
            }
            TreeSource::Tree(tree) => return Ok(tree),
        };

        let tree = PathTree {
            root: builder::fold(entries, options),
            separator: options.separator,
        };
        debug!(nodes = tree.node_count(), "built path tree");
        Ok(tree)
    }

    /// Build from flat paths with default options.
    pub fn from_paths<I, S>(paths: I) -> Result<PathTree, TreeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let paths = paths.into_iter().map(Into::into).collect();
        PathTree::build(TreeSource::Paths(paths), &BuildOptions::default())
    }

    /// Build from (path, identifier) pairs with default options.
    pub fn from_tagged_paths<I, S>(pairs: I) -> Result<PathTree, TreeError>
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        let pairs = pairs.into_iter().map(|(p, id)| (p.into(), id)).collect();
        PathTree::build(TreeSource::TaggedPaths(pairs), &BuildOptions::default())
    }

    /// Rebuild a tree from a sequence of exported records.
    pub fn from_export(records: &[Value]) -> Result<PathTree, TreeError> {
        let mut root = Node::new("", BTreeMap::new());
        for record in records {
            root.adopt(Node::from_value(record)?);
        }
        Ok(PathTree {
            root,
            separator: '/',
        })
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Walk the tree along a path's segments, split with the separator the
    /// tree was built with.
    pub fn get(&self, path: &str) -> Option<&Node> {
        let mut curr = &self.root;
        for segment in path.split(self.separator) {
            curr = curr.child(segment)?;
        }
        Some(curr)
    }

    /// Total number of nodes, excluding the root.
    pub fn node_count(&self) -> usize {
        self.root.descendant_count()
    }

    /// Indented text rendering with the default indent width of 2.
    pub fn pretty(&self) -> String {
        self.pretty_indent(DEFAULT_INDENT_WIDTH)
    }

    /// Indented text rendering with an explicit per-level indent width.
    pub fn pretty_indent(&self, width: usize) -> String {
        pretty::render(&self.root, width)
    }

    /// Nested records for a tree-view widget; the root's children form the
    /// top-level sequence.
    pub fn export(&self) -> Vec<ExportNode> {
        export::records(&self.root)
    }

    /// Same shape as [`PathTree::export`], already assembled as a
    /// `serde_json::Value` array.
    pub fn export_value(&self) -> Value {
        export::value(&self.root)
    }
}

//! Pathtree: ordered trees from flat path strings
//!
//! Folds a collection of delimiter-separated path strings into a rooted tree
//! and renders it either as an indented text block or as a nested
//! JSON-compatible structure for a tree-view widget.
//!
//! ```
//! use pathtree::PathTree;
//!
//! let tree = PathTree::from_paths([
//!     "editor/2012-07/31/.classpath",
//!     "editor/2012-07/31/.project",
//! ])?;
//! assert_eq!(
//!     tree.pretty(),
//!     "/\n  editor/\n    2012-07/\n      31/\n        .classpath\n        .project"
//! );
//! # Ok::<(), pathtree::TreeError>(())
//! ```

pub mod error;
pub mod render;
pub mod tree;

pub use error::TreeError;
pub use render::export::ExportNode;
pub use tree::node::Node;
pub use tree::{BuildOptions, PathTree, TreeSource};

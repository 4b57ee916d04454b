//! Serializers over a built tree: indented text and widget-ready records.
//!
//! Both renderers are pure functions of the tree content; neither mutates.

pub mod export;
pub(crate) mod pretty;

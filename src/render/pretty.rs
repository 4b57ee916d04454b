//! Indented text rendering for terminal and log display.

use crate::tree::node::Node;

/// Render a node and its descendants as an indented block.
///
/// Each node renders as `indent * depth + label`, with a trailing `/` iff
/// the node has at least one child. Children appear in ascending label
/// order, one line each, joined with a single newline and no trailing
/// newline. A childless root renders as the empty string: the no-children
/// rule applies to the root's empty label like any other node.
pub(crate) fn render(root: &Node, width: usize) -> String {
    let mut lines = Vec::new();
    push_lines(root, 0, width, &mut lines);
    lines.join("\n")
}

fn push_lines(node: &Node, depth: usize, width: usize, lines: &mut Vec<String>) {
    let suffix = if node.is_leaf() { "" } else { "/" };
    lines.push(format!(
        "{}{}{}",
        " ".repeat(width * depth),
        node.label(),
        suffix
    ));
    for child in node.children() {
        push_lines(child, depth + 1, width, lines);
    }
}

/// Assignment extraction.
///
/// Only simple identifier targets produce records; attribute, subscript,
/// and tuple-unpacking targets are silently ignored, as are annotated
/// assignments (`x: int = 1`), which are declarations rather than the
/// simple statements collected here.
use tree_sitter::Node;

use super::super::base::{BaseExtractor, VariableRecord};
use super::resolve;

/// Build a record for an `assignment` node, when it qualifies.
///
/// Chained assignments (`a = b = 1`) nest on the right-hand side; the
/// traversal's descent picks up the inner targets in source order.
pub(crate) fn extract_assignment(base: &BaseExtractor, node: &Node) -> Option<VariableRecord> {
    if node.child_by_field_name("type").is_some() {
        return None;
    }
    let left = node.child_by_field_name("left")?;
    if left.kind() != "identifier" {
        return None;
    }
    let right = node.child_by_field_name("right")?;
    Some(VariableRecord {
        name: base.get_node_text(&left),
        value: resolve::summarize_value(base, &right),
    })
}

/// Function and method extraction.
use tree_sitter::Node;

use super::super::base::FunctionRecord;
use super::{decorators, docstrings, signatures, PythonExtractor};

/// Build a record from a function definition node. Used both for
/// top-level functions (via the traversal) and for methods (via the
/// class extractor).
pub(crate) fn extract_function(
    extractor: &PythonExtractor,
    node: &Node,
    is_async: bool,
) -> FunctionRecord {
    let base = extractor.base();

    let name = node
        .child_by_field_name("name")
        .map(|n| base.get_node_text(&n))
        .unwrap_or_else(|| "Anonymous".to_string());

    let args = node
        .child_by_field_name("parameters")
        .map(|parameters| signatures::extract_arguments(base, &parameters))
        .unwrap_or_default();

    let comment = node
        .child_by_field_name("body")
        .and_then(|body| docstrings::extract_docstring(base, &body));

    FunctionRecord {
        name,
        decorators: decorators::extract_decorators(base, node),
        args,
        is_async,
        comment,
        code: extractor.encoded_code(node),
    }
}

/// Docstring detection.
///
/// A declaration body qualifies iff its first statement is a bare
/// expression statement holding a plain string literal; the literal's
/// inner text is attached verbatim. Purely structural: no comment-syntax
/// scanning, no markup parsing.
use tree_sitter::Node;

use super::super::base::BaseExtractor;
use super::resolve;

/// Docstring of a class or function body, if the leading statement is one.
pub(crate) fn extract_docstring(base: &BaseExtractor, body: &Node) -> Option<String> {
    let first = body.named_child(0)?;
    if first.kind() != "expression_statement" {
        return None;
    }
    let expression = first.named_child(0)?;
    resolve::string_literal_value(base, &expression)
}

/// Decorator extraction.
///
/// Each decorator reduces to a resolved name; call-form decorators
/// (`@lru_cache(maxsize=128)`) keep the callee and discard the call
/// arguments.
use tree_sitter::Node;

use super::super::base::BaseExtractor;
use super::resolve;

/// Decorator names for a definition node, in source order.
///
/// A decorated definition hangs under a `decorated_definition` wrapper;
/// undecorated nodes yield an empty list.
pub(crate) fn extract_decorators(base: &BaseExtractor, node: &Node) -> Vec<String> {
    let mut decorators = Vec::new();

    let Some(wrapper) = node.parent().filter(|p| p.kind() == "decorated_definition") else {
        return decorators;
    };

    let mut cursor = wrapper.walk();
    for child in wrapper.children(&mut cursor) {
        if child.kind() != "decorator" {
            continue;
        }
        // decorator: "@" expression
        let Some(expression) = child.named_child(0) else {
            continue;
        };
        let target = if expression.kind() == "call" {
            expression.child_by_field_name("function")
        } else {
            Some(expression)
        };
        if let Some(target) = target {
            decorators.push(resolve::resolve_name(base, &target));
        }
    }

    decorators
}

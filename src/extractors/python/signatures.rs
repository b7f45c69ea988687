/// Parameter extraction.
///
/// Builds the ordered argument sequence for a function or method:
/// positional parameters first, then the single vararg if any, then
/// keyword-only parameters, then the single kwarg if any. The
/// keyword-only region starts after `*args` or a bare `*` separator.
use tree_sitter::Node;

use super::super::base::{ArgumentKind, ArgumentRecord, BaseExtractor};
use super::resolve;

/// Whether a definition node is an `async def`.
pub(crate) fn is_async_definition(node: &Node) -> bool {
    if node.kind() == "async_function_definition" {
        return true;
    }
    let mut cursor = node.walk();
    let result = node.children(&mut cursor).any(|child| child.kind() == "async");
    result
}

/// Extract the argument records from a `parameters` node.
pub(crate) fn extract_arguments(base: &BaseExtractor, parameters: &Node) -> Vec<ArgumentRecord> {
    let mut args = Vec::new();
    let mut keyword_only = false;

    let mut cursor = parameters.walk();
    for child in parameters.named_children(&mut cursor) {
        match child.kind() {
            "identifier" => {
                args.push(plain(base.get_node_text(&child), keyword_only, None));
            }
            "typed_parameter" => {
                // `name: type`, or an annotated splat (`*args: T`) whose
                // annotation is deliberately not surfaced.
                let Some(inner) = child.named_child(0) else {
                    continue;
                };
                match inner.kind() {
                    "identifier" => {
                        let annotation = child
                            .child_by_field_name("type")
                            .map(|t| annotation_of(base, &t));
                        args.push(plain(base.get_node_text(&inner), keyword_only, annotation));
                    }
                    "list_splat_pattern" => {
                        push_splat(base, &inner, ArgumentKind::Vararg, &mut args);
                        keyword_only = true;
                    }
                    "dictionary_splat_pattern" => {
                        push_splat(base, &inner, ArgumentKind::Kwarg, &mut args);
                    }
                    _ => {}
                }
            }
            "default_parameter" => {
                if let Some(name) = named_identifier(&child) {
                    args.push(plain(base.get_node_text(&name), keyword_only, None));
                }
            }
            "typed_default_parameter" => {
                // `name: type = default`
                let annotation = child
                    .child_by_field_name("type")
                    .map(|t| annotation_of(base, &t));
                if let Some(name) = named_identifier(&child) {
                    args.push(plain(base.get_node_text(&name), keyword_only, annotation));
                }
            }
            "list_splat_pattern" => {
                push_splat(base, &child, ArgumentKind::Vararg, &mut args);
                keyword_only = true;
            }
            "dictionary_splat_pattern" => {
                push_splat(base, &child, ArgumentKind::Kwarg, &mut args);
            }
            // Bare `*`: everything after it is keyword-only.
            "keyword_separator" => keyword_only = true,
            // `/` closes the positional-only region; those stay positional.
            "positional_separator" => {}
            _ => {}
        }
    }

    args
}

fn plain(name: String, keyword_only: bool, annotation: Option<String>) -> ArgumentRecord {
    let kind = if keyword_only {
        ArgumentKind::KeywordOnly
    } else {
        ArgumentKind::Positional
    };
    ArgumentRecord {
        name,
        kind,
        annotation,
    }
}

fn push_splat(
    base: &BaseExtractor,
    pattern: &Node,
    kind: ArgumentKind,
    args: &mut Vec<ArgumentRecord>,
) {
    if let Some(name) = pattern
        .named_child(0)
        .filter(|n| n.kind() == "identifier")
    {
        args.push(ArgumentRecord {
            name: base.get_node_text(&name),
            kind,
            annotation: None,
        });
    }
}

/// The annotation expression sits inside a `type` wrapper node.
fn annotation_of(base: &BaseExtractor, type_node: &Node) -> String {
    match type_node.named_child(0) {
        Some(expression) => resolve::resolve_name(base, &expression),
        None => resolve::UNKNOWN.to_string(),
    }
}

fn named_identifier<'tree>(parameter: &Node<'tree>) -> Option<Node<'tree>> {
    parameter
        .child_by_field_name("name")
        .filter(|n| n.kind() == "identifier")
}

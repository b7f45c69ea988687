/// Class extraction.
///
/// Builds a ClassRecord from a `class_definition` node: resolved bases,
/// decorators, docstring, and the direct members of the class body.
/// Methods are the body's synchronous function statements only; async
/// definitions are not part of the output shape at all.
use tree_sitter::Node;

use super::super::ancestry::AncestryIndex;
use super::super::base::{BaseExtractor, ClassRecord, FunctionRecord, VariableRecord};
use super::{assignments, decorators, docstrings, functions, resolve, signatures, PythonExtractor};

pub(crate) fn extract_class(
    extractor: &PythonExtractor,
    node: &Node,
    index: &AncestryIndex,
) -> ClassRecord {
    let base = extractor.base();

    let name = node
        .child_by_field_name("name")
        .map(|n| base.get_node_text(&n))
        .unwrap_or_else(|| "Anonymous".to_string());

    let bases = node
        .child_by_field_name("superclasses")
        .map(|superclasses| extract_bases(base, &superclasses))
        .unwrap_or_default();

    let comment = node
        .child_by_field_name("body")
        .and_then(|body| docstrings::extract_docstring(base, &body));

    let mut methods = Vec::new();
    let mut class_variables = Vec::new();
    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for child in body.named_children(&mut cursor) {
            collect_member(extractor, node, &child, index, &mut methods, &mut class_variables);
        }
    }

    ClassRecord {
        name,
        bases,
        decorators: decorators::extract_decorators(base, node),
        comment,
        methods,
        class_variables,
        code: extractor.encoded_code(node),
    }
}

/// Classify one direct statement of the class body.
fn collect_member(
    extractor: &PythonExtractor,
    class_node: &Node,
    child: &Node,
    index: &AncestryIndex,
    methods: &mut Vec<FunctionRecord>,
    class_variables: &mut Vec<VariableRecord>,
) {
    match child.kind() {
        "function_definition" | "async_function_definition" => {
            // Async members are dropped from the output entirely.
            if signatures::is_async_definition(child) {
                return;
            }
            if index.is_direct_member(class_node, child) {
                methods.push(functions::extract_function(extractor, child, false));
            }
        }
        "decorated_definition" => {
            if let Some(definition) = child.child_by_field_name("definition") {
                collect_member(
                    extractor,
                    class_node,
                    &definition,
                    index,
                    methods,
                    class_variables,
                );
            }
        }
        "expression_statement" => {
            if let Some(expression) = child.named_child(0) {
                if expression.kind() == "assignment" {
                    if let Some(record) = assignments::extract_assignment(extractor.base(), &expression)
                    {
                        class_variables.push(record);
                    }
                }
            }
        }
        _ => {}
    }
}

/// Base references from the `superclasses` argument list. Keyword
/// arguments (`metaclass=...`) are not bases.
fn extract_bases(base: &BaseExtractor, superclasses: &Node) -> Vec<String> {
    let mut bases = Vec::new();
    let mut cursor = superclasses.walk();
    for child in superclasses.named_children(&mut cursor) {
        if matches!(child.kind(), "keyword_argument" | "comment") {
            continue;
        }
        bases.push(resolve::resolve_name(base, &child));
    }
    bases
}

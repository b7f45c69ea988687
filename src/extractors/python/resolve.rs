/// Name and value rendering for small expression subtrees.
///
/// Both algorithms are total: unsupported expression shapes degrade to
/// sentinel strings instead of erroring, preserving forward progress over
/// completeness.
use tree_sitter::Node;

use super::super::base::BaseExtractor;

/// Sentinel for unresolvable name expressions.
pub(crate) const UNKNOWN: &str = "unknown";
/// Sentinel for unsummarizable value expressions.
pub(crate) const ELIDED: &str = "...";

/// Resolve a name-position expression (type annotation, base class,
/// decorator target) to a compact dotted display string.
pub(crate) fn resolve_name(base: &BaseExtractor, node: &Node) -> String {
    match node.kind() {
        "identifier" => base.get_node_text(node),
        "attribute" => {
            match (
                node.child_by_field_name("object"),
                node.child_by_field_name("attribute"),
            ) {
                (Some(object), Some(attribute)) => format!(
                    "{}.{}",
                    resolve_name(base, &object),
                    base.get_node_text(&attribute)
                ),
                _ => UNKNOWN.to_string(),
            }
        }
        "subscript" => {
            let Some(value) = node.child_by_field_name("value") else {
                return UNKNOWN.to_string();
            };
            let mut cursor = node.walk();
            let indexes: Vec<Node> = node.children_by_field_name("subscript", &mut cursor).collect();
            // `X[a, b]` keeps the container name but not the tuple.
            let index = match indexes.as_slice() {
                [single] => resolve_name(base, single),
                _ => UNKNOWN.to_string(),
            };
            format!("{}[{}]", resolve_name(base, &value), index)
        }
        "integer" | "float" | "true" | "false" | "none" => base.get_node_text(node),
        "string" => {
            string_literal_value(base, node).unwrap_or_else(|| UNKNOWN.to_string())
        }
        _ => UNKNOWN.to_string(),
    }
}

/// Summarize an assignment right-hand side. Deliberately lossy:
/// containers and calls collapse to fixed sentinels to keep output
/// compact.
pub(crate) fn summarize_value(base: &BaseExtractor, node: &Node) -> String {
    match node.kind() {
        "identifier" => base.get_node_text(node),
        "integer" | "float" | "true" | "false" | "none" => base.get_node_text(node),
        "string" => string_literal_value(base, node).unwrap_or_else(|| ELIDED.to_string()),
        "list" => "[...]".to_string(),
        "dictionary" => "{...}".to_string(),
        "call" => summarize_call(base, node),
        // Chained assignment: `a = b = 1` nests on the right; every
        // target summarizes the innermost value.
        "assignment" => match node.child_by_field_name("right") {
            Some(right) => summarize_value(base, &right),
            None => ELIDED.to_string(),
        },
        _ => ELIDED.to_string(),
    }
}

fn summarize_call(base: &BaseExtractor, node: &Node) -> String {
    match node.child_by_field_name("function") {
        Some(function) if function.kind() == "identifier" => {
            format!("{}(...)", base.get_node_text(&function))
        }
        Some(function) if function.kind() == "attribute" => {
            match (
                function.child_by_field_name("object"),
                function.child_by_field_name("attribute"),
            ) {
                (Some(object), Some(attribute)) => format!(
                    "{}.{}(...)",
                    resolve_name(base, &object),
                    base.get_node_text(&attribute)
                ),
                _ => ELIDED.to_string(),
            }
        }
        _ => ELIDED.to_string(),
    }
}

/// Inner text of a plain string literal: delimiters and prefix stripped,
/// escape sequences left as written. `None` for f-strings and bytes
/// literals, which are not plain text constants.
pub(crate) fn string_literal_value(base: &BaseExtractor, node: &Node) -> Option<String> {
    if node.kind() != "string" {
        return None;
    }
    let mut value = String::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "string_start" => {
                let prefix = base.get_node_text(&child).to_ascii_lowercase();
                if prefix.contains('f') || prefix.contains('b') {
                    return None;
                }
            }
            "string_content" => value.push_str(&base.get_node_text(&child)),
            "interpolation" => return None,
            _ => {}
        }
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language;

    /// Right-hand side of the first assignment in `source`.
    fn with_value<R>(source: &str, check: impl FnOnce(&BaseExtractor, Node) -> R) -> R {
        let mut parser = language::python_parser().unwrap();
        let tree = parser.parse(source, None).unwrap();
        let base = BaseExtractor::new(source.to_string());
        let statement = tree.root_node().named_child(0).unwrap();
        let assignment = statement.named_child(0).unwrap();
        assert_eq!(assignment.kind(), "assignment");
        let right = assignment.child_by_field_name("right").unwrap();
        check(&base, right)
    }

    fn summarized(source: &str) -> String {
        with_value(source, |base, node| summarize_value(base, &node))
    }

    fn resolved(source: &str) -> String {
        with_value(source, |base, node| resolve_name(base, &node))
    }

    #[test]
    fn constants_and_identifiers_pass_through() {
        assert_eq!(summarized("x = 42\n"), "42");
        assert_eq!(summarized("x = 1.5\n"), "1.5");
        assert_eq!(summarized("x = True\n"), "True");
        assert_eq!(summarized("x = None\n"), "None");
        assert_eq!(summarized("x = \"hello\"\n"), "hello");
        assert_eq!(summarized("x = other\n"), "other");
    }

    #[test]
    fn containers_collapse_to_sentinels() {
        assert_eq!(summarized("x = [1, 2, 3]\n"), "[...]");
        assert_eq!(summarized("x = {\"k\": 1}\n"), "{...}");
    }

    #[test]
    fn calls_keep_only_the_callee() {
        assert_eq!(summarized("x = make()\n"), "make(...)");
        assert_eq!(summarized("x = os.path.join(\"a\", \"b\")\n"), "os.path.join(...)");
        assert_eq!(summarized("x = factory()()\n"), "...");
    }

    #[test]
    fn other_expressions_collapse_to_the_generic_sentinel() {
        assert_eq!(summarized("x = 1 + 2\n"), "...");
        assert_eq!(summarized("x = (a, b)\n"), "...");
        assert_eq!(summarized("x = f\"hi {name}\"\n"), "...");
    }

    #[test]
    fn name_resolution_builds_dotted_paths() {
        assert_eq!(resolved("x = name\n"), "name");
        assert_eq!(resolved("x = a.b.c\n"), "a.b.c");
        assert_eq!(resolved("x = Optional[int]\n"), "Optional[int]");
        assert_eq!(resolved("x = typing.Dict[str]\n"), "typing.Dict[str]");
        // Multi-element subscripts lose the tuple, not the container.
        assert_eq!(resolved("x = Dict[str, int]\n"), "Dict[unknown]");
        assert_eq!(resolved("x = lambda: 1\n"), "unknown");
        assert_eq!(resolved("x = 3\n"), "3");
        assert_eq!(resolved("x = \"literal\"\n"), "literal");
    }
}

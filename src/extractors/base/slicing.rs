// Source slicing: map a captured line span back to the exact original
// substring and encode it for embedding in the output document.
//
// Spans are captured from the node during the traversal pass that created
// the record; records are never re-matched to nodes by name afterwards.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::types::Span;

/// Exact substring covering `span`, line terminators preserved.
///
/// Lines are 1-based and inclusive on both ends, the convention
/// tree-sitter reports positions in. A span reaching past the end of the
/// file clamps to what exists.
pub fn slice_lines(content: &str, span: Span) -> String {
    content
        .split_inclusive('\n')
        .skip(span.start_line.saturating_sub(1))
        .take(span.end_line.saturating_sub(span.start_line) + 1)
        .collect()
}

/// Standard base64 of a captured slice.
pub fn encode(slice: &str) -> String {
    STANDARD.encode(slice.as_bytes())
}

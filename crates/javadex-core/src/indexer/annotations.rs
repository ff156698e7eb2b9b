//! Annotation extraction.
//!
//! Two tiers, tried in order. The structural pass reads annotation nodes off
//! the declaration and its modifier group. When it finds nothing, the
//! textual pass scans the already-built signature for leading `@` tokens,
//! which catches annotations the grammar fails to surface as clean nodes.

use tree_sitter::Node;

use crate::indexer::ast::{children, node_text, normalize_whitespace, NAME};

/// Tokens that end the leading annotation run of a signature.
const ANNOTATION_STOP_TOKENS: &[&str] = &[
    "public",
    "private",
    "protected",
    "class",
    "interface",
    "enum",
    "record",
    "@interface",
    "static",
    "final",
    "abstract",
];

/// Structural tier first, textual tier over `signature_text` second.
pub fn extract_annotations(source: &[u8], node: Node, signature_text: &str) -> Vec<String> {
    let structural = annotations_from_nodes(source, node);
    if !structural.is_empty() {
        return structural;
    }
    annotations_from_signature(signature_text)
}

/// Annotation nodes among the direct children of `node` and of its
/// `modifiers` child, de-duplicated by exact text.
pub fn annotations_from_nodes(source: &[u8], node: Node) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for child in children(node) {
        if child.kind() == "modifiers" {
            for mod_child in children(child) {
                push_annotation(source, mod_child, &mut found);
            }
        } else {
            push_annotation(source, child, &mut found);
        }
    }
    found
}

fn push_annotation(source: &[u8], node: Node, found: &mut Vec<String>) {
    let text = match node.kind() {
        "marker_annotation" => match NAME.find(node) {
            Some(name) => format!("@{}", node_text(source, name)),
            None => node_text(source, node).trim().to_string(),
        },
        "annotation" => normalize_whitespace(&node_text(source, node)),
        _ => return,
    };
    if !text.is_empty() && !found.contains(&text) {
        found.push(text);
    }
}

/// Greedy scan of leading `@`-tokens in a whitespace-normalized signature.
///
/// The run ends at the first token that is not an annotation, so parameter
/// annotations further along are never collected. An annotation whose
/// argument list was split by whitespace is re-joined until the token
/// carrying the closing parenthesis.
pub fn annotations_from_signature(signature_text: &str) -> Vec<String> {
    let mut annotations = Vec::new();
    let mut tokens = signature_text.split_whitespace();
    while let Some(token) = tokens.next() {
        if ANNOTATION_STOP_TOKENS.contains(&token) {
            break;
        }
        if !token.starts_with('@') {
            break;
        }
        if token.contains('(') && !token.contains(')') {
            let mut full = token.to_string();
            for next in tokens.by_ref() {
                full.push(' ');
                full.push_str(next);
                if next.contains(')') {
                    break;
                }
            }
            annotations.push(full);
        } else {
            annotations.push(token.to_string());
        }
    }
    annotations
}

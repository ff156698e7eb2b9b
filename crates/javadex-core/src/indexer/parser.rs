//! Java parsing wrapper over the native tree-sitter grammar.

use tree_sitter::{Node, Tree};

use crate::errors::{JavadexError, JavadexResult};
use crate::indexer::ast::{children, first_named_child, node_text, start_line, strip_prefix_keyword};
use crate::models::ParseDiagnostic;

/// Parse raw Java source bytes into a syntax tree.
///
/// Malformed input still yields a tree; error regions appear as `ERROR`
/// and `MISSING` nodes rather than as a failure here.
pub fn parse_java(source: &[u8]) -> JavadexResult<Tree> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&tree_sitter_java::LANGUAGE.into())
        .map_err(|e| JavadexError::Parse(format!("Failed to set language: {e}")))?;
    parser
        .parse(source, None)
        .ok_or_else(|| JavadexError::Parse("Parser returned no tree".to_string()))
}

/// Package declared at the top of the compilation unit, or `""`.
pub fn package_name(root: Node, source: &[u8]) -> String {
    let Some(pkg) = first_named_child(root, &["package_declaration"]) else {
        return String::new();
    };
    let text = node_text(source, pkg);
    strip_prefix_keyword(&text, "package")
        .trim_end_matches(';')
        .trim()
        .to_string()
}

/// One diagnostic per error-shaped node, in document order.
pub fn collect_diagnostics(root: Node) -> Vec<ParseDiagnostic> {
    let mut diagnostics = Vec::new();
    walk_errors(root, &mut diagnostics);
    diagnostics
}

fn walk_errors(node: Node, out: &mut Vec<ParseDiagnostic>) {
    if node.is_error() {
        out.push(ParseDiagnostic::error("Parse error", Some(start_line(node))));
    } else if node.is_missing() {
        out.push(ParseDiagnostic::error(
            format!("Missing {}", node.kind()),
            Some(start_line(node)),
        ));
    }
    for child in children(node) {
        walk_errors(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_name_extracted() {
        let src = b"package com.example.docs;\n\nclass A {}\n";
        let tree = parse_java(src).unwrap();
        assert_eq!(package_name(tree.root_node(), src), "com.example.docs");
    }

    #[test]
    fn missing_package_is_empty() {
        let src = b"class A {}\n";
        let tree = parse_java(src).unwrap();
        assert_eq!(package_name(tree.root_node(), src), "");
    }

    #[test]
    fn clean_source_has_no_diagnostics() {
        let src = b"class A { void m() {} }\n";
        let tree = parse_java(src).unwrap();
        assert!(collect_diagnostics(tree.root_node()).is_empty());
    }

    #[test]
    fn garbage_is_reported() {
        let src = b"class A {\n  void m() {}\n  ### @@ ;\n}\n";
        let tree = parse_java(src).unwrap();
        let diagnostics = collect_diagnostics(tree.root_node());
        assert!(!diagnostics.is_empty());
        assert!(diagnostics.iter().all(|d| d.line.is_some()));
    }
}

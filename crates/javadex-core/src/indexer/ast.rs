//! Generic helpers over the tree-sitter syntax tree.
//!
//! The Java grammar exposes some properties as named fields and others only
//! as plain children of a given kind, and the split shifts between grammar
//! releases. Every structural lookup goes through [`Lookup`], which tries the
//! field first and falls back to a typed scan.

use tree_sitter::Node;

/// How to find a child when the named field is absent.
#[derive(Clone, Copy, Debug)]
pub enum Fallback {
    /// First named direct child whose kind is in the list.
    Children(&'static [&'static str]),
    /// First named descendant (self included) of the given kind.
    Descendant(&'static str),
    Nothing,
}

/// A field-then-fallback accessor for one property of a node.
#[derive(Clone, Copy, Debug)]
pub struct Lookup {
    pub field: &'static str,
    pub fallback: Fallback,
}

impl Lookup {
    pub const fn new(field: &'static str, fallback: Fallback) -> Self {
        Self { field, fallback }
    }

    pub fn find<'t>(&self, node: Node<'t>) -> Option<Node<'t>> {
        if let Some(found) = node.child_by_field_name(self.field) {
            return Some(found);
        }
        match self.fallback {
            Fallback::Children(kinds) => first_named_child(node, kinds),
            Fallback::Descendant(kind) => first_named_descendant(node, kind),
            Fallback::Nothing => None,
        }
    }
}

pub const NAME: Lookup = Lookup::new("name", Fallback::Descendant("identifier"));
pub const MODIFIERS: Lookup = Lookup::new("modifiers", Fallback::Children(&["modifiers"]));
pub const BODY: Lookup = Lookup::new(
    "body",
    Fallback::Children(&[
        "class_body",
        "interface_body",
        "enum_body",
        "annotation_type_body",
    ]),
);
pub const TYPE: Lookup = Lookup::new("type", Fallback::Nothing);
pub const RETURN_TYPE: Lookup = Lookup::new(
    "type",
    Fallback::Children(&[
        "type",
        "void_type",
        "integral_type",
        "floating_point_type",
        "boolean_type",
        "type_identifier",
        "scoped_type_identifier",
        "generic_type",
        "array_type",
    ]),
);
pub const TYPE_PARAMETERS: Lookup =
    Lookup::new("type_parameters", Fallback::Children(&["type_parameters"]));
pub const PARAMETERS: Lookup =
    Lookup::new("parameters", Fallback::Children(&["formal_parameters"]));
pub const SUPERCLASS: Lookup = Lookup::new("superclass", Fallback::Children(&["superclass"]));
pub const SUPER_INTERFACES: Lookup = Lookup::new(
    "interfaces",
    Fallback::Children(&["super_interfaces", "interfaces", "implements_interfaces"]),
);
pub const EXTENDS_INTERFACES: Lookup =
    Lookup::new("extends_interfaces", Fallback::Children(&["extends_interfaces"]));
pub const THROWS: Lookup = Lookup::new("throws", Fallback::Children(&["throws"]));

// ---------------------------------------------------------------------------
// Node traversal
// ---------------------------------------------------------------------------

/// Source text covered by `node`, decoded lossily.
pub fn node_text(source: &[u8], node: Node) -> String {
    let end = node.end_byte().min(source.len());
    let start = node.start_byte().min(end);
    String::from_utf8_lossy(&source[start..end]).into_owned()
}

/// 1-based first line of `node`.
pub fn start_line(node: Node) -> usize {
    node.start_position().row + 1
}

/// 1-based last line of `node`.
pub fn end_line(node: Node) -> usize {
    node.end_position().row + 1
}

pub fn first_named_child<'t>(node: Node<'t>, kinds: &[&str]) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|child| kinds.contains(&child.kind()));
    found
}

pub fn first_named_descendant<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    if node.kind() == kind {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.named_children(&mut cursor).collect();
    children
        .into_iter()
        .find_map(|child| first_named_descendant(child, kind))
}

pub fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    let children = node.named_children(&mut cursor).collect();
    children
}

pub fn children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    let children = node.children(&mut cursor).collect();
    children
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Keyword modifiers of a declaration, annotations excluded.
pub fn extract_modifiers(source: &[u8], node: Node) -> Vec<String> {
    let Some(mods) = MODIFIERS.find(node) else {
        return Vec::new();
    };
    children(mods)
        .into_iter()
        .map(|child| node_text(source, child).trim().to_string())
        .filter(|text| !text.is_empty() && !text.starts_with('@'))
        .collect()
}

/// 1-based line of the modifier group, which is where documentation is
/// anchored when annotations precede the declaration keyword.
pub fn modifier_anchor_line(node: Node) -> Option<usize> {
    MODIFIERS.find(node).map(start_line)
}

// ---------------------------------------------------------------------------
// Text helpers
// ---------------------------------------------------------------------------

pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split on commas that are not nested inside `<...>`.
pub fn split_top_level_commas(text: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    for ch in text.chars() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                let segment = current.trim();
                if !segment.is_empty() {
                    parts.push(segment.to_string());
                }
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push(ch);
    }
    let tail = current.trim();
    if !tail.is_empty() {
        parts.push(tail.to_string());
    }
    parts
}

/// Drop a leading keyword (`extends`, `throws`, ...) followed by whitespace.
pub fn strip_prefix_keyword(text: &str, keyword: &str) -> String {
    let text = text.trim();
    if text == keyword {
        return String::new();
    }
    match text.strip_prefix(keyword) {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim().to_string(),
        _ => text.to_string(),
    }
}

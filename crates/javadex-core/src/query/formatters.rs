//! Reduced projections of an `IndexResult` for token-constrained callers.
//!
//! `ultra` keeps a file outline with members collapsed to one string each,
//! `compact` keeps member objects with signature and documentation first
//! line, and `full` is the untouched index result. Only top-level classes
//! are projected.

use serde::Serialize;

use crate::errors::JavadexResult;
use crate::models::{
    ClassEntry, FieldEntry, FormatOptions, IndexResult, JavadocBlock, MethodEntry, OutputMode, Scope,
};
use crate::query::tokenizer::estimate_tokens;

const ACCESS_MODIFIERS: &[&str] = &["public", "protected", "private"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileOverview<C> {
    /// File name without directories.
    pub file: String,
    pub lines: usize,
    pub classes: Vec<C>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UltraClass {
    pub name: String,
    pub annotations: Vec<String>,
    pub range: [usize; 2],
    pub methods: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompactClass {
    pub name: String,
    pub annotations: Vec<String>,
    pub range: [usize; 2],
    pub doc: String,
    pub methods: Vec<CompactMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<CompactMember>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompactMember {
    pub id: String,
    pub name: String,
    pub sig: String,
    pub range: [usize; 2],
    pub doc: String,
}

/// One of the three output shapes, serialized without a wrapper tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Projection {
    Ultra(FileOverview<UltraClass>),
    Compact(FileOverview<CompactClass>),
    Full(IndexResult),
}

impl Projection {
    pub fn to_json(&self) -> JavadexResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Approximate token cost of the pretty-printed projection.
    pub fn estimated_tokens(&self) -> JavadexResult<usize> {
        Ok(estimate_tokens(&self.to_json()?))
    }
}

pub fn project(result: &IndexResult, options: &FormatOptions) -> Projection {
    match options.mode {
        OutputMode::Ultra => Projection::Ultra(format_ultra(result, options)),
        OutputMode::Compact => Projection::Compact(format_compact(result, options)),
        OutputMode::Full => Projection::Full(result.clone()),
    }
}

pub fn format_ultra(result: &IndexResult, options: &FormatOptions) -> FileOverview<UltraClass> {
    let classes = result
        .classes
        .iter()
        .map(|class| UltraClass {
            name: class.name.clone(),
            annotations: class.annotations.clone(),
            range: documented_range(&class.javadoc, class.start_line, class.end_line),
            methods: scoped_methods(class, options.scope).map(ultra_method).collect(),
            fields: options.with_fields.then(|| {
                scoped_fields(class, options.scope)
                    .map(|f| format!("{} {}", f.type_text, f.name))
                    .collect()
            }),
        })
        .collect();
    overview(result, classes)
}

pub fn format_compact(result: &IndexResult, options: &FormatOptions) -> FileOverview<CompactClass> {
    let classes = result
        .classes
        .iter()
        .map(|class| CompactClass {
            name: class.name.clone(),
            annotations: class.annotations.clone(),
            range: documented_range(&class.javadoc, class.start_line, class.end_line),
            doc: doc_first_line(&class.javadoc),
            methods: scoped_methods(class, options.scope).map(compact_method).collect(),
            fields: options
                .with_fields
                .then(|| scoped_fields(class, options.scope).map(compact_field).collect()),
        })
        .collect();
    overview(result, classes)
}

fn overview<C>(result: &IndexResult, classes: Vec<C>) -> FileOverview<C> {
    FileOverview {
        file: file_name(&result.file_path),
        lines: result.line_count,
        classes,
    }
}

fn file_name(file_path: &str) -> String {
    file_path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_path)
        .to_string()
}

fn ultra_method(method: &MethodEntry) -> String {
    let types: Vec<&str> = method.params.iter().map(|p| p.type_text.as_str()).collect();
    let [start, end] = documented_range(&method.javadoc, method.start_line, method.end_line);
    format!("{}({}) [{start}-{end}]", method.name, types.join(", "))
}

fn compact_method(method: &MethodEntry) -> CompactMember {
    CompactMember {
        id: method.symbol_id.clone(),
        name: method.name.clone(),
        sig: method.signature_text.clone(),
        range: documented_range(&method.javadoc, method.start_line, method.end_line),
        doc: doc_first_line(&method.javadoc),
    }
}

fn compact_field(field: &FieldEntry) -> CompactMember {
    let mut parts: Vec<&str> = field.modifiers.iter().map(String::as_str).collect();
    parts.push(&field.type_text);
    parts.push(&field.name);
    CompactMember {
        id: field.symbol_id.clone(),
        name: field.name.clone(),
        sig: parts.join(" ").trim().to_string(),
        range: documented_range(&field.javadoc, field.start_line, field.end_line),
        doc: doc_lines(&field.javadoc).join("\n"),
    }
}

// ---------------------------------------------------------------------------
// Scope filtering
// ---------------------------------------------------------------------------

/// Whether a member with `modifiers` is visible under `scope`. A member
/// without an access modifier counts as `protected`.
pub fn in_scope(modifiers: &[String], scope: Scope) -> bool {
    if scope == Scope::All {
        return true;
    }
    let access = modifiers
        .iter()
        .find(|m| ACCESS_MODIFIERS.contains(&m.as_str()))
        .map(String::as_str);
    let level = match access {
        Some("public") => Scope::Public,
        Some("private") => Scope::Private,
        _ => Scope::Protected,
    };
    level <= scope
}

fn scoped_methods(class: &ClassEntry, scope: Scope) -> impl Iterator<Item = &MethodEntry> {
    class.methods.iter().filter(move |m| in_scope(&m.modifiers, scope))
}

fn scoped_fields(class: &ClassEntry, scope: Scope) -> impl Iterator<Item = &FieldEntry> {
    class.fields.iter().filter(move |f| in_scope(&f.modifiers, scope))
}

// ---------------------------------------------------------------------------
// Documentation helpers
// ---------------------------------------------------------------------------

/// `[start, end]`, widened to begin at the documentation comment.
fn documented_range(javadoc: &JavadocBlock, start: usize, end: usize) -> [usize; 2] {
    let start = match (javadoc.present, javadoc.start_line) {
        (true, Some(doc_start)) => doc_start,
        _ => start,
    };
    [start, end]
}

/// Comment text lines with `/**`, `*` and `*/` markers removed, empty lines
/// dropped. Works off the preview, so it is empty unless the index was built
/// with a non-zero preview budget.
fn doc_lines(javadoc: &JavadocBlock) -> Vec<String> {
    if !javadoc.present {
        return Vec::new();
    }
    let Some(preview) = javadoc.preview.as_deref() else {
        return Vec::new();
    };
    preview
        .split('\n')
        .map(|line| {
            line.trim()
                .trim_start_matches(['/', '*'])
                .trim_end_matches(['*', '/'])
                .trim()
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect()
}

fn doc_first_line(javadoc: &JavadocBlock) -> String {
    doc_lines(javadoc).into_iter().next().unwrap_or_default()
}

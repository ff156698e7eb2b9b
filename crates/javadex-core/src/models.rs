//! Shared typed models used across indexing, storage, and query layers.
//!
//! Everything here serializes to the camelCase JSON shape that is written to
//! the cache and handed to host tool layers. Round-tripping a value through
//! serde must reproduce it exactly; the cache relies on that.

use serde::{Deserialize, Serialize};

/// Language tag stamped on every `IndexResult`.
pub const LANGUAGE_JAVA: &str = "java";

// ---------------------------------------------------------------------------
// 1. Index result
// ---------------------------------------------------------------------------

/// One extraction of one file under one set of `IndexOptions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexResult {
    pub file_path: String,
    pub language: String,
    /// SHA-1 hex digest of the raw file bytes; empty when the file was unreadable.
    pub hash: String,
    pub line_count: usize,
    pub classes: Vec<ClassEntry>,
    pub errors: Vec<ParseDiagnostic>,
}

impl IndexResult {
    /// Result for a file that could not be read at all.
    pub fn unreadable(file_path: &str, message: String) -> Self {
        Self {
            file_path: file_path.to_string(),
            language: LANGUAGE_JAVA.to_string(),
            hash: String::new(),
            line_count: 0,
            classes: Vec::new(),
            errors: vec![ParseDiagnostic::error(message, None)],
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Class-like declarations
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

impl ClassKind {
    /// Map a tree-sitter declaration node kind to a class kind.
    pub fn from_node_kind(kind: &str) -> Option<Self> {
        match kind {
            "class_declaration" => Some(Self::Class),
            "interface_declaration" => Some(Self::Interface),
            "enum_declaration" => Some(Self::Enum),
            "record_declaration" => Some(Self::Record),
            "annotation_type_declaration" => Some(Self::Annotation),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Record => "record",
            Self::Annotation => "annotation",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntry {
    pub symbol_id: String,
    pub kind: ClassKind,
    pub name: String,
    pub qualified_name: String,
    pub modifiers: Vec<String>,
    pub annotations: Vec<String>,
    pub extends: Option<String>,
    pub implements: Vec<String>,
    pub start_line: usize,
    pub end_line: usize,
    pub javadoc: JavadocBlock,
    pub signature_text: String,
    pub fields: Vec<FieldEntry>,
    pub constructors: Vec<ConstructorEntry>,
    pub methods: Vec<MethodEntry>,
    pub inner_classes: Vec<ClassEntry>,
}

// ---------------------------------------------------------------------------
// 3. Members
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Field,
    Constructor,
    Method,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Field => "field",
            Self::Constructor => "constructor",
            Self::Method => "method",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldEntry {
    pub symbol_id: String,
    pub kind: MemberKind,
    pub name: String,
    pub type_text: String,
    pub modifiers: Vec<String>,
    pub annotations: Vec<String>,
    /// Span of the individual declarator, not the whole statement.
    pub start_line: usize,
    pub end_line: usize,
    pub javadoc: JavadocBlock,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    pub type_text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorEntry {
    pub symbol_id: String,
    pub kind: MemberKind,
    pub name: String,
    pub modifiers: Vec<String>,
    pub annotations: Vec<String>,
    pub params: Vec<Parameter>,
    pub throws: Vec<String>,
    pub start_line: usize,
    pub end_line: usize,
    pub javadoc: JavadocBlock,
    pub signature_text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodEntry {
    pub symbol_id: String,
    pub kind: MemberKind,
    pub name: String,
    pub return_type_text: String,
    pub modifiers: Vec<String>,
    pub annotations: Vec<String>,
    pub type_params_text: Option<String>,
    pub params: Vec<Parameter>,
    pub throws: Vec<String>,
    pub start_line: usize,
    pub end_line: usize,
    pub javadoc: JavadocBlock,
    pub signature_text: String,
}

// ---------------------------------------------------------------------------
// 4. Documentation blocks and diagnostics
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JavadocBlock {
    pub present: bool,
    pub start_line: Option<usize>,
    pub end_line: Option<usize>,
    pub line_count: usize,
    pub preview: Option<String>,
}

impl JavadocBlock {
    pub fn absent() -> Self {
        Self::default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseDiagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
    /// 1-based line; `None` when the failure is not tied to a position.
    pub line: Option<usize>,
}

impl ParseDiagnostic {
    pub fn error(message: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            message: message.into(),
            line,
        }
    }
}

// ---------------------------------------------------------------------------
// 5. Request options
// ---------------------------------------------------------------------------

/// Options that shape extraction. Serialized canonically to form the
/// secondary cache key, so every field here must affect the result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexOptions {
    pub include_private: bool,
    pub include_fields: bool,
    pub include_inner_classes: bool,
    pub include_constructors: bool,
    /// 0 disables preview computation entirely.
    pub max_javadoc_preview_chars: usize,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            include_private: true,
            include_fields: true,
            include_inner_classes: true,
            include_constructors: true,
            max_javadoc_preview_chars: 0,
        }
    }
}

pub const DEFAULT_RANGE_MAX_CHARS: usize = 20_000;
pub const DEFAULT_DOC_MAX_CHARS: usize = 8_000;
pub const DEFAULT_MAX_RESULTS: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RangeOptions {
    pub include_line_numbers: bool,
    pub max_chars: usize,
}

impl Default for RangeOptions {
    fn default() -> Self {
        Self {
            include_line_numbers: true,
            max_chars: DEFAULT_RANGE_MAX_CHARS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocOptions {
    pub include_line_numbers: bool,
    pub max_chars: usize,
}

impl Default for DocOptions {
    fn default() -> Self {
        Self {
            include_line_numbers: true,
            max_chars: DEFAULT_DOC_MAX_CHARS,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    #[default]
    Any,
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
    Field,
    Constructor,
    Method,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Record => "record",
            Self::Annotation => "annotation",
            Self::Field => "field",
            Self::Constructor => "constructor",
            Self::Method => "method",
        }
    }

    /// Exact kind comparison; `Any` accepts everything.
    pub fn accepts(&self, kind: &str) -> bool {
        matches!(self, Self::Any) || self.as_str() == kind
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FindOptions {
    pub match_kind: MatchKind,
    pub max_results: usize,
    pub case_sensitive: bool,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            match_kind: MatchKind::Any,
            max_results: DEFAULT_MAX_RESULTS,
            case_sensitive: false,
        }
    }
}

/// Modifier-based visibility filter for formatted output.
///
/// `Public` ⊆ `Protected` ⊆ `Private` ⊆ `All`; package-private members
/// are admitted from `Protected` upward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Public,
    Protected,
    Private,
    #[default]
    All,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Ultra,
    Compact,
    Full,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    pub mode: OutputMode,
    pub scope: Scope,
    pub with_fields: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            mode: OutputMode::Ultra,
            scope: Scope::All,
            with_fields: true,
        }
    }
}

// ---------------------------------------------------------------------------
// 6. Query responses
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeResponse {
    pub file_path: String,
    pub start_line: usize,
    pub end_line: usize,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocResponse {
    pub file_path: String,
    pub symbol_id: String,
    pub found: bool,
    pub start_line: Option<usize>,
    pub end_line: Option<usize>,
    pub line_count: usize,
    pub content: String,
}

impl DocResponse {
    pub fn not_found(file_path: &str, symbol_id: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            symbol_id: symbol_id.to_string(),
            found: false,
            start_line: None,
            end_line: None,
            line_count: 0,
            content: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolMatch {
    pub file_path: String,
    pub symbol_id: String,
    pub kind: String,
    /// Own qualified name for classes, `<owner>#<member>` for members.
    pub qualified_name: String,
    pub start_line: usize,
    pub end_line: usize,
    pub signature_text: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindResponse {
    pub root_dir: String,
    pub query: String,
    pub results: Vec<SymbolMatch>,
}

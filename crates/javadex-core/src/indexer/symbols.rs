//! Symbol extraction from a parsed Java compilation unit.
//!
//! Walks the package-scope type declarations and their bodies, producing the
//! owned `ClassEntry` tree. Output is a pure function of the source bytes and
//! the options, so repeated runs over unchanged input are identical down to
//! the symbol identifiers.

use tree_sitter::Node;

use crate::indexer::annotations::extract_annotations;
use crate::indexer::ast::{
    end_line, extract_modifiers, first_named_child, modifier_anchor_line, named_children,
    node_text, normalize_whitespace, split_top_level_commas, start_line, strip_prefix_keyword,
    BODY, EXTENDS_INTERFACES, NAME, PARAMETERS, RETURN_TYPE, SUPERCLASS, SUPER_INTERFACES,
    THROWS, TYPE, TYPE_PARAMETERS,
};
use crate::indexer::javadoc::build_doc_block;
use crate::models::{
    ClassEntry, ClassKind, ConstructorEntry, FieldEntry, IndexOptions, IndexResult, JavadocBlock,
    MemberKind, MethodEntry, Parameter,
};

/// Node kinds that terminate the declaration header for signature text.
const SIGNATURE_BODY_KINDS: &[&str] = &[
    "block",
    "constructor_body",
    "method_body",
    "class_body",
    "interface_body",
    "enum_body",
    "annotation_type_body",
];

const PARAMETER_KINDS: &[&str] = &[
    "formal_parameter",
    "spread_parameter",
    "receiver_parameter",
    "inferred_parameter",
];

const PRIVATE: &str = "private";

// ---------------------------------------------------------------------------
// Symbol identifiers
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolTag {
    Class,
    Field,
    Ctor,
    Method,
}

impl SymbolTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Field => "Field",
            Self::Ctor => "Ctor",
            Self::Method => "Method",
        }
    }
}

/// Deterministic identifier: tag, owning qualified name, kind-specific
/// detail and the literal line span.
pub fn symbol_id(tag: SymbolTag, owner: &str, detail: Option<&str>, start: usize, end: usize) -> String {
    match detail {
        Some(detail) => format!("{}#{owner}#{detail}|start:{start}|end:{end}", tag.as_str()),
        None => format!("{}#{owner}|start:{start}|end:{end}", tag.as_str()),
    }
}

fn callable_detail(name: &str, params: &[Parameter]) -> String {
    let types: Vec<&str> = params.iter().map(|p| p.type_text.as_str()).collect();
    format!("{name}({})", types.join(","))
}

// ---------------------------------------------------------------------------
// Extraction context
// ---------------------------------------------------------------------------

/// Per-file state shared by every extraction step.
pub struct ParseContext<'a> {
    pub source: &'a [u8],
    pub lines: &'a [String],
    pub package_name: &'a str,
    pub options: &'a IndexOptions,
}

impl ParseContext<'_> {
    fn javadoc_for(&self, node: Node) -> JavadocBlock {
        let anchor = modifier_anchor_line(node).unwrap_or_else(|| start_line(node));
        build_doc_block(self.lines, anchor, self.options.max_javadoc_preview_chars)
    }

    fn excluded(&self, modifiers: &[String]) -> bool {
        !self.options.include_private && modifiers.iter().any(|m| m == PRIVATE)
    }
}

pub fn qualified_name(package: &str, outers: &[String], name: &str) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(outers.len() + 2);
    if !package.is_empty() {
        parts.push(package);
    }
    parts.extend(outers.iter().map(String::as_str));
    parts.push(name);
    parts.join(".")
}

/// Whitespace-normalized declaration header, up to the body opening.
pub fn signature_text(node: Node, source: &[u8]) -> String {
    let end = first_named_child(node, SIGNATURE_BODY_KINDS)
        .map(|body| body.start_byte())
        .unwrap_or_else(|| node.end_byte())
        .min(source.len());
    let start = node.start_byte().min(end);
    let text = String::from_utf8_lossy(&source[start..end]);
    let trimmed = text.trim_end().trim_end_matches(['{', ';']);
    normalize_whitespace(trimmed)
}

fn type_text(source: &[u8], node: Option<Node>) -> String {
    node.map(|n| normalize_whitespace(&node_text(source, n)))
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Build the class tree from the package-scope declarations under `root`.
pub fn build_classes(root: Node, ctx: &ParseContext) -> Vec<ClassEntry> {
    named_children(root)
        .into_iter()
        .filter(|child| ClassKind::from_node_kind(child.kind()).is_some())
        .filter_map(|child| parse_class(child, ctx, &[]))
        .collect()
}

// ---------------------------------------------------------------------------
// Classes
// ---------------------------------------------------------------------------

fn parse_class(node: Node, ctx: &ParseContext, outers: &[String]) -> Option<ClassEntry> {
    let kind = ClassKind::from_node_kind(node.kind())?;
    let name = node_text(ctx.source, NAME.find(node)?);

    let modifiers = extract_modifiers(ctx.source, node);
    if ctx.excluded(&modifiers) {
        return None;
    }

    let qualified = qualified_name(ctx.package_name, outers, &name);
    let start = start_line(node);
    let end = end_line(node);

    let mut members = Members::default();
    if let Some(body) = BODY.find(node) {
        let mut chain = outers.to_vec();
        chain.push(name.clone());
        for member in named_children(body) {
            members.add_member(member, ctx, &qualified, &chain);
        }
    }

    let signature = signature_text(node, ctx.source);
    let annotations = extract_annotations(ctx.source, node, &signature);

    Some(ClassEntry {
        symbol_id: symbol_id(SymbolTag::Class, &qualified, None, start, end),
        kind,
        name,
        qualified_name: qualified,
        modifiers,
        annotations,
        extends: extract_extends(node, ctx.source, kind),
        implements: extract_implements(node, ctx.source, kind),
        start_line: start,
        end_line: end,
        javadoc: ctx.javadoc_for(node),
        signature_text: signature,
        fields: members.fields,
        constructors: members.constructors,
        methods: members.methods,
        inner_classes: members.inner_classes,
    })
}

fn extract_extends(node: Node, source: &[u8], kind: ClassKind) -> Option<String> {
    if let Some(superclass) = SUPERCLASS.find(node) {
        let text = normalize_whitespace(&strip_prefix_keyword(&node_text(source, superclass), "extends"));
        return (!text.is_empty()).then_some(text);
    }
    if kind == ClassKind::Interface {
        let clause = EXTENDS_INTERFACES.find(node)?;
        let text = normalize_whitespace(&strip_prefix_keyword(&node_text(source, clause), "extends"));
        let parts = split_top_level_commas(&text);
        return (!parts.is_empty()).then(|| parts.join(", "));
    }
    None
}

fn extract_implements(node: Node, source: &[u8], kind: ClassKind) -> Vec<String> {
    if kind == ClassKind::Interface {
        return Vec::new();
    }
    let Some(clause) = SUPER_INTERFACES.find(node) else {
        return Vec::new();
    };
    let text = normalize_whitespace(&strip_prefix_keyword(&node_text(source, clause), "implements"));
    split_top_level_commas(&text)
}

// ---------------------------------------------------------------------------
// Class bodies
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Members {
    fields: Vec<FieldEntry>,
    constructors: Vec<ConstructorEntry>,
    methods: Vec<MethodEntry>,
    inner_classes: Vec<ClassEntry>,
}

impl Members {
    fn add_member(&mut self, member: Node, ctx: &ParseContext, qualified: &str, chain: &[String]) {
        match member.kind() {
            "field_declaration" | "constant_declaration" => {
                if ctx.options.include_fields {
                    self.fields.extend(parse_fields(member, ctx, qualified));
                }
            }
            "method_declaration" => {
                if let Some(method) = parse_method(member, ctx, qualified) {
                    self.methods.push(method);
                }
            }
            "constructor_declaration" | "compact_constructor_declaration" => {
                if ctx.options.include_constructors {
                    if let Some(ctor) = parse_constructor(member, ctx, qualified) {
                        self.constructors.push(ctor);
                    }
                }
            }
            "enum_body_declarations" => {
                for nested in named_children(member) {
                    self.add_member(nested, ctx, qualified, chain);
                }
            }
            kind if ClassKind::from_node_kind(kind).is_some() => {
                if ctx.options.include_inner_classes {
                    if let Some(inner) = parse_class(member, ctx, chain) {
                        self.inner_classes.push(inner);
                    }
                }
            }
            _ => {}
        }
    }
}

/// One entry per declarator; the statement's type, modifiers, annotations
/// and documentation are shared.
fn parse_fields(node: Node, ctx: &ParseContext, qualified: &str) -> Vec<FieldEntry> {
    let modifiers = extract_modifiers(ctx.source, node);
    if ctx.excluded(&modifiers) {
        return Vec::new();
    }
    let field_type = type_text(ctx.source, TYPE.find(node));
    let signature = signature_text(node, ctx.source);
    let annotations = extract_annotations(ctx.source, node, &signature);
    let javadoc = ctx.javadoc_for(node);

    named_children(node)
        .into_iter()
        .filter(|child| child.kind() == "variable_declarator")
        .filter_map(|declarator| {
            let name = node_text(ctx.source, NAME.find(declarator)?);
            let start = start_line(declarator);
            let end = end_line(declarator);
            Some(FieldEntry {
                symbol_id: symbol_id(SymbolTag::Field, qualified, Some(&name), start, end),
                kind: MemberKind::Field,
                name,
                type_text: field_type.clone(),
                modifiers: modifiers.clone(),
                annotations: annotations.clone(),
                start_line: start,
                end_line: end,
                javadoc: javadoc.clone(),
            })
        })
        .collect()
}

fn parse_constructor(node: Node, ctx: &ParseContext, qualified: &str) -> Option<ConstructorEntry> {
    let modifiers = extract_modifiers(ctx.source, node);
    if ctx.excluded(&modifiers) {
        return None;
    }
    let name = match NAME.find(node) {
        Some(name_node) => node_text(ctx.source, name_node),
        None => qualified.rsplit('.').next().unwrap_or(qualified).to_string(),
    };
    let params = parse_parameters(node, ctx.source);
    let start = start_line(node);
    let end = end_line(node);
    let detail = callable_detail(&name, &params);
    let signature = signature_text(node, ctx.source);
    let annotations = extract_annotations(ctx.source, node, &signature);

    Some(ConstructorEntry {
        symbol_id: symbol_id(SymbolTag::Ctor, qualified, Some(&detail), start, end),
        kind: MemberKind::Constructor,
        name,
        modifiers,
        annotations,
        throws: throws_list(node, ctx.source),
        params,
        start_line: start,
        end_line: end,
        javadoc: ctx.javadoc_for(node),
        signature_text: signature,
    })
}

fn parse_method(node: Node, ctx: &ParseContext, qualified: &str) -> Option<MethodEntry> {
    let modifiers = extract_modifiers(ctx.source, node);
    if ctx.excluded(&modifiers) {
        return None;
    }
    let name = node_text(ctx.source, NAME.find(node)?);
    let type_params = TYPE_PARAMETERS
        .find(node)
        .map(|n| normalize_whitespace(&node_text(ctx.source, n)));
    let mut return_type = type_text(ctx.source, RETURN_TYPE.find(node));
    if return_type.is_empty() {
        return_type = "void".to_string();
    }
    let params = parse_parameters(node, ctx.source);
    let start = start_line(node);
    let end = end_line(node);
    let detail = format!("{}:{return_type}", callable_detail(&name, &params));
    let signature = signature_text(node, ctx.source);
    let annotations = extract_annotations(ctx.source, node, &signature);

    Some(MethodEntry {
        symbol_id: symbol_id(SymbolTag::Method, qualified, Some(&detail), start, end),
        kind: MemberKind::Method,
        name,
        return_type_text: return_type,
        modifiers,
        annotations,
        type_params_text: type_params,
        throws: throws_list(node, ctx.source),
        params,
        start_line: start,
        end_line: end,
        javadoc: ctx.javadoc_for(node),
        signature_text: signature,
    })
}

fn parse_parameters(node: Node, source: &[u8]) -> Vec<Parameter> {
    let Some(list) = PARAMETERS.find(node) else {
        return Vec::new();
    };
    named_children(list)
        .into_iter()
        .filter(|child| PARAMETER_KINDS.contains(&child.kind()))
        .filter_map(|param| parse_parameter(param, source))
        .collect()
}

fn parse_parameter(param: Node, source: &[u8]) -> Option<Parameter> {
    // Varargs keep their name inside a nested declarator.
    let holder = first_named_child(param, &["variable_declarator"]).unwrap_or(param);
    let name_node = NAME.find(holder)?;
    let type_text = match TYPE.find(param) {
        Some(type_node) => normalize_whitespace(&node_text(source, type_node)),
        None => {
            let end = name_node.start_byte().min(source.len());
            let start = param.start_byte().min(end);
            normalize_whitespace(&String::from_utf8_lossy(&source[start..end]))
        }
    };
    Some(Parameter {
        name: node_text(source, name_node),
        type_text,
    })
}

fn throws_list(node: Node, source: &[u8]) -> Vec<String> {
    let Some(clause) = THROWS.find(node) else {
        return Vec::new();
    };
    let text = normalize_whitespace(&strip_prefix_keyword(&node_text(source, clause), "throws"));
    split_top_level_commas(&text)
}

// ---------------------------------------------------------------------------
// Symbol traversal
// ---------------------------------------------------------------------------

/// Borrowed view of any indexed declaration.
#[derive(Clone, Copy, Debug)]
pub enum SymbolRef<'a> {
    Class(&'a ClassEntry),
    Field(&'a FieldEntry),
    Constructor(&'a ConstructorEntry),
    Method(&'a MethodEntry),
}

impl<'a> SymbolRef<'a> {
    pub fn kind(&self) -> &'static str {
        match *self {
            Self::Class(c) => c.kind.as_str(),
            Self::Field(f) => f.kind.as_str(),
            Self::Constructor(c) => c.kind.as_str(),
            Self::Method(m) => m.kind.as_str(),
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            Self::Class(c) => &c.name,
            Self::Field(f) => &f.name,
            Self::Constructor(c) => &c.name,
            Self::Method(m) => &m.name,
        }
    }

    pub fn symbol_id(&self) -> &'a str {
        match *self {
            Self::Class(c) => &c.symbol_id,
            Self::Field(f) => &f.symbol_id,
            Self::Constructor(c) => &c.symbol_id,
            Self::Method(m) => &m.symbol_id,
        }
    }

    pub fn line_span(&self) -> (usize, usize) {
        match *self {
            Self::Class(c) => (c.start_line, c.end_line),
            Self::Field(f) => (f.start_line, f.end_line),
            Self::Constructor(c) => (c.start_line, c.end_line),
            Self::Method(m) => (m.start_line, m.end_line),
        }
    }

    pub fn signature_text(&self) -> Option<&'a str> {
        match *self {
            Self::Class(c) => Some(&c.signature_text),
            Self::Field(_) => None,
            Self::Constructor(c) => Some(&c.signature_text),
            Self::Method(m) => Some(&m.signature_text),
        }
    }

    pub fn javadoc(&self) -> &'a JavadocBlock {
        match *self {
            Self::Class(c) => &c.javadoc,
            Self::Field(f) => &f.javadoc,
            Self::Constructor(c) => &c.javadoc,
            Self::Method(m) => &m.javadoc,
        }
    }
}

/// A symbol paired with the qualified name of the class that owns it
/// (a class is its own owner).
#[derive(Clone, Copy, Debug)]
pub struct OwnedSymbol<'a> {
    pub symbol: SymbolRef<'a>,
    pub owner: &'a str,
}

impl OwnedSymbol<'_> {
    /// Own qualified name for classes, `<owner>#<name>` for members.
    pub fn display_name(&self) -> String {
        match self.symbol {
            SymbolRef::Class(c) => c.qualified_name.clone(),
            member => format!("{}#{}", self.owner, member.name()),
        }
    }
}

/// Depth-first flattening: each class, then its fields, constructors and
/// methods, then its nested classes.
pub fn flatten_symbols(result: &IndexResult) -> Vec<OwnedSymbol<'_>> {
    let mut out = Vec::new();
    for class in &result.classes {
        flatten_class(class, &mut out);
    }
    out
}

fn flatten_class<'a>(class: &'a ClassEntry, out: &mut Vec<OwnedSymbol<'a>>) {
    let owner = class.qualified_name.as_str();
    out.push(OwnedSymbol { symbol: SymbolRef::Class(class), owner });
    out.extend(class.fields.iter().map(|f| OwnedSymbol { symbol: SymbolRef::Field(f), owner }));
    out.extend(
        class
            .constructors
            .iter()
            .map(|c| OwnedSymbol { symbol: SymbolRef::Constructor(c), owner }),
    );
    out.extend(class.methods.iter().map(|m| OwnedSymbol { symbol: SymbolRef::Method(m), owner }));
    for inner in &class.inner_classes {
        flatten_class(inner, out);
    }
}

pub fn find_symbol_by_id<'a>(result: &'a IndexResult, id: &str) -> Option<SymbolRef<'a>> {
    flatten_symbols(result)
        .into_iter()
        .map(|owned| owned.symbol)
        .find(|symbol| symbol.symbol_id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexer::parser::{package_name, parse_java};

    fn extract(src: &str, options: &IndexOptions) -> Vec<ClassEntry> {
        let source = src.as_bytes();
        let tree = parse_java(source).unwrap();
        let lines: Vec<String> = src.lines().map(str::to_string).collect();
        let package = package_name(tree.root_node(), source);
        let ctx = ParseContext {
            source,
            lines: &lines,
            package_name: &package,
            options,
        };
        build_classes(tree.root_node(), &ctx)
    }

    fn extract_default(src: &str) -> Vec<ClassEntry> {
        extract(src, &IndexOptions::default())
    }

    #[test]
    fn test_symbol_id_formats() {
        assert_eq!(
            symbol_id(SymbolTag::Class, "a.B", None, 3, 9),
            "Class#a.B|start:3|end:9"
        );
        assert_eq!(
            symbol_id(SymbolTag::Method, "a.B", Some("m(int):void"), 4, 4),
            "Method#a.B#m(int):void|start:4|end:4"
        );
    }

    #[test]
    fn test_qualified_name_without_package() {
        assert_eq!(qualified_name("", &["Outer".to_string()], "Inner"), "Outer.Inner");
        assert_eq!(qualified_name("p", &[], "A"), "p.A");
    }

    #[test]
    fn test_simple_class_members() {
        let src = "\
package com.example;

public class SimpleClass {
  /** Count of items. */
  private int count;

  public SimpleClass() {
    this.count = 0;
  }

  /** Does work. */
  public String doWork(int a, String b) throws Exception {
    return a + b;
  }

  class Inner {
    void innerMethod() {}
  }
}
";
        let classes = extract_default(src);
        assert_eq!(classes.len(), 1);
        let cls = &classes[0];
        assert_eq!(cls.kind, ClassKind::Class);
        assert_eq!(cls.qualified_name, "com.example.SimpleClass");
        assert_eq!(cls.start_line, 3);
        assert_eq!(cls.end_line, 19);
        assert_eq!(cls.signature_text, "public class SimpleClass");
        assert_eq!(cls.symbol_id, "Class#com.example.SimpleClass|start:3|end:19");

        assert_eq!(cls.fields.len(), 1);
        let count = &cls.fields[0];
        assert_eq!(count.name, "count");
        assert_eq!(count.type_text, "int");
        assert_eq!(count.modifiers, vec!["private"]);
        assert!(count.javadoc.present);
        assert_eq!(count.javadoc.start_line, Some(4));

        assert_eq!(cls.constructors.len(), 1);
        assert_eq!(cls.constructors[0].name, "SimpleClass");
        assert_eq!(
            cls.constructors[0].symbol_id,
            "Ctor#com.example.SimpleClass#SimpleClass()|start:7|end:9"
        );

        let work = cls.methods.iter().find(|m| m.name == "doWork").unwrap();
        assert_eq!(work.return_type_text, "String");
        assert_eq!(work.throws, vec!["Exception"]);
        assert_eq!(work.params.len(), 2);
        assert_eq!(work.params[0].type_text, "int");
        assert_eq!(work.params[1].name, "b");
        assert_eq!(
            work.signature_text,
            "public String doWork(int a, String b) throws Exception"
        );
        assert_eq!(
            work.symbol_id,
            "Method#com.example.SimpleClass#doWork(int,String):String|start:12|end:14"
        );
        assert!(work.javadoc.present);

        assert_eq!(cls.inner_classes.len(), 1);
        let inner = &cls.inner_classes[0];
        assert_eq!(inner.name, "Inner");
        assert_eq!(inner.qualified_name, "com.example.SimpleClass.Inner");
        assert_eq!(inner.methods[0].return_type_text, "void");
    }

    #[test]
    fn test_multi_variable_field_expands_per_declarator() {
        let src = "\
class Point {
  /** Coordinates. */
  private int x,
      y;
}
";
        let classes = extract_default(src);
        let fields = &classes[0].fields;
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "x");
        assert_eq!(fields[1].name, "y");
        assert_eq!(fields[0].start_line, 3);
        assert_eq!(fields[1].start_line, 4);
        assert_eq!(fields[0].type_text, fields[1].type_text);
        assert_eq!(fields[0].javadoc, fields[1].javadoc);
        assert!(fields[0].javadoc.present);
        assert_ne!(fields[0].symbol_id, fields[1].symbol_id);
    }

    #[test]
    fn test_overloads_have_distinct_ids() {
        let src = "\
class A {
  @Deprecated
  public void doThing() {}

  @Deprecated
  public void doThing(int a) {}
}
";
        let classes = extract_default(src);
        let methods = &classes[0].methods;
        assert_eq!(methods.len(), 2);
        assert_ne!(methods[0].symbol_id, methods[1].symbol_id);
        assert_eq!(methods[0].annotations, vec!["@Deprecated"]);
        assert_eq!(methods[0].modifiers, vec!["public"]);
        assert_eq!(methods[0].signature_text, "@Deprecated public void doThing()");
    }

    #[test]
    fn test_javadoc_anchored_above_annotation() {
        let src = "\
package com.example.docs;

public class JavadocWithAnnotation {
  /**
   * Doc for field with annotation.
   */
  @Deprecated
  private String name;
}
";
        let classes = extract_default(src);
        let field = &classes[0].fields[0];
        assert!(field.javadoc.present);
        assert_eq!(field.javadoc.start_line, Some(4));
        assert_eq!(field.javadoc.end_line, Some(6));
        assert_eq!(field.annotations, vec!["@Deprecated"]);
    }

    #[test]
    fn test_parameter_annotations_stay_off_methods() {
        let src = "\
interface Api {
  User get(@PathVariable(\"id\") Long id, @RequestParam String q);
  default void put(int a, @Valid Body b) {}
}
class Svc {
  void run(String a, @Nullable String b) {}
}
";
        let classes = extract_default(src);
        let methods: Vec<&MethodEntry> = classes
            .iter()
            .flat_map(|c| c.methods.iter())
            .collect();
        assert_eq!(methods.len(), 3);
        for method in methods {
            assert!(method.annotations.is_empty(), "{}: {:?}", method.name, method.annotations);
        }
    }

    #[test]
    fn test_extends_and_implements() {
        let src = "\
class Repo extends Base<String> implements Map<String, Integer>, java.io.Serializable {}
interface Api extends Comparable<Api>, Runnable {}
";
        let classes = extract_default(src);
        assert_eq!(classes[0].extends.as_deref(), Some("Base<String>"));
        assert_eq!(
            classes[0].implements,
            vec!["Map<String, Integer>", "java.io.Serializable"]
        );
        assert_eq!(classes[1].kind, ClassKind::Interface);
        assert_eq!(classes[1].extends.as_deref(), Some("Comparable<Api>, Runnable"));
        assert!(classes[1].implements.is_empty());
    }

    #[test]
    fn test_private_filter_drops_classes_and_members() {
        let src = "\
public class A {
  private int hidden;
  public int shown;
  private void secret() {}
  private static class Nested {}
  public static class Visible {}
}
";
        let options = IndexOptions {
            include_private: false,
            ..IndexOptions::default()
        };
        let classes = extract(src, &options);
        let cls = &classes[0];
        assert_eq!(cls.fields.len(), 1);
        assert_eq!(cls.fields[0].name, "shown");
        assert!(cls.methods.is_empty());
        assert_eq!(cls.inner_classes.len(), 1);
        assert_eq!(cls.inner_classes[0].name, "Visible");
    }

    #[test]
    fn test_category_gates() {
        let src = "\
class A {
  int f;
  A() {}
  void m() {}
  class B {}
}
";
        let options = IndexOptions {
            include_fields: false,
            include_constructors: false,
            include_inner_classes: false,
            ..IndexOptions::default()
        };
        let cls = &extract(src, &options)[0];
        assert!(cls.fields.is_empty());
        assert!(cls.constructors.is_empty());
        assert!(cls.inner_classes.is_empty());
        assert_eq!(cls.methods.len(), 1);
    }

    #[test]
    fn test_record_enum_interface_kinds() {
        let src = "\
package com.example.types;

public record Person(String name, int age) {
  public Person {
    if (age < 0) {
      throw new IllegalArgumentException();
    }
  }

  public String label() {
    return name + age;
  }
}

enum Status {
  OK, FAIL;

  public boolean isOk() {
    return this == OK;
  }
}

interface Worker {
  void run();
  default int priority() { return 1; }
}
";
        let classes = extract_default(src);
        assert_eq!(classes.len(), 3);
        assert_eq!(classes[0].kind, ClassKind::Record);
        assert_eq!(classes[0].constructors.len(), 1);
        assert_eq!(classes[0].constructors[0].name, "Person");
        assert_eq!(classes[0].signature_text, "public record Person(String name, int age)");

        assert_eq!(classes[1].kind, ClassKind::Enum);
        assert_eq!(classes[1].methods[0].name, "isOk");
        assert_eq!(classes[1].signature_text, "enum Status");

        assert_eq!(classes[2].kind, ClassKind::Interface);
        let names: Vec<&str> = classes[2].methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["run", "priority"]);
        assert_eq!(classes[2].methods[0].signature_text, "void run()");
        assert_eq!(classes[2].methods[1].modifiers, vec!["default"]);
    }

    #[test]
    fn test_multiline_annotation_and_generic_method() {
        let src = "\
class A {
  @MyAnno(
    value = \"x\",
    flag = true
  )
  protected final int value = 42;

  public <T extends Comparable<T>> java.util.List<T> sortAndFilter(
      java.util.List<T> items,
      java.util.function.Predicate<T> keep)
      throws IllegalStateException, java.io.IOException {
    return items;
  }
}
";
        let cls = &extract_default(src)[0];
        let field = &cls.fields[0];
        assert_eq!(field.annotations, vec!["@MyAnno( value = \"x\", flag = true )"]);
        assert_eq!(field.modifiers, vec!["protected", "final"]);

        let method = &cls.methods[0];
        assert_eq!(method.type_params_text.as_deref(), Some("<T extends Comparable<T>>"));
        assert_eq!(method.return_type_text, "java.util.List<T>");
        assert!(method.params[0].type_text.starts_with("java.util.List"));
        assert_eq!(method.throws, vec!["IllegalStateException", "java.io.IOException"]);
        assert!(method.signature_text.contains("throws"));
        assert_eq!(method.start_line, 8);
    }

    #[test]
    fn test_flatten_order_and_lookup() {
        let src = "\
package p;
class A {
  int f;
  A() {}
  void m() {}
  class B { void n() {} }
}
";
        let result = IndexResult {
            file_path: "A.java".into(),
            language: "java".into(),
            hash: String::new(),
            line_count: 7,
            classes: extract_default(src),
            errors: vec![],
        };
        let flat = flatten_symbols(&result);
        let kinds: Vec<&str> = flat.iter().map(|s| s.symbol.kind()).collect();
        assert_eq!(kinds, vec!["class", "field", "constructor", "method", "class", "method"]);
        assert_eq!(flat[3].display_name(), "p.A#m");
        assert_eq!(flat[4].display_name(), "p.A.B");
        assert_eq!(flat[5].owner, "p.A.B");

        let id = flat[5].symbol.symbol_id().to_string();
        let found = find_symbol_by_id(&result, &id).unwrap();
        assert_eq!(found.name(), "n");
        assert!(find_symbol_by_id(&result, "Method#nope|start:1|end:1").is_none());
    }
}

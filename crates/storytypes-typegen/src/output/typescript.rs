//! TypeScript declaration emitter.
//!
//! Turns one normalized schema node into an `export interface` block. Open
//! shapes carry a `[k: string]: any` index signature; untyped values emit
//! `any`, never an implicit `unknown`. Output is deterministic: identical
//! input nodes always yield identical text.

use crate::ir::{ArrayItems, FieldNode, ObjectNode, SchemaNode, pascal_type_name};

const INDENT: &str = "  ";

/// Options for the emitter.
#[derive(Debug, Clone, Default)]
pub struct TypeScriptOptions {
    /// Comment block prepended to each declaration. The default (none)
    /// mirrors the generator's compiler contract.
    pub banner_comment: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("component name {0:?} does not yield a valid type identifier")]
    InvalidTypeName(String),
}

/// Emit the `export interface` declaration for one component.
pub fn generate_typescript(
    schema: &SchemaNode,
    options: &TypeScriptOptions,
) -> Result<String, CompileError> {
    let name = pascal_type_name(&schema.title);
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(CompileError::InvalidTypeName(schema.title.clone()));
    }

    let mut out = String::new();
    if let Some(banner) = &options.banner_comment {
        out.push_str(banner);
        out.push('\n');
    }

    out.push_str("export interface ");
    out.push_str(&name);
    out.push_str(" {\n");
    for (key, node) in &schema.properties {
        push_property(&mut out, key, node, schema.is_required(key), 1);
    }
    push_index_signature(&mut out, 1);
    out.push_str("}\n");
    Ok(out)
}

fn pad(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn push_index_signature(out: &mut String, depth: usize) {
    pad(out, depth);
    out.push_str("[k: string]: any;\n");
}

/// One `key: type;` line, or a multi-line block for object shapes and unions.
fn push_property(out: &mut String, key: &str, node: &FieldNode, required: bool, depth: usize) {
    pad(out, depth);
    out.push_str(&property_key(key));
    if !required {
        out.push('?');
    }

    match node {
        FieldNode::Object(shape) => {
            out.push_str(": {\n");
            push_object_body(out, shape, depth + 1);
            pad(out, depth);
            out.push_str("};\n");
        }
        FieldNode::Array {
            items: ArrayItems::Object(shape),
        } => {
            out.push_str(": {\n");
            push_object_body(out, shape, depth + 1);
            pad(out, depth);
            out.push_str("}[];\n");
        }
        FieldNode::OneOf(variants) => {
            out.push_str(":\n");
            for (index, variant) in variants.iter().enumerate() {
                push_union_member(out, variant, depth + 1, index + 1 == variants.len());
            }
        }
        other => {
            out.push_str(": ");
            out.push_str(&scalar_expr(other));
            out.push_str(";\n");
        }
    }
}

fn push_object_body(out: &mut String, shape: &ObjectNode, depth: usize) {
    for (key, node) in &shape.properties {
        push_property(out, key, node, shape.is_required(key), depth);
    }
    if shape.additional_properties {
        push_index_signature(out, depth);
    }
}

/// One `| { ... }` member of a leading-pipe union. The final member closes
/// with the property's semicolon.
fn push_union_member(out: &mut String, shape: &ObjectNode, depth: usize, last: bool) {
    pad(out, depth);
    out.push_str("| {\n");
    push_object_body(out, shape, depth + 2);
    pad(out, depth + 1);
    out.push('}');
    if last {
        out.push(';');
    }
    out.push('\n');
}

/// A single-line type expression.
fn scalar_expr(node: &FieldNode) -> String {
    match node {
        FieldNode::String { enum_values: None } => "string".into(),
        FieldNode::String {
            enum_values: Some(values),
        } => string_union(values),
        FieldNode::Number => "number".into(),
        FieldNode::Boolean => "boolean".into(),
        FieldNode::Any => "any".into(),
        FieldNode::Array {
            items: ArrayItems::Any,
        } => "any[]".into(),
        FieldNode::Array {
            items: ArrayItems::Enum(values),
        } => {
            if values.len() == 1 {
                format!("{}[]", string_literal(&values[0]))
            } else {
                format!("({})[]", string_union(values))
            }
        }
        FieldNode::Literal(expr) => expr.clone(),
        // Handled by push_property before reaching here.
        FieldNode::Array {
            items: ArrayItems::Object(_),
        }
        | FieldNode::Object(_)
        | FieldNode::OneOf(_) => unreachable!("structural nodes are emitted as blocks"),
    }
}

fn string_union(values: &[String]) -> String {
    values
        .iter()
        .map(|value| string_literal(value))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn string_literal(value: &str) -> String {
    format!("{value:?}")
}

/// Property keys that are not valid identifiers get quoted.
fn property_key(key: &str) -> String {
    let mut chars = key.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_' || first == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    };
    if valid { key.into() } else { format!("{key:?}") }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(schema: &SchemaNode) -> String {
        generate_typescript(schema, &TypeScriptOptions::default()).unwrap()
    }

    fn simple_schema() -> SchemaNode {
        SchemaNode {
            id: "#/button".into(),
            title: "button".into(),
            properties: vec![
                ("text".into(), FieldNode::string()),
                (
                    "style".into(),
                    FieldNode::string_enum(["", "solid", "outline"]),
                ),
                ("_uid".into(), FieldNode::string()),
                ("component".into(), FieldNode::string_enum(["button"])),
            ],
            required: vec!["_uid".into(), "component".into(), "text".into()],
        }
    }

    #[test]
    fn emits_interface_with_optionality() {
        let out = emit(&simple_schema());
        assert_eq!(
            out,
            "export interface Button {\n\
             \x20 text: string;\n\
             \x20 style?: \"\" | \"solid\" | \"outline\";\n\
             \x20 _uid: string;\n\
             \x20 component: \"button\";\n\
             \x20 [k: string]: any;\n\
             }\n"
        );
    }

    #[test]
    fn emits_closed_object_without_index_signature() {
        let schema = SchemaNode {
            id: "#/hero".into(),
            title: "hero".into(),
            properties: vec![(
                "image".into(),
                FieldNode::Object(
                    ObjectNode::open(vec![
                        ("id".into(), FieldNode::Number),
                        ("filename".into(), FieldNode::string()),
                    ])
                    .with_required(["id", "filename"])
                    .closed(),
                ),
            )],
            required: vec!["_uid".into(), "component".into()],
        };

        let out = emit(&schema);
        assert!(out.contains("  image?: {\n    id: number;\n    filename: string;\n  };\n"));
        assert_eq!(out.matches("[k: string]: any;").count(), 1); // root only
    }

    #[test]
    fn emits_array_of_objects() {
        let schema = SchemaNode {
            id: "#/gallery".into(),
            title: "gallery".into(),
            properties: vec![(
                "images".into(),
                FieldNode::Array {
                    items: ArrayItems::Object(Box::new(
                        ObjectNode::open(vec![("id".into(), FieldNode::Number)])
                            .with_required(["id"])
                            .closed(),
                    )),
                },
            )],
            required: vec![],
        };

        let out = emit(&schema);
        assert!(out.contains("  images?: {\n    id: number;\n  }[];\n"));
    }

    #[test]
    fn emits_leading_pipe_union() {
        let schema = SchemaNode {
            id: "#/teaser".into(),
            title: "teaser".into(),
            properties: vec![(
                "link".into(),
                FieldNode::OneOf(vec![
                    ObjectNode::open(vec![("cached_url".into(), FieldNode::string())]),
                    ObjectNode::open(vec![(
                        "linktype".into(),
                        FieldNode::string_enum(["email"]),
                    )]),
                ]),
            )],
            required: vec![],
        };

        let out = emit(&schema);
        let expected = "  link?:\n\
                        \x20   | {\n\
                        \x20       cached_url?: string;\n\
                        \x20       [k: string]: any;\n\
                        \x20     }\n\
                        \x20   | {\n\
                        \x20       linktype?: \"email\";\n\
                        \x20       [k: string]: any;\n\
                        \x20     };\n";
        assert!(out.contains(expected), "got:\n{out}");
    }

    #[test]
    fn emits_item_enums_and_literals() {
        let schema = SchemaNode {
            id: "#/page".into(),
            title: "page".into(),
            properties: vec![
                (
                    "meta_robots".into(),
                    FieldNode::Array {
                        items: ArrayItems::Enum(vec!["noindex".into(), "nofollow".into()]),
                    },
                ),
                (
                    "blocks".into(),
                    FieldNode::Literal("(Card | Banner)[]".into()),
                ),
                ("body".into(), FieldNode::Any),
                (
                    "stories".into(),
                    FieldNode::Array {
                        items: ArrayItems::Any,
                    },
                ),
            ],
            required: vec![],
        };

        let out = emit(&schema);
        assert!(out.contains("  meta_robots?: (\"noindex\" | \"nofollow\")[];\n"));
        assert!(out.contains("  blocks?: (Card | Banner)[];\n"));
        assert!(out.contains("  body?: any;\n"));
        assert!(out.contains("  stories?: any[];\n"));
    }

    #[test]
    fn pascal_cases_the_interface_name_but_not_the_component_literal() {
        let schema = SchemaNode {
            id: "#/Case Study".into(),
            title: "Case Study".into(),
            properties: vec![(
                "component".into(),
                FieldNode::string_enum(["Case Study"]),
            )],
            required: vec!["component".into()],
        };

        let out = emit(&schema);
        assert!(out.starts_with("export interface CaseStudy {\n"));
        assert!(out.contains("  component: \"Case Study\";\n"));
    }

    #[test]
    fn quotes_non_identifier_keys() {
        let schema = SchemaNode {
            id: "#/x".into(),
            title: "x".into(),
            properties: vec![("with-dash".into(), FieldNode::string())],
            required: vec![],
        };
        assert!(emit(&schema).contains("  \"with-dash\"?: string;\n"));
    }

    #[test]
    fn rejects_unusable_component_names() {
        let schema = SchemaNode {
            id: "#/123".into(),
            title: "123".into(),
            properties: vec![],
            required: vec![],
        };
        let err = generate_typescript(&schema, &TypeScriptOptions::default()).unwrap_err();
        assert!(matches!(err, CompileError::InvalidTypeName(name) if name == "123"));
    }

    #[test]
    fn banner_comment_is_prepended() {
        let out = generate_typescript(
            &simple_schema(),
            &TypeScriptOptions {
                banner_comment: Some("/* generated */".into()),
            },
        )
        .unwrap();
        assert!(out.starts_with("/* generated */\nexport interface Button {\n"));
    }
}

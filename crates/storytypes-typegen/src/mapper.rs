//! Field Type Mapper.
//!
//! Converts one raw field definition into a normalized field node. Structural
//! kinds (multilink, asset, multiasset) override the base-type table outright;
//! enumeration and bloks-restriction handling only apply to the kinds that
//! carry them.

use crate::groups::GroupIndex;
use crate::ir::{ArrayItems, FieldNode, ObjectNode, pascal_type_name};
use crate::schema::{FieldKind, RawField, RestrictType};

/// Base JSON type a field kind maps to, before enum/restriction handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BaseType {
    String,
    Number,
    Boolean,
    Array,
    Any,
}

/// The fixed kind-to-base-type table. `None` means the kind is unrecognized
/// and the field is dropped from the normalized schema.
fn base_type(kind: FieldKind) -> Option<BaseType> {
    match kind {
        FieldKind::Text
        | FieldKind::Textarea
        | FieldKind::Markdown
        | FieldKind::Datetime
        | FieldKind::Image
        | FieldKind::Option => Some(BaseType::String),
        FieldKind::Bloks | FieldKind::Options => Some(BaseType::Array),
        FieldKind::Number => Some(BaseType::Number),
        FieldKind::Boolean => Some(BaseType::Boolean),
        FieldKind::Richtext => Some(BaseType::Any),
        // Structural kinds are handled before the table is consulted.
        FieldKind::Multilink | FieldKind::Asset | FieldKind::Multiasset => None,
        FieldKind::Unrecognized => None,
    }
}

/// Map one raw field to its normalized node.
///
/// Returns `None` for unrecognized kinds; the field is then omitted from the
/// component's normalized schema. `title` is the owning component's name and
/// is only used in diagnostics.
pub fn map_field(
    key: &str,
    field: &RawField,
    title: &str,
    groups: &GroupIndex,
) -> Option<FieldNode> {
    match field.kind {
        FieldKind::Multilink => return Some(multilink_node()),
        FieldKind::Asset => return Some(FieldNode::Object(asset_shape())),
        FieldKind::Multiasset => {
            return Some(FieldNode::Array {
                items: ArrayItems::Object(Box::new(asset_shape())),
            });
        }
        _ => {}
    }

    let base = match base_type(field.kind) {
        Some(base) => base,
        None => {
            tracing::debug!(component = %title, field = %key, "unrecognized field kind, dropping");
            return None;
        }
    };

    let enum_values = enum_values(field);

    let node = match base {
        BaseType::String => FieldNode::String { enum_values },
        BaseType::Number => FieldNode::Number,
        BaseType::Boolean => FieldNode::Boolean,
        BaseType::Any => FieldNode::Any,
        BaseType::Array => {
            if field.kind == FieldKind::Bloks {
                bloks_node(key, field, title, groups)
            } else {
                FieldNode::Array {
                    items: enum_values.map(ArrayItems::Enum).unwrap_or(ArrayItems::Any),
                }
            }
        }
    };

    Some(node)
}

/// Extract the declared enumeration, prepending the empty-string sentinel for
/// single-option fields unless excluded. When the CMS data already declares an
/// empty option the sentinel is not prepended again.
fn enum_values(field: &RawField) -> Option<Vec<String>> {
    if field.options.is_empty() {
        return None;
    }

    let mut values: Vec<String> = field.options.iter().map(|o| o.value.clone()).collect();

    if field.kind == FieldKind::Option
        && !field.exclude_empty_option
        && !values.iter().any(String::is_empty)
    {
        values.insert(0, String::new());
    }

    Some(values)
}

/// Resolve a bloks field's component restriction into a union-of-type-names
/// literal, or fall back to a bare array when no restriction narrows it.
fn bloks_node(key: &str, field: &RawField, title: &str, groups: &GroupIndex) -> FieldNode {
    let unrestricted = FieldNode::Array {
        items: ArrayItems::Any,
    };

    if !field.restrict_components {
        tracing::warn!(
            component = %title,
            field = %key,
            "bloks field accepts any component, emitting unrestricted array"
        );
        return unrestricted;
    }

    let names: Vec<String> = match field.restrict_type {
        RestrictType::Groups => {
            if field.component_group_whitelist.is_empty() {
                tracing::warn!(component = %title, field = %key, "empty component group whitelist");
                return unrestricted;
            }
            let mut names = Vec::new();
            for uuid in &field.component_group_whitelist {
                match groups.members(uuid) {
                    Some(members) if !members.is_empty() => names.extend_from_slice(members),
                    _ => {
                        tracing::warn!(
                            component = %title,
                            field = %key,
                            group = %uuid,
                            "whitelisted group has no members"
                        );
                    }
                }
            }
            names
        }
        RestrictType::Components => {
            if field.component_whitelist.is_empty() {
                tracing::warn!(component = %title, field = %key, "no whitelisted component found");
                return unrestricted;
            }
            field
                .component_whitelist
                .iter()
                .map(|name| pascal_type_name(name))
                .collect()
        }
    };

    if names.is_empty() {
        // Every whitelisted group resolved empty; widen rather than emit `()[]`.
        return unrestricted;
    }

    FieldNode::Literal(union_array(&names))
}

/// `(A | B | C)[]`, with the parentheses dropped for a single member.
fn union_array(names: &[String]) -> String {
    if names.len() == 1 {
        format!("{}[]", names[0])
    } else {
        format!("({})[]", names.join(" | "))
    }
}

/// The 4-way link union: generic, story, asset/external, email.
fn multilink_node() -> FieldNode {
    FieldNode::OneOf(vec![
        ObjectNode::open(vec![
            ("cached_url".into(), FieldNode::string()),
            ("linktype".into(), FieldNode::string()),
        ]),
        ObjectNode::open(vec![
            ("id".into(), FieldNode::string()),
            ("cached_url".into(), FieldNode::string()),
            ("linktype".into(), FieldNode::string_enum(["story"])),
        ]),
        ObjectNode::open(vec![
            ("url".into(), FieldNode::string()),
            ("cached_url".into(), FieldNode::string()),
            ("linktype".into(), FieldNode::string_enum(["asset", "url"])),
        ]),
        ObjectNode::open(vec![
            ("email".into(), FieldNode::string()),
            ("linktype".into(), FieldNode::string_enum(["email"])),
        ]),
    ])
}

/// The asset shape shared by `asset` and `multiasset` fields.
fn asset_shape() -> ObjectNode {
    ObjectNode::open(vec![
        ("alt".into(), FieldNode::string()),
        ("copyright".into(), FieldNode::string()),
        ("id".into(), FieldNode::Number),
        ("filename".into(), FieldNode::string()),
        ("name".into(), FieldNode::string()),
        ("title".into(), FieldNode::string()),
    ])
    .with_required(["id", "filename", "name"])
    .closed()
}

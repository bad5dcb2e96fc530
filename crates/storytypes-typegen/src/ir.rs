//! Normalized intermediate representation of component schemas.
//!
//! The Field Type Mapper and Schema Assembler build these JSON-Schema-shaped
//! nodes; the TypeScript emitter consumes them. Nodes are immutable once
//! built, and property order everywhere is the order the nodes were built in.

use convert_case::{Case, Casing};

/// The normalized schema for one component.
///
/// Properties hold the mapped user fields in schema-definition order followed
/// by the injected system fields. `required` always starts with `_uid` and
/// `component`, in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    /// Schema identifier, `#/<component name>`.
    pub id: String,
    /// The component's name, verbatim.
    pub title: String,
    pub properties: Vec<(String, FieldNode)>,
    pub required: Vec<String>,
}

impl SchemaNode {
    /// Whether a property key is in the required set.
    pub fn is_required(&self, key: &str) -> bool {
        self.required.iter().any(|r| r == key)
    }
}

/// The normalized shape of one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldNode {
    /// A string, optionally constrained to an enumeration of values.
    String { enum_values: Option<Vec<String>> },
    Number,
    Boolean,
    /// Unconstrained (richtext documents).
    Any,
    Array { items: ArrayItems },
    /// A closed or open object shape (assets, link variants).
    Object(ObjectNode),
    /// A union of object shapes (multilink).
    OneOf(Vec<ObjectNode>),
    /// A verbatim type expression the emitter passes through unchanged,
    /// e.g. `(Card | Banner)[]` for a restricted bloks field.
    Literal(String),
}

impl FieldNode {
    pub fn string() -> Self {
        Self::String { enum_values: None }
    }

    pub fn string_enum<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::String {
            enum_values: Some(values.into_iter().map(Into::into).collect()),
        }
    }
}

/// Item constraint of an array-typed field.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayItems {
    /// No item constraint (`any[]`).
    Any,
    /// Items drawn from an enumeration of string values.
    Enum(Vec<String>),
    /// Items following a fixed object shape (multiasset).
    Object(Box<ObjectNode>),
}

/// An inline object shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectNode {
    pub properties: Vec<(String, FieldNode)>,
    pub required: Vec<String>,
    /// When false the shape is closed: no index signature is emitted.
    pub additional_properties: bool,
}

impl ObjectNode {
    /// An open object with the given properties and no required keys.
    pub fn open(properties: Vec<(String, FieldNode)>) -> Self {
        Self {
            properties,
            required: Vec::new(),
            additional_properties: true,
        }
    }

    pub fn with_required<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn closed(mut self) -> Self {
        self.additional_properties = false;
        self
    }

    pub fn is_required(&self, key: &str) -> bool {
        self.required.iter().any(|r| r == key)
    }
}

/// Convert a component name to the PascalCase identifier used for its
/// generated type and for union members referencing it.
pub fn pascal_type_name(name: &str) -> String {
    name.to_case(Case::Pascal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_type_names() {
        assert_eq!(pascal_type_name("button"), "Button");
        assert_eq!(pascal_type_name("hero_section"), "HeroSection");
        assert_eq!(pascal_type_name("Case Study"), "CaseStudy");
        assert_eq!(pascal_type_name("splash-banner"), "SplashBanner");
    }

    #[test]
    fn object_builders() {
        let node = ObjectNode::open(vec![
            ("id".into(), FieldNode::Number),
            ("filename".into(), FieldNode::string()),
        ])
        .with_required(["id", "filename"])
        .closed();

        assert!(node.is_required("id"));
        assert!(!node.additional_properties);
    }
}

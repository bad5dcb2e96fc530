//! Raw component schema payloads as delivered by the Storyblok Management API.
//!
//! These are read-only snapshots of one fetch; the translation engine never
//! mutates them. Field order inside a component's schema is significant (it
//! drives required-field order and union member order), so schemas deserialize
//! into an [`IndexMap`].

use indexmap::IndexMap;
use serde::Deserialize;

/// One content-block type as defined in the CMS.
#[derive(Debug, Clone, Deserialize)]
pub struct RawComponent {
    /// Component name, unique within a space.
    pub name: String,
    /// Field definitions, keyed by field name, in definition order.
    #[serde(default)]
    pub schema: IndexMap<String, RawField>,
    /// Group membership reference, if the component belongs to a group.
    #[serde(default)]
    pub component_group_uuid: Option<String>,
}

/// One field definition within a component's schema.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawField {
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Declared enumeration values, in definition order.
    #[serde(default)]
    pub options: Vec<FieldOption>,
    #[serde(default)]
    pub required: bool,
    /// Suppresses the empty-string sentinel on single-option fields.
    #[serde(default)]
    pub exclude_empty_option: bool,
    /// Whether a bloks field restricts which component types it accepts.
    #[serde(default)]
    pub restrict_components: bool,
    #[serde(default)]
    pub restrict_type: RestrictType,
    /// Group uuids allowed when `restrict_type` is `groups`.
    #[serde(default)]
    pub component_group_whitelist: Vec<String>,
    /// Component names allowed when restricting by explicit list.
    #[serde(default)]
    pub component_whitelist: Vec<String>,
}

/// A declared enumeration value.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldOption {
    pub value: String,
}

/// The fixed field-kind vocabulary.
///
/// Anything outside the vocabulary lands on [`FieldKind::Unrecognized`] and is
/// dropped from the normalized schema rather than failing deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum FieldKind {
    Text,
    Textarea,
    Markdown,
    Datetime,
    Image,
    Option,
    Options,
    Number,
    Boolean,
    Richtext,
    Bloks,
    Multilink,
    Asset,
    Multiasset,
    #[default]
    Unrecognized,
}

impl From<String> for FieldKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "text" => Self::Text,
            "textarea" => Self::Textarea,
            "markdown" => Self::Markdown,
            "datetime" => Self::Datetime,
            "image" => Self::Image,
            "option" => Self::Option,
            "options" => Self::Options,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "richtext" => Self::Richtext,
            "bloks" => Self::Bloks,
            "multilink" => Self::Multilink,
            "asset" => Self::Asset,
            "multiasset" => Self::Multiasset,
            _ => Self::Unrecognized,
        }
    }
}

/// How a bloks field narrows its allowed component types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum RestrictType {
    /// Whitelist of component groups.
    Groups,
    /// Whitelist of explicit component names (the CMS default).
    #[default]
    Components,
}

impl From<String> for RestrictType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "groups" => Self::Groups,
            _ => Self::Components,
        }
    }
}

/// A named collection of components.
///
/// Only membership matters to the translation engine; the group's own name is
/// carried for diagnostics.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentGroup {
    pub uuid: String,
    pub name: String,
}

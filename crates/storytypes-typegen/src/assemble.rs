//! Schema Assembler.
//!
//! Combines the Field Type Mapper's per-field output with the injected system
//! fields and computes the required set for one component.

use crate::groups::GroupIndex;
use crate::ir::{FieldNode, SchemaNode};
use crate::mapper::map_field;
use crate::schema::RawComponent;

/// Keys reserved for injected system fields. A user field with one of these
/// names loses to the injected definition.
const SYSTEM_KEYS: [&str; 3] = ["_uid", "component", "uuid"];

/// Legacy components that carry a `uuid` system field.
fn wants_uuid(name: &str) -> bool {
    name == "global" || name == "page"
}

/// Produce the normalized schema node for one component.
pub fn assemble(component: &RawComponent, groups: &GroupIndex) -> SchemaNode {
    let mut properties: Vec<(String, FieldNode)> = Vec::with_capacity(component.schema.len() + 3);

    for (key, field) in &component.schema {
        if SYSTEM_KEYS.contains(&key.as_str()) {
            continue;
        }
        if let Some(node) = map_field(key, field, &component.name, groups) {
            properties.push((key.clone(), node));
        }
    }

    properties.push(("_uid".into(), FieldNode::string()));
    properties.push((
        "component".into(),
        FieldNode::string_enum([component.name.clone()]),
    ));
    if wants_uuid(&component.name) {
        properties.push(("uuid".into(), FieldNode::string()));
    }

    let mut required: Vec<String> = vec!["_uid".into(), "component".into()];
    required.extend(
        component
            .schema
            .iter()
            .filter(|(key, field)| field.required && !SYSTEM_KEYS.contains(&key.as_str()))
            .map(|(key, _)| key.clone()),
    );

    SchemaNode {
        id: format!("#/{}", component.name),
        title: component.name.clone(),
        properties,
        required,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn component(value: serde_json::Value) -> RawComponent {
        serde_json::from_value(value).unwrap()
    }

    fn assemble_one(value: serde_json::Value) -> SchemaNode {
        assemble(&component(value), &GroupIndex::default())
    }

    #[test]
    fn system_fields_are_injected_after_user_fields() {
        let node = assemble_one(json!({
            "name": "button",
            "schema": {
                "text": { "type": "text", "required": true },
                "style": { "type": "option" }
            }
        }));

        let keys: Vec<_> = node.properties.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["text", "style", "_uid", "component"]);
        assert_eq!(node.id, "#/button");
        assert_eq!(node.title, "button");
        assert_eq!(
            node.properties.last().unwrap().1,
            FieldNode::string_enum(["button"])
        );
    }

    #[test]
    fn required_starts_with_uid_and_component_in_that_order() {
        let node = assemble_one(json!({
            "name": "card",
            "schema": {
                "title": { "type": "text", "required": true },
                "subtitle": { "type": "text" },
                "body": { "type": "textarea", "required": true }
            }
        }));

        assert_eq!(node.required, vec!["_uid", "component", "title", "body"]);
    }

    #[test]
    fn global_and_page_get_a_uuid_field() {
        for name in ["global", "page"] {
            let node = assemble_one(json!({ "name": name, "schema": {} }));
            assert!(node.properties.iter().any(|(k, _)| k == "uuid"), "{name}");
            assert!(!node.is_required("uuid"));
        }

        let other = assemble_one(json!({ "name": "pages", "schema": {} }));
        assert!(!other.properties.iter().any(|(k, _)| k == "uuid"));
    }

    #[test]
    fn unrecognized_fields_are_omitted_entirely() {
        let node = assemble_one(json!({
            "name": "layout",
            "schema": {
                "tab": { "type": "tab" },
                "title": { "type": "text" }
            }
        }));

        let keys: Vec<_> = node.properties.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["title", "_uid", "component"]);
    }

    #[test]
    fn user_fields_shadowing_system_keys_lose() {
        let node = assemble_one(json!({
            "name": "widget",
            "schema": {
                "_uid": { "type": "number", "required": true },
                "title": { "type": "text" }
            }
        }));

        let uid_nodes: Vec<_> = node
            .properties
            .iter()
            .filter(|(k, _)| k == "_uid")
            .collect();
        assert_eq!(uid_nodes.len(), 1);
        assert_eq!(uid_nodes[0].1, FieldNode::string());
        assert_eq!(node.required, vec!["_uid", "component"]);
    }
}

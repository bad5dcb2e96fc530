//! Group membership index.
//!
//! Built once per generation run, then read-only. Member order is the
//! component fetch order, which is surfaced verbatim in generated unions.

use indexmap::IndexMap;

use crate::ir::pascal_type_name;
use crate::schema::{ComponentGroup, RawComponent};

/// Mapping from group uuid to the PascalCase type names of its members.
#[derive(Debug, Clone, Default)]
pub struct GroupIndex {
    members: IndexMap<String, Vec<String>>,
}

impl GroupIndex {
    /// Build the index from one run's fetched groups and components.
    ///
    /// Known groups are seeded first so a memberless group is distinguishable
    /// from a uuid the space has never defined.
    pub fn build(groups: &[ComponentGroup], components: &[RawComponent]) -> Self {
        let mut members: IndexMap<String, Vec<String>> = IndexMap::new();

        for group in groups {
            members.entry(group.uuid.clone()).or_default();
        }

        for component in components {
            let Some(uuid) = component
                .component_group_uuid
                .as_deref()
                .filter(|uuid| !uuid.is_empty())
            else {
                continue;
            };
            members
                .entry(uuid.to_string())
                .or_default()
                .push(pascal_type_name(&component.name));
        }

        for (uuid, names) in &members {
            if names.is_empty() {
                tracing::debug!(group = %uuid, "component group has no members");
            }
        }

        Self { members }
    }

    /// The member type names of a group, in component fetch order.
    pub fn members(&self, uuid: &str) -> Option<&[String]> {
        self.members.get(uuid).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }
}

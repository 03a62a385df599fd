// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The node type that the hierarchy is made of.

use serde::{Deserialize, Serialize};

use crate::{ComponentRef, ComponentType};

/// A component in the hierarchy, together with all the components it
/// supplies.
///
/// Serializes to the nested record shape
/// `{"id": 0, "type": "counter", "children": [...]}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub id: u64,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    #[serde(default)]
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// Creates a node without children.
    pub fn new(id: u64, component_type: ComponentType) -> Self {
        Self {
            id,
            component_type,
            children: Vec::new(),
        }
    }

    /// Replaces the children of the node.
    pub fn with_children(mut self, children: impl IntoIterator<Item = HierarchyNode>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Returns the string identifier of the node, e.g. `counter2`.
    pub fn component_ref(&self) -> ComponentRef {
        ComponentRef::new(self.component_type, self.id)
    }
}

// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for validating the nodes of a [`ComponentHierarchy`].
//!
//! [`ComponentHierarchy`]: crate::ComponentHierarchy

use std::collections::BTreeSet;

use crate::Error;

use super::{iterators::Components, HierarchyNode};

/// Validates that no component id appears more than once in the forest.
pub(crate) fn validate_unique_ids(roots: &[HierarchyNode]) -> Result<(), Error> {
    let mut seen = BTreeSet::new();
    for node in Components::new(roots) {
        if !seen.insert(node.id) {
            return Err(Error::invalid_hierarchy(format!(
                "Duplicate component ID found: {}",
                node.id
            )));
        }
    }
    Ok(())
}

// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for changing the structure of a [`ComponentHierarchy`].
//!
//! Every successful change is followed by a broadcast of the complete
//! hierarchy through the configured [`Publisher`].

use tracing::{debug, warn};

use crate::{ComponentHierarchy, ComponentType, Error, Publisher};

use super::HierarchyNode;

/// Structural edits.
impl<P> ComponentHierarchy<P>
where
    P: Publisher,
{
    /// Adds a new component without children as the last child of the
    /// component with the given `target_id`.
    ///
    /// The existing children of the target keep their order.  Keeping
    /// `new_id` unique is up to the caller, unless
    /// [`reject_duplicate_ids`][crate::ComponentHierarchyConfig::reject_duplicate_ids]
    /// is set.
    pub fn insert_below(
        &mut self,
        new_id: u64,
        component_type: ComponentType,
        target_id: u64,
    ) -> Result<(), Error> {
        let path = self.path_to(target_id)?;
        self.ensure_new_id(new_id)?;

        self.children_mut(&path)?
            .push(HierarchyNode::new(new_id, component_type));
        debug!("Added {component_type}{new_id} below component {target_id}.");

        self.broadcast();
        Ok(())
    }

    /// Adds a new component without children as the last root of the
    /// hierarchy.
    pub fn insert_root(&mut self, new_id: u64, component_type: ComponentType) -> Result<(), Error> {
        self.ensure_new_id(new_id)?;

        self.roots.push(HierarchyNode::new(new_id, component_type));
        debug!("Added {component_type}{new_id} as a root.");

        self.broadcast();
        Ok(())
    }

    /// Adds a new component below the component with the given `target_id`,
    /// using one more than the largest id in the hierarchy as its id.
    ///
    /// Returns the id of the new component.
    pub fn add_component_below(
        &mut self,
        component_type: ComponentType,
        target_id: u64,
    ) -> Result<u64, Error> {
        let new_id = self
            .max_component_id()
            .map_or(Some(0), |max_id| max_id.checked_add(1))
            .ok_or_else(|| Error::internal("Component id space exhausted."))?;
        self.insert_below(new_id, component_type, target_id)?;
        Ok(new_id)
    }

    /// Removes the component with the given `component_id`.
    ///
    /// With `keep_children`, the children of the removed component are
    /// appended, in their original order, to the sequence it was removed
    /// from: its parent's children, or the roots.  Otherwise its whole
    /// subtree is removed.
    pub fn remove(&mut self, component_id: u64, keep_children: bool) -> Result<(), Error> {
        let path = self.path_to(component_id)?;
        let (&index, parent_path) = path
            .split_last()
            .ok_or_else(|| Error::internal("Empty hierarchy path."))?;

        let siblings = self.children_mut(parent_path)?;
        if index >= siblings.len() {
            return Err(Error::internal(format!("Invalid hierarchy path: {path:?}")));
        }
        let removed = siblings.remove(index);
        let num_children = removed.children.len();
        if keep_children {
            siblings.extend(removed.children);
        }
        debug!(
            "Removed {}{component_id}, {} {num_children} children.",
            removed.component_type,
            if keep_children { "promoting" } else { "discarding" },
        );

        self.broadcast();
        Ok(())
    }

    /// Returns the children of the node at the end of `path`, or the roots
    /// if `path` is empty.
    fn children_mut(&mut self, path: &[usize]) -> Result<&mut Vec<HierarchyNode>, Error> {
        let mut level = &mut self.roots;
        for &index in path {
            let node = level
                .get_mut(index)
                .ok_or_else(|| Error::internal(format!("Invalid hierarchy path: {path:?}")))?;
            level = &mut node.children;
        }
        Ok(level)
    }

    fn ensure_new_id(&self, new_id: u64) -> Result<(), Error> {
        if self.config.reject_duplicate_ids && self.contains(new_id) {
            return Err(Error::invalid_hierarchy(format!(
                "Component with id {new_id} already exists."
            )));
        }
        Ok(())
    }

    /// Publishes the complete hierarchy.  Failures are logged, the change
    /// that triggered the broadcast is kept.
    fn broadcast(&self) {
        let payload = match self.to_json() {
            Ok(payload) => payload,
            Err(err) => {
                warn!("Failed to serialize the component hierarchy: {err}");
                return;
            }
        };
        if let Err(err) = self.publisher.publish(&self.config.topic, &payload) {
            warn!(
                "Failed to publish the component hierarchy to {}: {err}",
                self.config.topic
            );
        }
    }
}

// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for retrieving components from a [`ComponentHierarchy`].

use crate::{iterators::Components, ComponentHierarchy, Error, Publisher};

use super::HierarchyNode;

/// Where a component sits in the hierarchy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location<'a> {
    /// The component, including its subtree.
    pub node: &'a HierarchyNode,
    /// The component's immediate parent, or `None` for roots.
    pub parent: Option<&'a HierarchyNode>,
    /// Index of the root whose tree contains the component.
    pub root_index: usize,
}

/// Depth-first search for `id`, leaving the child indices that lead to it in
/// `path`.
fn search(nodes: &[HierarchyNode], id: u64, path: &mut Vec<usize>) -> bool {
    for (index, node) in nodes.iter().enumerate() {
        path.push(index);
        if node.id == id || search(&node.children, id, path) {
            return true;
        }
        path.pop();
    }
    false
}

/// `Component` retrieval.
impl<P> ComponentHierarchy<P>
where
    P: Publisher,
{
    /// Returns the child indices leading from the root list to the component
    /// with the given `component_id`.  The first index selects the root.
    pub(crate) fn path_to(&self, component_id: u64) -> Result<Vec<usize>, Error> {
        let mut path = Vec::new();
        if search(&self.roots, component_id, &mut path) {
            Ok(path)
        } else {
            Err(Error::not_found(component_id))
        }
    }

    /// Returns the nodes along `path`, starting with the root.
    pub(crate) fn nodes_on_path(&self, path: &[usize]) -> Result<Vec<&HierarchyNode>, Error> {
        let mut nodes = Vec::with_capacity(path.len());
        let mut level = self.roots.as_slice();
        for &index in path {
            let node = level
                .get(index)
                .ok_or_else(|| Error::internal(format!("Invalid hierarchy path: {path:?}")))?;
            nodes.push(node);
            level = &node.children;
        }
        Ok(nodes)
    }

    /// Finds the component with the given `component_id`, together with its
    /// parent and the index of the root it belongs to.
    ///
    /// Roots are searched in order, each one depth-first.
    pub fn find(&self, component_id: u64) -> Result<Location<'_>, Error> {
        let path = self.path_to(component_id)?;
        let nodes = self.nodes_on_path(&path)?;

        let (&node, ancestors) = nodes
            .split_last()
            .ok_or_else(|| Error::internal("Empty hierarchy path."))?;

        Ok(Location {
            node,
            parent: ancestors.last().copied(),
            root_index: path[0],
        })
    }

    /// Returns the component with the given `component_id` and its subtree.
    pub fn entry_of(&self, component_id: u64) -> Result<&HierarchyNode, Error> {
        self.find(component_id).map(|location| location.node)
    }

    /// Returns the parent of the component with the given `component_id`,
    /// with all of its children, or `None` if the component is a root.
    ///
    /// Returns an error if the given `component_id` does not exist.
    pub fn parent_of(&self, component_id: u64) -> Result<Option<&HierarchyNode>, Error> {
        self.find(component_id).map(|location| location.parent)
    }

    /// Returns `true` if a component with the given `component_id` exists.
    pub fn contains(&self, component_id: u64) -> bool {
        self.components().any(|n| n.id == component_id)
    }

    /// Returns the root nodes of the hierarchy.
    pub fn roots(&self) -> &[HierarchyNode] {
        &self.roots
    }

    /// Returns a depth-first, pre-order iterator over all components.
    pub fn components(&self) -> Components<'_> {
        Components::new(&self.roots)
    }

    /// Returns the number of components in the hierarchy.
    pub fn len(&self) -> usize {
        self.components().count()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

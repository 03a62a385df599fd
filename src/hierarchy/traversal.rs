// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the topology queries used by the load management:
//! which counters limit a component, and which charge points a counter
//! supplies.

use crate::{
    iterators::Components, ComponentHierarchy, ComponentRef, ComponentType, Error, Publisher,
};

use super::HierarchyNode;

/// Returns the largest component id in `roots`, at any depth, or `floor` if
/// there are no components.
///
/// Callers use one more than the returned value as the id of a new component.
/// The result is an `i128`, so that both a negative `floor` and every `u64`
/// id are represented exactly.
pub fn next_free_id(roots: &[HierarchyNode], floor: i128) -> i128 {
    max_component_id(roots).map_or(floor, i128::from)
}

/// Returns the largest component id in `roots`, at any depth.
pub(crate) fn max_component_id(roots: &[HierarchyNode]) -> Option<u64> {
    Components::new(roots).map(|n| n.id).max()
}

/// Traversal methods.
impl<P> ComponentHierarchy<P>
where
    P: Publisher,
{
    /// Returns the ids of all ancestors of the component with the given
    /// `component_id`, starting with its parent and ending with the root of
    /// its tree.
    ///
    /// Returns an empty list for roots, and an error if the component doesn't
    /// exist.
    pub fn ancestor_chain_of(&self, component_id: u64) -> Result<Vec<u64>, Error> {
        let path = self.path_to(component_id)?;
        let mut nodes = self.nodes_on_path(&path)?;
        nodes.pop();

        Ok(nodes.iter().rev().map(|n| n.id).collect())
    }

    /// Returns the ids of all charge points below the component with the
    /// given `component_id`, in depth-first pre-order.
    ///
    /// Only the subtree of the component is searched.  Nested counters are
    /// descended into, but not part of the result.
    pub fn chargepoints_under(&self, component_id: u64) -> Result<Vec<u64>, Error> {
        let node = self.entry_of(component_id)?;

        Ok(Components::new(&node.children)
            .filter(|n| n.component_type.is_chargepoint())
            .map(|n| n.id)
            .collect())
    }

    /// Returns the largest component id in the hierarchy, or `floor` if it is
    /// empty.
    pub fn next_free_id(&self, floor: i128) -> i128 {
        next_free_id(&self.roots, floor)
    }

    /// Returns the largest component id in the hierarchy, or `None` if it is
    /// empty.
    pub fn max_component_id(&self) -> Option<u64> {
        max_component_id(&self.roots)
    }

    /// Same as [`ancestor_chain_of`][Self::ancestor_chain_of], for callers
    /// that address components by string identifiers.
    ///
    /// Accepts `cp5` as well as a bare `5`, and returns the ancestors as
    /// counter identifiers, e.g. `["counter4", "counter2", "counter0"]`.
    pub fn counters_to_check(&self, component: &str) -> Result<Vec<ComponentRef>, Error> {
        let component_id = ComponentRef::parse_id(component)?;

        Ok(self
            .ancestor_chain_of(component_id)?
            .into_iter()
            .map(|id| ComponentRef::new(ComponentType::Counter, id))
            .collect())
    }

    /// Same as [`chargepoints_under`][Self::chargepoints_under], for callers
    /// that address components by string identifiers.
    ///
    /// Accepts `counter2` as well as a bare `2`, and returns charge point
    /// identifiers, e.g. `["cp3", "cp5", "cp6"]`.
    pub fn chargepoints_of_counter(&self, counter: &str) -> Result<Vec<ComponentRef>, Error> {
        let counter_id = ComponentRef::parse_id(counter)?;

        Ok(self
            .chargepoints_under(counter_id)?
            .into_iter()
            .map(|id| ComponentRef::new(ComponentType::ChargePoint, id))
            .collect())
    }
}

// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A handle for sharing one [`ComponentHierarchy`] between the control loop
//! and the configuration handlers.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::{ComponentHierarchy, ComponentRef, ComponentType, Error, HierarchyNode, Publisher};

/// A cloneable handle to a [`ComponentHierarchy`] behind a read-write lock.
///
/// Queries hold the read lock, edits hold the write lock for the whole edit
/// including its broadcast.  Queries therefore never see a half-applied
/// edit, and the published hierarchies arrive in the order of the edits.
pub struct SharedHierarchy<P>
where
    P: Publisher,
{
    inner: Arc<RwLock<ComponentHierarchy<P>>>,
}

impl<P> Clone for SharedHierarchy<P>
where
    P: Publisher,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> From<ComponentHierarchy<P>> for SharedHierarchy<P>
where
    P: Publisher,
{
    fn from(hierarchy: ComponentHierarchy<P>) -> Self {
        Self::new(hierarchy)
    }
}

impl<P> SharedHierarchy<P>
where
    P: Publisher,
{
    pub fn new(hierarchy: ComponentHierarchy<P>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(hierarchy)),
        }
    }

    /// Locks the hierarchy for reading, for running several queries against
    /// the same state.  Edits wait until the guard is dropped.
    pub fn read(&self) -> RwLockReadGuard<'_, ComponentHierarchy<P>> {
        self.inner.read()
    }

    /// Returns a copy of the current root nodes.
    pub fn snapshot(&self) -> Vec<HierarchyNode> {
        self.inner.read().roots().to_vec()
    }

    pub fn insert_below(
        &self,
        new_id: u64,
        component_type: ComponentType,
        target_id: u64,
    ) -> Result<(), Error> {
        self.inner
            .write()
            .insert_below(new_id, component_type, target_id)
    }

    pub fn insert_root(&self, new_id: u64, component_type: ComponentType) -> Result<(), Error> {
        self.inner.write().insert_root(new_id, component_type)
    }

    /// Allocates an id and inserts the new component under a single write
    /// lock, so concurrent callers never receive the same id.
    pub fn add_component_below(
        &self,
        component_type: ComponentType,
        target_id: u64,
    ) -> Result<u64, Error> {
        self.inner
            .write()
            .add_component_below(component_type, target_id)
    }

    pub fn remove(&self, component_id: u64, keep_children: bool) -> Result<(), Error> {
        self.inner.write().remove(component_id, keep_children)
    }

    pub fn entry_of(&self, component_id: u64) -> Result<HierarchyNode, Error> {
        self.inner.read().entry_of(component_id).cloned()
    }

    pub fn parent_of(&self, component_id: u64) -> Result<Option<HierarchyNode>, Error> {
        self.inner
            .read()
            .parent_of(component_id)
            .map(|parent| parent.cloned())
    }

    pub fn ancestor_chain_of(&self, component_id: u64) -> Result<Vec<u64>, Error> {
        self.inner.read().ancestor_chain_of(component_id)
    }

    pub fn chargepoints_under(&self, component_id: u64) -> Result<Vec<u64>, Error> {
        self.inner.read().chargepoints_under(component_id)
    }

    pub fn counters_to_check(&self, component: &str) -> Result<Vec<ComponentRef>, Error> {
        self.inner.read().counters_to_check(component)
    }

    pub fn chargepoints_of_counter(&self, counter: &str) -> Result<Vec<ComponentRef>, Error> {
        self.inner.read().chargepoints_of_counter(counter)
    }

    pub fn next_free_id(&self, floor: i128) -> i128 {
        self.inner.read().next_free_id(floor)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        self.inner.read().to_json()
    }
}

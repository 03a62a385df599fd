// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for creating [`ComponentHierarchy`] instances, and for converting
//! them back into the nested record format they are loaded from.

use crate::{ComponentHierarchyConfig, Error, Publisher};

use super::{validation::validate_unique_ids, ComponentHierarchy, HierarchyNode};

/// `ComponentHierarchy` instantiation.
impl<P> ComponentHierarchy<P>
where
    P: Publisher,
{
    /// Creates an empty hierarchy.
    pub fn new(publisher: P, config: ComponentHierarchyConfig) -> Self {
        Self {
            roots: Vec::new(),
            publisher,
            config,
        }
    }

    /// Creates a new [`ComponentHierarchy`] from the given root nodes.
    ///
    /// Returns an error if a component id appears more than once.
    pub fn try_new(
        roots: impl IntoIterator<Item = HierarchyNode>,
        publisher: P,
        config: ComponentHierarchyConfig,
    ) -> Result<Self, Error> {
        let roots: Vec<HierarchyNode> = roots.into_iter().collect();
        validate_unique_ids(&roots)?;

        Ok(Self {
            roots,
            publisher,
            config,
        })
    }

    /// Creates a new [`ComponentHierarchy`] from its JSON representation, a
    /// list of `{"id": .., "type": .., "children": [..]}` records.
    pub fn try_from_json(
        json: &str,
        publisher: P,
        config: ComponentHierarchyConfig,
    ) -> Result<Self, Error> {
        let roots: Vec<HierarchyNode> = serde_json::from_str(json)?;
        Self::try_new(roots, publisher, config)
    }

    /// Serializes the hierarchy into the format accepted by
    /// [`try_from_json`][Self::try_from_json].
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(&self.roots)?)
    }

    pub fn config(&self) -> &ComponentHierarchyConfig {
        &self.config
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }
}

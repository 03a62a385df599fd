// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A forest representation of the electrical components that are part of a
//! site, where every counter owns the components it supplies.

mod creation;
mod editing;
mod node;
mod retrieval;
mod traversal;
mod validation;

pub mod iterators;

#[cfg(test)]
mod test_utils;

pub use node::HierarchyNode;
pub use retrieval::Location;
pub use traversal::next_free_id;

use crate::{ComponentHierarchyConfig, NoopPublisher, Publisher};

/// An ordered forest of components, rooted at the top-level meters of a site.
///
/// Component ids are unique across the whole forest.  Nodes own their
/// children; parents and ancestors are found by searching from the roots.
pub struct ComponentHierarchy<P = NoopPublisher>
where
    P: Publisher,
{
    roots: Vec<HierarchyNode>,
    publisher: P,
    config: ComponentHierarchyConfig,
}

impl<P> std::fmt::Debug for ComponentHierarchy<P>
where
    P: Publisher,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentHierarchy")
            .field("roots", &self.roots)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

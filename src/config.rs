// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the configuration options for the
//! `ComponentHierarchy`.

/// The topic the hierarchy is broadcast on, unless configured otherwise.
pub const DEFAULT_HIERARCHY_TOPIC: &str = "openWB/counter/get/hierarchy";

/// Configuration options for the `ComponentHierarchy`.
#[derive(Clone, Debug)]
pub struct ComponentHierarchyConfig {
    /// The topic the full hierarchy is published on after every successful
    /// mutation.
    pub topic: String,

    /// Whether `insert_below` should refuse ids that already exist in the
    /// hierarchy.  When this is `false`, keeping ids unique is left to the
    /// caller.
    pub reject_duplicate_ids: bool,
}

impl Default for ComponentHierarchyConfig {
    fn default() -> Self {
        Self {
            topic: DEFAULT_HIERARCHY_TOPIC.to_string(),
            reject_duplicate_ids: false,
        }
    }
}

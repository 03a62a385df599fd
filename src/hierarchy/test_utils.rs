// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains features
//! that are shared by all tests of the `hierarchy` module.
//!
//! - constructors for nodes of each component type,
//! - the fixture hierarchies the tests are written against,
//! - the `RecordingPublisher`, which remembers every broadcast.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{ComponentHierarchy, ComponentHierarchyConfig, ComponentType, Error, Publisher};

use super::HierarchyNode;

pub(crate) fn counter(id: u64, children: Vec<HierarchyNode>) -> HierarchyNode {
    HierarchyNode::new(id, ComponentType::Counter).with_children(children)
}

pub(crate) fn cp(id: u64) -> HierarchyNode {
    HierarchyNode::new(id, ComponentType::ChargePoint)
}

pub(crate) fn inverter(id: u64) -> HierarchyNode {
    HierarchyNode::new(id, ComponentType::Inverter)
}

/// A publisher that records every `(topic, payload)` pair it is given.
///
/// Clones share the same record, so a test can keep one clone and hand the
/// other to the hierarchy.
#[derive(Clone, Default)]
pub(crate) struct RecordingPublisher {
    messages: Arc<Mutex<Vec<(String, String)>>>,
    fail: bool,
}

impl RecordingPublisher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A publisher that records messages, but reports every publish as failed.
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub(crate) fn messages(&self) -> Vec<(String, String)> {
        self.messages.lock().clone()
    }

    /// Returns the last published payload, parsed back into nodes.
    pub(crate) fn last_hierarchy(&self) -> Option<Vec<HierarchyNode>> {
        let messages = self.messages.lock();
        let (_, payload) = messages.last()?;
        serde_json::from_str(payload).ok()
    }
}

impl Publisher for RecordingPublisher {
    fn publish(&self, topic: &str, payload: &str) -> Result<(), Error> {
        self.messages
            .lock()
            .push((topic.to_string(), payload.to_string()));
        if self.fail {
            return Err(Error::publish("broker unreachable"));
        }
        Ok(())
    }
}

fn build(roots: Vec<HierarchyNode>) -> ComponentHierarchy<RecordingPublisher> {
    ComponentHierarchy::try_new(
        roots,
        RecordingPublisher::new(),
        ComponentHierarchyConfig::default(),
    )
    .expect("fixture hierarchies have unique ids")
}

/// `[]`
pub(crate) fn hierarchy_empty() -> ComponentHierarchy<RecordingPublisher> {
    build(vec![])
}

/// `counter0`
pub(crate) fn hierarchy_one_level() -> ComponentHierarchy<RecordingPublisher> {
    build(vec![counter(0, vec![])])
}

/// `counter0 -> cp2`, followed by the root `inverter7`.
pub(crate) fn hierarchy_two_level() -> ComponentHierarchy<RecordingPublisher> {
    build(vec![counter(0, vec![cp(2)]), inverter(7)])
}

/// ```text
/// counter0
/// ├── inverter7
/// └── counter2
///     ├── cp3
///     └── counter4
///         ├── cp5
///         └── cp6
/// ```
pub(crate) fn hierarchy_cp() -> ComponentHierarchy<RecordingPublisher> {
    build(vec![counter(
        0,
        vec![
            inverter(7),
            counter(2, vec![cp(3), counter(4, vec![cp(5), cp(6)])]),
        ],
    )])
}

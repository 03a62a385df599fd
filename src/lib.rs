// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

/*!
# Microgrid Component Hierarchy

This is a library for representing the power supply topology of a site as a
forest: every counter (meter) owns the components it supplies, which can be
charge points, inverters, batteries or further counters.

The load management uses this topology to decide which counters have to be
checked before a component may draw more power, and which charge points are
supplied through a given counter.

## The `ComponentHierarchy`

The main struct is [`ComponentHierarchy`], instances of which are created
empty with [`new`][ComponentHierarchy::new], from root nodes with
[`try_new`][ComponentHierarchy::try_new], or from the nested JSON records the
hierarchy is persisted and broadcast as, with
[`try_from_json`][ComponentHierarchy::try_from_json]:

```json
[{"id": 0, "type": "counter", "children": [{"id": 2, "type": "cp", "children": []}]}]
```

Component ids must be unique across the whole forest.  Loading a forest with
duplicate ids fails.

## Editing

- [`insert_below`][ComponentHierarchy::insert_below] appends a new component
  as the last child of an existing one.
- [`remove`][ComponentHierarchy::remove] deletes a component, and either
  promotes its children to its parent, or discards its whole subtree.

After every successful edit, the complete hierarchy is sent through the
[`Publisher`] the hierarchy was created with.

## Queries

- [`entry_of`][ComponentHierarchy::entry_of]
- [`parent_of`][ComponentHierarchy::parent_of]
- [`ancestor_chain_of`][ComponentHierarchy::ancestor_chain_of]
- [`chargepoints_under`][ComponentHierarchy::chargepoints_under]
- [`next_free_id`][ComponentHierarchy::next_free_id]

Callers that address components by strings like `counter2` or `cp5` can use
[`counters_to_check`][ComponentHierarchy::counters_to_check] and
[`chargepoints_of_counter`][ComponentHierarchy::chargepoints_of_counter].

## Sharing

A [`SharedHierarchy`] wraps a hierarchy in a read-write lock, so that it can
be queried by the control loop and edited by configuration handlers running
on other threads.
*/

mod component_ref;
pub use component_ref::ComponentRef;

mod component_type;
pub use component_type::ComponentType;

mod hierarchy;
pub use hierarchy::{iterators, next_free_id, ComponentHierarchy, HierarchyNode, Location};

mod publisher;
pub use publisher::{NoopPublisher, Publisher};

mod shared;
pub use shared::SharedHierarchy;

mod config;
pub use config::{ComponentHierarchyConfig, DEFAULT_HIERARCHY_TOPIC};

mod error;
pub use error::{Error, ErrorKind};

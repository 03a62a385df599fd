// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the trait that needs to be implemented by the type
//! that broadcasts the hierarchy after it changes.

use crate::Error;

/**
This trait needs to be implemented by the type that sends the serialized
hierarchy to the message bus.

After every successful `insert_below` or `remove`, the
[`ComponentHierarchy`][crate::ComponentHierarchy] serializes its complete
forest to JSON and calls [`publish`][Publisher::publish] with the configured
topic.  Errors are logged by the hierarchy and do not undo the mutation.

Closures with the signature `Fn(&str, &str) -> Result<(), Error>` implement
this trait, which is convenient for wiring the hierarchy to a client that is
owned elsewhere:

```
use microgrid_component_hierarchy::{
    ComponentHierarchy, ComponentHierarchyConfig, ComponentType, Error,
};

let publisher = |topic: &str, payload: &str| -> Result<(), Error> {
    println!("{topic}: {payload}");
    Ok(())
};
let mut hierarchy = ComponentHierarchy::try_from_json(
    r#"[{"id": 0, "type": "counter", "children": []}]"#,
    publisher,
    ComponentHierarchyConfig::default(),
)?;
hierarchy.insert_below(1, ComponentType::ChargePoint, 0)?;
# Ok::<(), Error>(())
```
*/
pub trait Publisher {
    /// Sends `payload` to `topic`.
    fn publish(&self, topic: &str, payload: &str) -> Result<(), Error>;
}

impl<F> Publisher for F
where
    F: Fn(&str, &str) -> Result<(), Error>,
{
    fn publish(&self, topic: &str, payload: &str) -> Result<(), Error> {
        self(topic, payload)
    }
}

/// A [`Publisher`] that drops every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopPublisher;

impl Publisher for NoopPublisher {
    fn publish(&self, _topic: &str, _payload: &str) -> Result<(), Error> {
        Ok(())
    }
}

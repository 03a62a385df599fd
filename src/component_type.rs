// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `ComponentType` enum, which represents the role a
//! component plays in the hierarchy.

use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use crate::Error;

/// Represents the type of a component.
///
/// Every type has a short tag (`counter`, `cp`, ...), which is used both in
/// the serialized hierarchy and as the prefix of string identifiers like
/// `counter2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    /// A meter.  Counters supply, and therefore parent, other components.
    #[serde(rename = "counter")]
    Counter,
    #[serde(rename = "cp")]
    ChargePoint,
    #[serde(rename = "inverter")]
    Inverter,
    #[serde(rename = "bat")]
    Battery,
}

impl ComponentType {
    /// All component types, in the order their tags are tried when parsing.
    pub const ALL: [ComponentType; 4] = [
        ComponentType::Counter,
        ComponentType::ChargePoint,
        ComponentType::Inverter,
        ComponentType::Battery,
    ];

    /// Returns the tag of the component type.
    pub fn tag(&self) -> &'static str {
        match self {
            ComponentType::Counter => "counter",
            ComponentType::ChargePoint => "cp",
            ComponentType::Inverter => "inverter",
            ComponentType::Battery => "bat",
        }
    }

    /// Returns true if the component is a counter.
    pub fn is_counter(&self) -> bool {
        *self == ComponentType::Counter
    }

    /// Returns true if the component is a charge point.
    pub fn is_chargepoint(&self) -> bool {
        *self == ComponentType::ChargePoint
    }
}

impl Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for ComponentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.tag() == s)
            .ok_or_else(|| Error::invalid_component(format!("Unknown component type: {s:?}")))
    }
}

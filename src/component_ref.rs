// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! String identifiers of the form `<type tag><id>`, e.g. `counter2` or `cp5`.
//!
//! These only exist at the boundary to callers that address components by
//! such strings.  Inside the hierarchy, components are always addressed by
//! their numeric id.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt::Display, str::FromStr};

use crate::{ComponentType, Error};

/// A component id together with its type, formatted as `<type tag><id>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ComponentRef {
    pub component_type: ComponentType,
    pub id: u64,
}

impl ComponentRef {
    pub fn new(component_type: ComponentType, id: u64) -> Self {
        Self { component_type, id }
    }

    /// Extracts the numeric id from either a prefixed identifier like
    /// `counter2`, or a bare id like `2`.
    pub fn parse_id(s: &str) -> Result<u64, Error> {
        let s = s.trim();
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            return parse_digits(s, s);
        }
        s.parse::<ComponentRef>().map(|r| r.id)
    }
}

fn parse_digits(digits: &str, input: &str) -> Result<u64, Error> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid_component(format!(
            "Invalid component identifier: {input:?}"
        )));
    }
    digits.parse().map_err(|_| {
        Error::invalid_component(format!("Component id out of range: {input:?}"))
    })
}

impl Display for ComponentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.component_type.tag(), self.id)
    }
}

impl FromStr for ComponentRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        for component_type in ComponentType::ALL {
            if let Some(digits) = s.strip_prefix(component_type.tag()) {
                if digits.bytes().next().is_some_and(|b| b.is_ascii_digit()) {
                    return Ok(Self::new(component_type, parse_digits(digits, s)?));
                }
            }
        }
        Err(Error::invalid_component(format!(
            "Invalid component identifier: {s:?}"
        )))
    }
}

impl Serialize for ComponentRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ComponentRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() -> Result<(), Error> {
        assert_eq!(
            "counter2".parse::<ComponentRef>()?,
            ComponentRef::new(ComponentType::Counter, 2)
        );
        assert_eq!(
            "cp15".parse::<ComponentRef>()?,
            ComponentRef::new(ComponentType::ChargePoint, 15)
        );
        assert_eq!(
            "bat0".parse::<ComponentRef>()?,
            ComponentRef::new(ComponentType::Battery, 0)
        );

        for invalid in ["counter", "2", "meter2", "cp-1", "cp1a", ""] {
            assert_eq!(
                invalid.parse::<ComponentRef>(),
                Err(Error::invalid_component(format!(
                    "Invalid component identifier: {invalid:?}"
                )))
            );
        }

        assert!("cp99999999999999999999"
            .parse::<ComponentRef>()
            .is_err_and(|e| e.to_string().contains("out of range")));

        Ok(())
    }

    #[test]
    fn test_parse_id() -> Result<(), Error> {
        assert_eq!(ComponentRef::parse_id("counter4")?, 4);
        assert_eq!(ComponentRef::parse_id("4")?, 4);
        assert_eq!(ComponentRef::parse_id(" 12 ")?, 12);
        assert!(ComponentRef::parse_id("four").is_err());
        Ok(())
    }

    #[test]
    fn test_display_and_serde() -> Result<(), Error> {
        let cp = ComponentRef::new(ComponentType::ChargePoint, 3);
        assert_eq!(cp.to_string(), "cp3");
        assert_eq!(serde_json::to_string(&cp)?, "\"cp3\"");
        assert_eq!(serde_json::from_str::<ComponentRef>("\"cp3\"")?, cp);
        Ok(())
    }
}

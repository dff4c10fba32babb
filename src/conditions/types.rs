//! Condition types and statuses shared by every condition variant.

use std::borrow::Cow;
use std::convert::Infallible;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Identifies a condition's slot within a conditions list.
///
/// The well-known types cover the common operator contract. Any other string
/// is carried as [`ConditionType::Other`]. Equality and hashing go through
/// [`ConditionType::as_str`], so `Other("Available".into())` and
/// `Available` are the same type.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ConditionType {
    /// The resource is fully functional.
    Available,
    /// The resource is moving towards its desired state.
    Progressing,
    /// The resource is running below its desired quality of service.
    Degraded,
    /// The resource can be safely upgraded.
    Upgradeable,
    /// Any caller-defined condition type.
    Other(String),
}

impl ConditionType {
    /// The wire name of this condition type.
    pub fn as_str(&self) -> &str {
        match self {
            ConditionType::Available => "Available",
            ConditionType::Progressing => "Progressing",
            ConditionType::Degraded => "Degraded",
            ConditionType::Upgradeable => "Upgradeable",
            ConditionType::Other(name) => name,
        }
    }
}

impl std::fmt::Display for ConditionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq for ConditionType {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ConditionType {}

impl Hash for ConditionType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for ConditionType {
    fn from(name: &str) -> Self {
        match name {
            "Available" => ConditionType::Available,
            "Progressing" => ConditionType::Progressing,
            "Degraded" => ConditionType::Degraded,
            "Upgradeable" => ConditionType::Upgradeable,
            other => ConditionType::Other(other.to_string()),
        }
    }
}

impl From<String> for ConditionType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Available" | "Progressing" | "Degraded" | "Upgradeable" => {
                ConditionType::from(name.as_str())
            }
            _ => ConditionType::Other(name),
        }
    }
}

impl From<ConditionType> for String {
    fn from(condition_type: ConditionType) -> Self {
        match condition_type {
            ConditionType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for ConditionType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ConditionType::from(s))
    }
}

impl JsonSchema for ConditionType {
    fn schema_name() -> Cow<'static, str> {
        "ConditionType".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        String::json_schema(generator)
    }
}

/// Status of a condition.
///
/// By convention one of "True", "False" or "Unknown". Any other string read
/// from a stored status is kept as [`ConditionStatus::Other`] so the list can
/// be written back unchanged. Equality and hashing go through
/// [`ConditionStatus::as_str`].
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ConditionStatus {
    True,
    False,
    Unknown,
    /// A status outside the True/False/Unknown convention.
    Other(String),
}

impl ConditionStatus {
    /// The wire name of this status.
    pub fn as_str(&self) -> &str {
        match self {
            ConditionStatus::True => "True",
            ConditionStatus::False => "False",
            ConditionStatus::Unknown => "Unknown",
            ConditionStatus::Other(status) => status,
        }
    }
}

impl std::fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq for ConditionStatus {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ConditionStatus {}

impl Hash for ConditionStatus {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<bool> for ConditionStatus {
    fn from(status: bool) -> Self {
        if status {
            ConditionStatus::True
        } else {
            ConditionStatus::False
        }
    }
}

impl From<String> for ConditionStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "True" => ConditionStatus::True,
            "False" => ConditionStatus::False,
            "Unknown" => ConditionStatus::Unknown,
            _ => ConditionStatus::Other(status),
        }
    }
}

impl From<ConditionStatus> for String {
    fn from(status: ConditionStatus) -> Self {
        match status {
            ConditionStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

/// Strict parsing: only the three conventional statuses are accepted.
impl FromStr for ConditionStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "True" => Ok(ConditionStatus::True),
            "False" => Ok(ConditionStatus::False),
            "Unknown" => Ok(ConditionStatus::Unknown),
            other => Err(Error::InvalidConditionStatus(other.to_string())),
        }
    }
}

impl JsonSchema for ConditionStatus {
    fn schema_name() -> Cow<'static, str> {
        "ConditionStatus".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        String::json_schema(generator)
    }
}

/// A record that can live in a conditions list.
///
/// Implemented by every condition variant so the find, remove and query
/// helpers are shared between them.
pub trait StatusCondition {
    /// The type keying this condition's slot.
    fn condition_type(&self) -> &ConditionType;

    /// The current status.
    fn status(&self) -> &ConditionStatus;
}

//! Status condition management.
//!
//! - `Condition`: the unversioned record (type, status, reason, message)
//! - `v1`: the timestamped record with heartbeat and transition tracking
//!
//! The find, remove and query helpers here are generic over
//! [`StatusCondition`] and work on either variant. A list holds at most one
//! condition per [`ConditionType`]; new conditions are appended and replaced
//! ones keep their position.

mod types;
pub mod v1;

pub use types::{ConditionStatus, ConditionType, StatusCondition};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Condition without timestamps.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Type of condition.
    pub r#type: ConditionType,
    /// Status of the condition.
    pub status: ConditionStatus,
    /// Machine-readable reason for the condition's status.
    #[serde(default)]
    pub reason: String,
    /// Human-readable details about the condition's status.
    #[serde(default)]
    pub message: String,
}

impl Condition {
    /// Create a new condition.
    pub fn new(
        condition_type: impl Into<ConditionType>,
        status: impl Into<ConditionStatus>,
        reason: &str,
        message: &str,
    ) -> Self {
        Self {
            r#type: condition_type.into(),
            status: status.into(),
            reason: reason.to_string(),
            message: message.to_string(),
        }
    }
}

impl StatusCondition for Condition {
    fn condition_type(&self) -> &ConditionType {
        &self.r#type
    }

    fn status(&self) -> &ConditionStatus {
        &self.status
    }
}

/// Add `new_condition` to `conditions`, or overwrite the existing condition of
/// the same type in place.
pub fn set_status_condition(conditions: &mut Vec<Condition>, new_condition: Condition) {
    match find_status_condition_mut(conditions, &new_condition.r#type) {
        Some(existing) => {
            debug!(
                condition_type = %new_condition.r#type,
                status = %new_condition.status,
                "Replacing condition"
            );
            *existing = new_condition;
        }
        None => {
            debug!(
                condition_type = %new_condition.r#type,
                status = %new_condition.status,
                "Adding condition"
            );
            conditions.push(new_condition);
        }
    }
}

/// Find the condition of `condition_type`.
pub fn find_status_condition<'a, C: StatusCondition>(
    conditions: &'a [C],
    condition_type: &ConditionType,
) -> Option<&'a C> {
    conditions
        .iter()
        .find(|c| c.condition_type() == condition_type)
}

/// Find the condition of `condition_type` for in-place modification.
pub fn find_status_condition_mut<'a, C: StatusCondition>(
    conditions: &'a mut [C],
    condition_type: &ConditionType,
) -> Option<&'a mut C> {
    conditions
        .iter_mut()
        .find(|c| c.condition_type() == condition_type)
}

/// Remove every condition of `condition_type`.
pub fn remove_status_condition<C: StatusCondition>(
    conditions: &mut Vec<C>,
    condition_type: &ConditionType,
) {
    let before = conditions.len();
    conditions.retain(|c| c.condition_type() != condition_type);
    if conditions.len() != before {
        debug!(condition_type = %condition_type, "Removed condition");
    }
}

/// Check if `condition_type` is present with `status`.
pub fn is_status_condition_present_and_equal<C: StatusCondition>(
    conditions: &[C],
    condition_type: &ConditionType,
    status: ConditionStatus,
) -> bool {
    find_status_condition(conditions, condition_type).is_some_and(|c| *c.status() == status)
}

/// Check if `condition_type` is present and "True".
pub fn is_status_condition_true<C: StatusCondition>(
    conditions: &[C],
    condition_type: &ConditionType,
) -> bool {
    is_status_condition_present_and_equal(conditions, condition_type, ConditionStatus::True)
}

/// Check if `condition_type` is present and "False".
pub fn is_status_condition_false<C: StatusCondition>(
    conditions: &[C],
    condition_type: &ConditionType,
) -> bool {
    is_status_condition_present_and_equal(conditions, condition_type, ConditionStatus::False)
}

/// Check if `condition_type` is present and "Unknown".
pub fn is_status_condition_unknown<C: StatusCondition>(
    conditions: &[C],
    condition_type: &ConditionType,
) -> bool {
    is_status_condition_present_and_equal(conditions, condition_type, ConditionStatus::Unknown)
}

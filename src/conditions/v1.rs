//! Timestamped conditions.
//!
//! A `v1::Condition` records when its status last changed
//! (`last_transition_time`) and when it was last observed
//! (`last_heartbeat_time`). The setters differ only in how they advance the
//! heartbeat:
//!
//! - [`set_status_condition`]: every call is an observation
//! - [`set_status_condition_v2`]: only a status change, or a forced
//!   heartbeat, is an observation
//! - [`set_status_condition_no_heartbeat`]: the heartbeat is left alone
//!
//! A heartbeat that stops advancing while the status holds still lets
//! consumers tell "nothing changed" apart from "nobody is checking".

use jiff::Timestamp;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub use super::{
    ConditionStatus, ConditionType, StatusCondition, find_status_condition,
    find_status_condition_mut, is_status_condition_false, is_status_condition_present_and_equal,
    is_status_condition_true, is_status_condition_unknown, remove_status_condition,
};

/// Condition with heartbeat and transition timestamps.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
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
    /// Last time the condition was observed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_heartbeat_time: Option<Time>,
    /// Last time the condition transitioned from one status to another.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<Time>,
}

impl Condition {
    /// Create a new condition with no timestamps set.
    ///
    /// The setters stamp the timestamps when the condition is stored.
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
            last_heartbeat_time: None,
            last_transition_time: None,
        }
    }

    /// Create an "Available" condition.
    pub fn available(available: bool, reason: &str, message: &str) -> Self {
        Self::new(ConditionType::Available, available, reason, message)
    }

    /// Create a "Progressing" condition.
    pub fn progressing(progressing: bool, reason: &str, message: &str) -> Self {
        Self::new(ConditionType::Progressing, progressing, reason, message)
    }

    /// Create a "Degraded" condition.
    pub fn degraded(degraded: bool, reason: &str, message: &str) -> Self {
        Self::new(ConditionType::Degraded, degraded, reason, message)
    }

    /// Create an "Upgradeable" condition.
    pub fn upgradeable(upgradeable: bool, reason: &str, message: &str) -> Self {
        Self::new(ConditionType::Upgradeable, upgradeable, reason, message)
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

/// When a setter advances `last_heartbeat_time`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Heartbeat {
    /// On every insert or update.
    Always,
    /// On insert, on a status change, or when forced.
    OnChange { force: bool },
    /// Never.
    Never,
}

impl Heartbeat {
    fn on_insert(self) -> bool {
        !matches!(self, Heartbeat::Never)
    }

    fn on_update(self, status_changed: bool) -> bool {
        match self {
            Heartbeat::Always => true,
            Heartbeat::OnChange { force } => force || status_changed,
            Heartbeat::Never => false,
        }
    }
}

fn now() -> Time {
    Time(Timestamp::now())
}

fn upsert(conditions: &mut Vec<Condition>, mut new_condition: Condition, heartbeat: Heartbeat) {
    let now = now();

    let Some(existing) = find_status_condition_mut(conditions, &new_condition.r#type) else {
        debug!(
            condition_type = %new_condition.r#type,
            status = %new_condition.status,
            "Adding condition"
        );
        new_condition.last_transition_time = Some(now.clone());
        if heartbeat.on_insert() {
            new_condition.last_heartbeat_time = Some(now);
        }
        conditions.push(new_condition);
        return;
    };

    let status_changed = existing.status != new_condition.status;
    if status_changed {
        debug!(
            condition_type = %existing.r#type,
            from = %existing.status,
            to = %new_condition.status,
            "Condition status changed"
        );
        existing.status = new_condition.status;
        existing.last_transition_time = Some(now.clone());
    }

    existing.reason = new_condition.reason;
    existing.message = new_condition.message;

    if heartbeat.on_update(status_changed) {
        existing.last_heartbeat_time = Some(now);
    } else {
        trace!(
            condition_type = %existing.r#type,
            "Condition status unchanged, keeping heartbeat"
        );
    }
}

/// Add or update a condition, stamping the heartbeat on every call.
///
/// `last_transition_time` is set when the condition is added and whenever its
/// status changes.
pub fn set_status_condition(conditions: &mut Vec<Condition>, new_condition: Condition) {
    upsert(conditions, new_condition, Heartbeat::Always);
}

/// Add or update a condition, stamping the heartbeat only when the status
/// changes or `force_heartbeat` is set.
///
/// Re-observing an unchanged status updates reason and message but leaves
/// both timestamps as they were. A newly added condition is always stamped.
pub fn set_status_condition_v2(
    conditions: &mut Vec<Condition>,
    new_condition: Condition,
    force_heartbeat: bool,
) {
    upsert(
        conditions,
        new_condition,
        Heartbeat::OnChange {
            force: force_heartbeat,
        },
    );
}

/// Add or update a condition without touching `last_heartbeat_time`.
pub fn set_status_condition_no_heartbeat(conditions: &mut Vec<Condition>, new_condition: Condition) {
    upsert(conditions, new_condition, Heartbeat::Never);
}

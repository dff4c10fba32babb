//! Status management utilities.
//!
//! Provides a builder for updating a timestamped conditions list in one pass.

use crate::conditions::v1::{
    self, Condition, set_status_condition, set_status_condition_no_heartbeat,
    set_status_condition_v2,
};
use crate::conditions::{ConditionType, remove_status_condition};

/// Builder for managing a conditions list.
///
/// Seed it with the conditions read from the current status so timestamps
/// and positions carry over, apply updates, then write `build()` back.
#[derive(Clone, Debug, Default)]
pub struct ConditionsBuilder {
    conditions: Vec<Condition>,
}

impl ConditionsBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder seeded with existing conditions
    pub fn from_conditions(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    /// Add or update a condition, stamping the heartbeat
    pub fn set(&mut self, condition: Condition) -> &mut Self {
        set_status_condition(&mut self.conditions, condition);
        self
    }

    /// Add or update a condition, stamping the heartbeat only on a status
    /// change or when forced
    pub fn observe(&mut self, condition: Condition, force_heartbeat: bool) -> &mut Self {
        set_status_condition_v2(&mut self.conditions, condition, force_heartbeat);
        self
    }

    /// Add or update a condition without touching the heartbeat
    pub fn set_no_heartbeat(&mut self, condition: Condition) -> &mut Self {
        set_status_condition_no_heartbeat(&mut self.conditions, condition);
        self
    }

    /// Remove a condition
    pub fn remove(&mut self, condition_type: &ConditionType) -> &mut Self {
        remove_status_condition(&mut self.conditions, condition_type);
        self
    }

    /// Set Available condition
    pub fn available(&mut self, available: bool, reason: &str, message: &str) -> &mut Self {
        self.set(Condition::available(available, reason, message))
    }

    /// Set Progressing condition
    pub fn progressing(&mut self, progressing: bool, reason: &str, message: &str) -> &mut Self {
        self.set(Condition::progressing(progressing, reason, message))
    }

    /// Set Degraded condition
    pub fn degraded(&mut self, degraded: bool, reason: &str, message: &str) -> &mut Self {
        self.set(Condition::degraded(degraded, reason, message))
    }

    /// Set Upgradeable condition
    pub fn upgradeable(&mut self, upgradeable: bool, reason: &str, message: &str) -> &mut Self {
        self.set(Condition::upgradeable(upgradeable, reason, message))
    }

    /// Check if a condition type is currently true
    pub fn is_true(&self, condition_type: &ConditionType) -> bool {
        v1::is_status_condition_true(&self.conditions, condition_type)
    }

    /// Build the conditions list
    pub fn build(self) -> Vec<Condition> {
        self.conditions
    }
}

/// Get the reason for a condition
pub fn get_condition_reason<'a>(
    conditions: &'a [Condition],
    condition_type: &ConditionType,
) -> Option<&'a str> {
    v1::find_status_condition(conditions, condition_type).map(|c| c.reason.as_str())
}

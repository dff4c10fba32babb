//! custom-resource-status library crate
//!
//! Idempotent helpers for the two lists most custom resource statuses carry:
//! - `conditions`: typed health/state facts, at most one per condition type
//! - `object_references`: references to related objects, deduplicated by
//!   full structural equality
//!
//! All mutators take the list by `&mut Vec<T>` and update it in place. A
//! status struct that models the list as `Option<Vec<T>>` supplies storage
//! with `get_or_insert_with(Vec::new)` before inserting:
//!
//! ```
//! use custom_resource_status::conditions::{ConditionType, v1};
//!
//! let mut conditions: Option<Vec<v1::Condition>> = None;
//! v1::set_status_condition(
//!     conditions.get_or_insert_with(Vec::new),
//!     v1::Condition::available(true, "Deployed", "All replicas available"),
//! );
//!
//! let list = conditions.as_deref().unwrap_or_default();
//! assert!(v1::is_status_condition_true(list, &ConditionType::Available));
//! ```
//!
//! None of the helpers synchronize access. Callers serialize updates to a
//! given list, typically through the API server's optimistic concurrency.

pub mod conditions;
pub mod error;
pub mod object_references;
pub mod status;

pub use conditions::{ConditionStatus, ConditionType, StatusCondition};
pub use error::{Error, Result};
pub use status::ConditionsBuilder;

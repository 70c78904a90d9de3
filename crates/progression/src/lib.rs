//! Progressive overload scheduling.
//!
//! Pure computations over in-memory plans (schedule, increase, due check,
//! calendar annotation, plan building) plus a service that runs them
//! against a [`Storage`](overload_storage::Storage) backend using the
//! load-all / compute / save-all cycle.

#![warn(missing_docs)]

pub mod error;
pub mod schedule;
pub mod increase;
pub mod due;
pub mod calendar;
pub mod planner;
pub mod service;

pub use error::{ProgressionError, Result};
pub use schedule::{increase_schedule, validate_plan, HORIZON_MONTHS};
pub use increase::{apply_increases, AppliedIncrease, IncreaseFailure, IncreaseReport};
pub use due::{plans_due, skip_due};
pub use calendar::{annotate_calendar, prune_orphaned_markers, Annotation};
pub use planner::{build_plan, ExerciseSetup};
pub use service::{BasicProgressionService, ProgressionService, SavedPlan};

#[cfg(test)]
pub(crate) mod test_support;

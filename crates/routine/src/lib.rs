//! Routine library: workout days, bi-weekly workout plans and the
//! current workout.

#![warn(missing_docs)]

pub mod error;
pub mod slots;
pub mod library;

pub use error::{RoutineError, Result};
pub use slots::{slot_index, todays_slot, Week};
pub use library::{BasicRoutineLibrary, RoutineLibrary};

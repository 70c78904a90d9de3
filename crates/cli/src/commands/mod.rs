//! Subcommand handlers.

pub mod routine;
pub mod progression;
pub mod history;

use overload_core::ScheduleSlot;

/// One-line rendering of a schedule slot.
pub fn slot_label(slot: Option<&ScheduleSlot>) -> String {
    match slot {
        Some(slot) => format!("{} {}", slot.icon, slot.day_name),
        None => "-".to_string(),
    }
}

//! Merging increase dates into the calendar store.

use std::collections::{HashMap, HashSet};
use chrono::NaiveDate;
use overload_core::{CalendarEntry, ProgressionPlanId};

/// Counts from one [`annotate_calendar`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Annotation {
    /// Entries created
    pub inserted: usize,
    /// Existing entries claimed for the plan
    pub updated: usize,
}

/// Mark each date in `dates` as a progression increase for `plan_id`.
///
/// Existing entries keep their other fields but are claimed by `plan_id`,
/// overriding any earlier plan. Missing dates get a minimal progression
/// entry. Nothing is ever removed. Entries are kept sorted by date.
pub fn annotate_calendar(
    entries: &mut Vec<CalendarEntry>,
    plan_id: &ProgressionPlanId,
    dates: &[NaiveDate],
) -> Annotation {
    let mut annotation = Annotation::default();
    let mut by_date: HashMap<NaiveDate, usize> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| (entry.date, i))
        .collect();

    for &date in dates {
        match by_date.get(&date) {
            Some(&i) => {
                let entry = &mut entries[i];
                entry.progression_increase = true;
                entry.progression_plan_id = Some(plan_id.clone());
                annotation.updated += 1;
            }
            None => {
                by_date.insert(date, entries.len());
                entries.push(CalendarEntry::progression(date, plan_id.clone()));
                annotation.inserted += 1;
            }
        }
    }

    entries.sort_by_key(|entry| entry.date);
    annotation
}

/// Clear progression markers that point at plans no longer in `live_plans`.
///
/// Entries created purely as progression markers are dropped; entries that
/// carry another type only lose the marker. Returns how many entries changed.
pub fn prune_orphaned_markers(
    entries: &mut Vec<CalendarEntry>,
    live_plans: &HashSet<ProgressionPlanId>,
) -> usize {
    let orphaned = |entry: &CalendarEntry| {
        entry
            .progression_plan_id
            .as_ref()
            .is_some_and(|id| !live_plans.contains(id))
    };

    let mut changed = 0;

    entries.retain_mut(|entry| {
        if !orphaned(entry) {
            return true;
        }
        changed += 1;
        if entry.entry_type == overload_core::PROGRESSION_ENTRY_TYPE {
            return false;
        }
        entry.progression_increase = false;
        entry.progression_plan_id = None;
        true
    });

    changed
}

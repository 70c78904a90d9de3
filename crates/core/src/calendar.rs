//! Calendar entries - per-date annotations shown on the home calendar.

use serde::{Deserialize, Serialize};
use crate::id::ProgressionPlanId;
use crate::Date;

/// `type` tag for entries created by progression scheduling.
pub const PROGRESSION_ENTRY_TYPE: &str = "progression";

/// One annotated calendar date. Dates are unique within the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    /// The annotated date
    pub date: Date,

    /// An increase is due on this date
    #[serde(default)]
    pub progression_increase: bool,

    /// Plan that last claimed this date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progression_plan_id: Option<ProgressionPlanId>,

    /// Free-form tag
    #[serde(rename = "type", default)]
    pub entry_type: String,
}

impl CalendarEntry {
    /// Minimal entry marking a progression increase.
    pub fn progression(date: Date, plan_id: ProgressionPlanId) -> Self {
        Self {
            date,
            progression_increase: true,
            progression_plan_id: Some(plan_id),
            entry_type: PROGRESSION_ENTRY_TYPE.to_string(),
        }
    }
}

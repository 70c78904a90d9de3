//! Workout plan model - a two-week schedule of workout days.

use serde::{Deserialize, Serialize};
use crate::day::DEFAULT_ICON;
use crate::id::{DayId, WorkoutId};
use crate::Time;

/// Days in one schedule week.
pub const DAYS_PER_WEEK: usize = 7;

/// Slots in a schedule (two weeks, Monday first).
pub const SCHEDULE_DAYS: usize = 2 * DAYS_PER_WEEK;

/// A bi-weekly workout schedule built from workout days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// Unique identifier
    pub id: WorkoutId,

    /// Plan name
    pub name: String,

    /// One slot per calendar day; `None` means not assigned yet
    #[serde(default)]
    pub schedule: Vec<Option<ScheduleSlot>>,

    /// Creation timestamp (progression plans start from its date)
    pub created_at: Time,

    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Time>,
}

/// What happens on one day of the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    /// Workout day performed, `None` for a rest day
    pub day_id: Option<DayId>,

    /// Denormalized day name
    pub day_name: String,

    /// Denormalized icon
    #[serde(default)]
    pub icon: String,
}

impl ScheduleSlot {
    /// Slot performing the given day.
    pub fn workout(day_id: DayId, day_name: impl Into<String>, icon: Option<&str>) -> Self {
        Self {
            day_id: Some(day_id),
            day_name: day_name.into(),
            icon: icon.unwrap_or(DEFAULT_ICON).to_string(),
        }
    }

    /// Explicit rest day.
    pub fn rest() -> Self {
        Self {
            day_id: None,
            day_name: "Rest Day".to_string(),
            icon: "🛌".to_string(),
        }
    }

    /// Whether a workout is performed in this slot.
    pub fn is_workout(&self) -> bool {
        self.day_id.is_some()
    }
}

impl WorkoutPlan {
    /// Create an empty plan with all slots unassigned.
    pub fn new(name: impl Into<String>) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: WorkoutId::new(),
            name: name.into(),
            schedule: vec![None; SCHEDULE_DAYS],
            created_at: now,
            updated_at: Some(now),
        }
    }

    /// Slots that perform a workout, with their schedule index.
    pub fn workout_slots(&self) -> impl Iterator<Item = (usize, &ScheduleSlot)> {
        self.schedule
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().filter(|s| s.is_workout()).map(|s| (i, s)))
    }

    /// Number of scheduled workout days (rest and unassigned excluded).
    pub fn workout_day_count(&self) -> usize {
        self.workout_slots().count()
    }

    /// Summary like `"2 Leg Day, 1 Arm Day"`, in first-appearance order.
    pub fn days_summary(&self) -> String {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for (_, slot) in self.workout_slots() {
            let name = if slot.day_name.is_empty() { "Workout" } else { slot.day_name.as_str() };
            match counts.iter_mut().find(|(n, _)| *n == name) {
                Some((_, count)) => *count += 1,
                None => counts.push((name, 1)),
            }
        }

        if counts.is_empty() {
            return "No days configured".to_string();
        }

        counts
            .iter()
            .map(|(name, count)| format!("{} {}", count, name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Distinct day ids in first-appearance order.
    pub fn unique_day_ids(&self) -> Vec<&DayId> {
        let mut ids: Vec<&DayId> = Vec::new();
        for (_, slot) in self.workout_slots() {
            if let Some(id) = &slot.day_id {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg() -> ScheduleSlot {
        ScheduleSlot::workout(DayId::from("day-1"), "Leg Day", Some("🦵"))
    }

    fn arm() -> ScheduleSlot {
        ScheduleSlot::workout(DayId::from("day-2"), "Arm Day", None)
    }

    #[test]
    fn test_new_plan_has_fourteen_empty_slots() {
        let plan = WorkoutPlan::new("PPL");
        assert_eq!(plan.schedule.len(), SCHEDULE_DAYS);
        assert_eq!(plan.workout_day_count(), 0);
        assert_eq!(plan.days_summary(), "No days configured");
    }

    #[test]
    fn test_summary_counts_in_appearance_order() {
        let mut plan = WorkoutPlan::new("Split");
        plan.schedule[0] = Some(leg());
        plan.schedule[1] = Some(ScheduleSlot::rest());
        plan.schedule[2] = Some(arm());
        plan.schedule[7] = Some(leg());

        assert_eq!(plan.workout_day_count(), 3);
        assert_eq!(plan.days_summary(), "2 Leg Day, 1 Arm Day");
        let ids: Vec<&str> = plan.unique_day_ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["day-1", "day-2"]);
    }

    #[test]
    fn test_reads_null_slots() {
        let json = r#"{
            "id": "workout-1",
            "name": "Demo",
            "schedule": [{"dayId": "day-1", "dayName": "Leg Day", "icon": "🦵"}, null,
                         {"dayId": null, "dayName": "Rest Day", "icon": "🛌"}],
            "createdAt": "2024-01-01T00:00:00.000Z"
        }"#;
        let plan: WorkoutPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.schedule.len(), 3);
        assert!(plan.schedule[1].is_none());
        assert!(!plan.schedule[2].as_ref().unwrap().is_workout());
        assert_eq!(plan.workout_day_count(), 1);
    }
}

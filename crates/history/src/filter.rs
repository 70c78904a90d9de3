//! Selecting sessions.

use chrono::NaiveDate;
use overload_core::{DayId, WorkoutId, WorkoutSession};

/// Criteria for selecting sessions. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFilter {
    /// Only sessions of this workout plan
    pub workout_id: Option<WorkoutId>,
    /// Only sessions of this workout day
    pub day_id: Option<DayId>,
    /// First date included
    pub from: Option<NaiveDate>,
    /// Last date included
    pub to: Option<NaiveDate>,
}

impl SessionFilter {
    /// Filter for one workout plan.
    pub fn workout(workout_id: WorkoutId) -> Self {
        Self { workout_id: Some(workout_id), ..Self::default() }
    }

    /// Restrict to an inclusive date range.
    pub fn between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Whether `session` passes the filter.
    pub fn matches(&self, session: &WorkoutSession) -> bool {
        self.workout_id.as_ref().map_or(true, |id| &session.workout_id == id)
            && self.day_id.as_ref().map_or(true, |id| &session.day_id == id)
            && self.from.map_or(true, |from| session.date >= from)
            && self.to.map_or(true, |to| session.date <= to)
    }

    /// Matching sessions, oldest first. Sessions on the same date keep
    /// their logged order.
    pub fn apply<'a>(&self, sessions: &'a [WorkoutSession]) -> Vec<&'a WorkoutSession> {
        let mut matched: Vec<&WorkoutSession> =
            sessions.iter().filter(|s| self.matches(s)).collect();
        matched.sort_by_key(|s| s.date);
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::session;

    #[test]
    fn test_inclusive_range() {
        let sessions = vec![
            session("w1", "legs", "2024-01-20", vec![]),
            session("w1", "legs", "2024-01-10", vec![]),
            session("w2", "arms", "2024-01-15", vec![]),
            session("w1", "arms", "2024-01-31", vec![]),
        ];
        let from = NaiveDate::from_ymd_opt(2024, 1, 10);
        let to = NaiveDate::from_ymd_opt(2024, 1, 20);

        let matched = SessionFilter::workout("w1".into()).between(from, to).apply(&sessions);

        let dates: Vec<String> = matched.iter().map(|s| s.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-01-10", "2024-01-20"]);
    }

    #[test]
    fn test_default_matches_all() {
        let sessions = vec![
            session("w1", "legs", "2024-01-20", vec![]),
            session("w2", "arms", "2024-01-15", vec![]),
        ];

        let matched = SessionFilter::default().apply(&sessions);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].day_id.as_str(), "arms");
    }
}

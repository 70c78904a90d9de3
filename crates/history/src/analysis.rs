//! Aggregates over logged sessions.

use chrono::NaiveDate;
use overload_core::{DayId, WorkoutSession};

/// Sessions of one workout day.
#[derive(Debug, Clone)]
pub struct DayGroup<'a> {
    /// Workout day
    pub day_id: &'a DayId,
    /// Day name from the first session seen
    pub day_name: &'a str,
    /// Sessions in input order
    pub sessions: Vec<&'a WorkoutSession>,
}

/// Per-exercise figures across sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseStats {
    /// Exercise name
    pub name: String,
    /// Heaviest weight logged (0 when none was)
    pub max_weight: f64,
    /// Sessions the exercise appears in
    pub count: usize,
}

/// Totals across sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistorySummary {
    /// Number of sessions
    pub sessions: usize,
    /// Number of exercise entries
    pub exercises: usize,
    /// Earliest session date
    pub first: Option<NaiveDate>,
    /// Latest session date
    pub last: Option<NaiveDate>,
}

/// How one workout day has gone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayPerformance {
    /// Sessions of the day
    pub sessions: usize,
    /// Weight change of the day's first exercise between its first and last
    /// session, in percent
    pub weight_change_percent: Option<f64>,
}

/// Group sessions by workout day, days in first-appearance order.
pub fn group_by_day<'a>(sessions: &[&'a WorkoutSession]) -> Vec<DayGroup<'a>> {
    let mut groups: Vec<DayGroup<'a>> = Vec::new();
    for &session in sessions {
        match groups.iter_mut().find(|g| g.day_id == &session.day_id) {
            Some(group) => group.sessions.push(session),
            None => groups.push(DayGroup {
                day_id: &session.day_id,
                day_name: &session.day_name,
                sessions: vec![session],
            }),
        }
    }
    groups
}

/// Max weight and appearance count per exercise, in first-appearance order.
pub fn exercise_stats(sessions: &[&WorkoutSession]) -> Vec<ExerciseStats> {
    let mut stats: Vec<ExerciseStats> = Vec::new();
    for exercise in sessions.iter().flat_map(|s| &s.exercises) {
        let weight = exercise.weight.unwrap_or(0.0);
        match stats.iter_mut().find(|s| s.name == exercise.name) {
            Some(entry) => {
                entry.max_weight = entry.max_weight.max(weight);
                entry.count += 1;
            }
            None => stats.push(ExerciseStats {
                name: exercise.name.clone(),
                max_weight: weight.max(0.0),
                count: 1,
            }),
        }
    }
    stats
}

/// Session and exercise totals plus the covered date range.
pub fn summarize(sessions: &[&WorkoutSession]) -> HistorySummary {
    HistorySummary {
        sessions: sessions.len(),
        exercises: sessions.iter().map(|s| s.exercises.len()).sum(),
        first: sessions.iter().map(|s| s.date).min(),
        last: sessions.iter().map(|s| s.date).max(),
    }
}

/// Performance of one workout day.
///
/// The change is measured on the first exercise of the day's first session,
/// against the same exercise in the last session. It is `None` with fewer
/// than two sessions or when either weight is missing or the first is zero.
pub fn day_performance(sessions: &[&WorkoutSession], day_id: &DayId) -> DayPerformance {
    let day: Vec<&WorkoutSession> =
        sessions.iter().copied().filter(|s| &s.day_id == day_id).collect();

    let weight_change_percent = match (day.first(), day.last()) {
        (Some(first), Some(last)) if day.len() > 1 => first.exercises.first().and_then(|lead| {
            let before = lead.weight?;
            let after = last.exercise(&lead.name)?.weight?;
            (before > 0.0).then(|| (after - before) / before * 100.0)
        }),
        _ => None,
    };

    DayPerformance { sessions: day.len(), weight_change_percent }
}

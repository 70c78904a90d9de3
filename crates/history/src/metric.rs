//! Per-exercise metric series for charting progress.

use std::fmt;
use std::str::FromStr;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use overload_core::{DayId, SessionExercise, WorkoutSession};

/// What to chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Weight used
    Weight,
    /// Repetitions per set
    Reps,
    /// Weight x reps x sets
    Volume,
    /// Rest between sets
    Recovery,
}

impl Metric {
    /// Every metric.
    pub const ALL: [Metric; 4] = [Self::Weight, Self::Reps, Self::Volume, Self::Recovery];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Reps => "reps",
            Self::Volume => "volume",
            Self::Recovery => "recovery",
        }
    }

    /// Axis label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weight => "Weight (lbs)",
            Self::Reps => "Reps",
            Self::Volume => "Volume (lbs × reps × sets)",
            Self::Recovery => "Recovery Time (s)",
        }
    }

    /// Value of this metric for one exercise entry.
    pub fn value(&self, exercise: &SessionExercise) -> Option<f64> {
        match self {
            Self::Weight => exercise.weight,
            Self::Reps => exercise.reps.map(f64::from),
            Self::Volume => exercise.volume(),
            Self::Recovery => exercise.rest.map(f64::from),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown metric name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric '{0}', expected weight, reps, volume or recovery")]
pub struct ParseMetricError(pub String);

impl FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseMetricError(s.to_string()))
    }
}

/// Values of one exercise over time.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    /// Exercise name
    pub exercise: String,
    /// Session date and value, only where the value is known
    pub points: Vec<(NaiveDate, f64)>,
}

/// Every exercise series of one workout day.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricChart {
    /// Charted metric
    pub metric: Metric,
    /// Dates of the day's sessions
    pub dates: Vec<NaiveDate>,
    /// One series per exercise with data, in first-appearance order
    pub series: Vec<MetricSeries>,
}

/// Chart `metric` for each exercise of `day_id` across `sessions`.
pub fn metric_series(sessions: &[&WorkoutSession], day_id: &DayId, metric: Metric) -> MetricChart {
    let day: Vec<&WorkoutSession> =
        sessions.iter().copied().filter(|s| &s.day_id == day_id).collect();

    let mut series: Vec<MetricSeries> = Vec::new();
    for session in &day {
        for exercise in &session.exercises {
            let index = match series.iter().position(|s| s.exercise == exercise.name) {
                Some(i) => i,
                None => {
                    series.push(MetricSeries { exercise: exercise.name.clone(), points: Vec::new() });
                    series.len() - 1
                }
            };
            if let Some(value) = metric.value(exercise) {
                series[index].points.push((session.date, value));
            }
        }
    }
    series.retain(|s| !s.points.is_empty());

    MetricChart {
        metric,
        dates: day.iter().map(|s| s.date).collect(),
        series,
    }
}

//! Fixtures shared by the unit tests.

use std::collections::BTreeMap;
use chrono::{NaiveDate, TimeZone, Utc};
use overload_core::{
    ExerciseProgression, ProgressionPlan, ProgressionPlanId, ProgressionVariable, Time,
};

pub fn date(s: &str) -> NaiveDate {
    overload_core::date::parse_date(s).unwrap()
}

pub fn noon(s: &str) -> Time {
    let d = date(s);
    Utc.from_utc_datetime(&d.and_hms_opt(12, 0, 0).unwrap())
}

pub fn exercise(interval_weeks: u32, current: f64, next: &str) -> ExerciseProgression {
    ExerciseProgression {
        variable: ProgressionVariable::Weight,
        increase_amount: 5.0,
        interval_weeks,
        starting_value: current,
        current_value: current,
        start_date: date("2024-01-18"),
        next_increase_date: date(next),
        last_increased: None,
        enabled: true,
    }
}

pub fn plan(start: &str, exercises: Vec<(&str, ExerciseProgression)>) -> ProgressionPlan {
    let exercises: BTreeMap<String, ExerciseProgression> = exercises
        .into_iter()
        .map(|(name, ex)| (name.to_string(), ex))
        .collect();

    ProgressionPlan {
        id: ProgressionPlanId::new(),
        workout_id: "workout-1".into(),
        workout_name: "Demo Plan".to_string(),
        day_id: "day-1".into(),
        day_name: "Leg Day".to_string(),
        start_date: date(start),
        exercises,
        created_at: noon(start),
        updated_at: None,
    }
}

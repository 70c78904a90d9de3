//! Building a progression plan from a workout day.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use overload_core::date::add_weeks;
use overload_core::{
    DayExercise, ExerciseProgression, ProgressionPlan, ProgressionPlanId, ProgressionVariable,
    Time, WorkoutDay, WorkoutPlan,
};
use crate::{ProgressionError, Result};

/// What the user picked for one exercise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSetup {
    /// Attribute to escalate
    pub variable: ProgressionVariable,
    /// Delta per increase
    pub increase_amount: f64,
    /// Weeks between increases
    pub interval_weeks: u32,
}

impl Default for ExerciseSetup {
    fn default() -> Self {
        Self {
            variable: ProgressionVariable::Weight,
            increase_amount: 5.0,
            interval_weeks: 2,
        }
    }
}

/// Current value of `variable` on a day exercise; missing values count as 0.
pub fn starting_value(exercise: &DayExercise, variable: ProgressionVariable) -> f64 {
    match variable {
        ProgressionVariable::Weight => exercise.weight.unwrap_or(0.0),
        ProgressionVariable::Reps => exercise.reps.map(f64::from).unwrap_or(0.0),
        ProgressionVariable::Sets => exercise.sets.map(f64::from).unwrap_or(0.0),
        ProgressionVariable::Rest => exercise.rest.map(f64::from).unwrap_or(0.0),
    }
}

/// Build a new plan for `day` within `workout`.
///
/// The plan starts on the workout plan's creation date and each exercise
/// first comes due one interval after that.
pub fn build_plan(
    workout: &WorkoutPlan,
    day: &WorkoutDay,
    setups: &BTreeMap<String, ExerciseSetup>,
    now: Time,
) -> Result<ProgressionPlan> {
    if setups.is_empty() {
        return Err(ProgressionError::EmptySetup);
    }

    if !workout.unique_day_ids().contains(&&day.id) {
        return Err(ProgressionError::DayNotInWorkout {
            workout: workout.id.clone(),
            day: day.id.clone(),
        });
    }

    let start_date = workout.created_at.date_naive();
    let mut exercises = BTreeMap::new();

    for (name, setup) in setups {
        let Some(day_exercise) = day.exercise(name) else {
            return Err(ProgressionError::UnknownExercise {
                exercise: name.clone(),
                day: day.name.clone(),
            });
        };
        let next_increase_date = add_weeks(start_date, setup.interval_weeks)
            .filter(|_| setup.interval_weeks > 0)
            .ok_or_else(|| ProgressionError::InvalidInterval { exercise: name.clone() })?;
        if !setup.increase_amount.is_finite() || setup.increase_amount <= 0.0 {
            return Err(ProgressionError::InvalidIncrease {
                exercise: name.clone(),
                amount: setup.increase_amount,
            });
        }

        let value = starting_value(day_exercise, setup.variable);
        exercises.insert(
            name.clone(),
            ExerciseProgression {
                variable: setup.variable,
                increase_amount: setup.increase_amount,
                interval_weeks: setup.interval_weeks,
                starting_value: value,
                current_value: value,
                start_date,
                next_increase_date,
                last_increased: None,
                enabled: true,
            },
        );
    }

    Ok(ProgressionPlan {
        id: ProgressionPlanId::new(),
        workout_id: workout.id.clone(),
        workout_name: workout.name.clone(),
        day_id: day.id.clone(),
        day_name: day.name.clone(),
        start_date,
        exercises,
        created_at: now,
        updated_at: Some(now),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, noon};
    use overload_core::ScheduleSlot;

    fn leg_day() -> WorkoutDay {
        let mut squats = DayExercise::new("Squats");
        squats.weight = Some(185.0);
        squats.reps = Some(8);
        WorkoutDay::new("Leg Day", vec![squats, DayExercise::new("Calf Raises")])
    }

    fn workout_with(day: &WorkoutDay) -> WorkoutPlan {
        let mut workout = WorkoutPlan::new("Demo");
        workout.created_at = noon("2024-01-18");
        workout.schedule[0] = Some(ScheduleSlot::workout(day.id.clone(), day.name.clone(), None));
        workout
    }

    #[test]
    fn test_builds_from_day_values() {
        let day = leg_day();
        let workout = workout_with(&day);
        let mut setups = BTreeMap::new();
        setups.insert("Squats".to_string(), ExerciseSetup::default());
        setups.insert(
            "Calf Raises".to_string(),
            ExerciseSetup { variable: ProgressionVariable::Reps, increase_amount: 1.0, interval_weeks: 1 },
        );

        let plan = build_plan(&workout, &day, &setups, noon("2024-01-20")).unwrap();

        assert_eq!(plan.start_date, date("2024-01-18"));
        assert_eq!(plan.day_name, "Leg Day");
        let squats = &plan.exercises["Squats"];
        assert_eq!(squats.current_value, 185.0);
        assert_eq!(squats.next_increase_date, date("2024-02-01"));
        assert!(squats.enabled);
        let calves = &plan.exercises["Calf Raises"];
        assert_eq!(calves.starting_value, 10.0);
        assert_eq!(calves.next_increase_date, date("2024-01-25"));
    }

    #[test]
    fn test_missing_value_starts_at_zero() {
        let day = leg_day();
        let workout = workout_with(&day);
        let setups = BTreeMap::from([("Calf Raises".to_string(), ExerciseSetup::default())]);

        let plan = build_plan(&workout, &day, &setups, noon("2024-01-20")).unwrap();
        assert_eq!(plan.exercises["Calf Raises"].current_value, 0.0);
    }

    #[test]
    fn test_rejects_bad_setups() {
        let day = leg_day();
        let workout = workout_with(&day);
        let now = noon("2024-01-20");

        assert!(matches!(
            build_plan(&workout, &day, &BTreeMap::new(), now),
            Err(ProgressionError::EmptySetup)
        ));

        let unknown = BTreeMap::from([("Bench".to_string(), ExerciseSetup::default())]);
        assert!(matches!(
            build_plan(&workout, &day, &unknown, now),
            Err(ProgressionError::UnknownExercise { .. })
        ));

        let zero = BTreeMap::from([(
            "Squats".to_string(),
            ExerciseSetup { interval_weeks: 0, ..ExerciseSetup::default() },
        )]);
        assert!(matches!(
            build_plan(&workout, &day, &zero, now),
            Err(ProgressionError::InvalidInterval { .. })
        ));

        let endless = BTreeMap::from([(
            "Squats".to_string(),
            ExerciseSetup { interval_weeks: 20_000_000, ..ExerciseSetup::default() },
        )]);
        assert!(matches!(
            build_plan(&workout, &day, &endless, now),
            Err(ProgressionError::InvalidInterval { .. })
        ));

        let negative = BTreeMap::from([(
            "Squats".to_string(),
            ExerciseSetup { increase_amount: -2.5, ..ExerciseSetup::default() },
        )]);
        let err = build_plan(&workout, &day, &negative, now).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_day_must_be_scheduled() {
        let day = leg_day();
        let workout = WorkoutPlan::new("Empty");
        let setups = BTreeMap::from([("Squats".to_string(), ExerciseSetup::default())]);

        assert!(matches!(
            build_plan(&workout, &day, &setups, noon("2024-01-20")),
            Err(ProgressionError::DayNotInWorkout { .. })
        ));
    }
}

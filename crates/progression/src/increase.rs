//! Applying due increases to a plan.

use chrono::NaiveDate;
use overload_core::date::add_weeks;
use overload_core::{ExerciseProgression, ProgressionPlan, Time};
use tracing::warn;

/// One exercise that was increased.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedIncrease {
    /// Exercise name
    pub exercise: String,
    /// Value before the increase
    pub previous_value: f64,
    /// Value after the increase
    pub current_value: f64,
    /// Recomputed due date
    pub next_increase_date: NaiveDate,
}

/// One due exercise that could not be increased.
#[derive(Debug, Clone, PartialEq)]
pub struct IncreaseFailure {
    /// Exercise name
    pub exercise: String,
    /// Why it was left untouched
    pub reason: String,
}

/// Outcome of [`apply_increases`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncreaseReport {
    /// Exercises increased
    pub applied: Vec<AppliedIncrease>,
    /// Due exercises left untouched
    pub failed: Vec<IncreaseFailure>,
}

impl IncreaseReport {
    /// Whether nothing was due.
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty() && self.failed.is_empty()
    }
}

/// Increase every enabled exercise due on `today`.
///
/// Each due exercise gets `current_value += increase_amount`,
/// `last_increased = now` and a next due date of `today + interval`.
/// Exercises whose numbers are unusable are reported and skipped; the rest
/// of the plan is still applied.
pub fn apply_increases(plan: &mut ProgressionPlan, today: NaiveDate, now: Time) -> IncreaseReport {
    let mut report = IncreaseReport::default();

    for (name, exercise) in plan.exercises.iter_mut() {
        if !exercise.is_due(today) {
            continue;
        }

        let next = match check_increase(exercise, today) {
            Ok(next) => next,
            Err(reason) => {
                warn!(plan = %plan.id, exercise = %name, %reason, "Skipping increase");
                report.failed.push(IncreaseFailure { exercise: name.clone(), reason });
                continue;
            }
        };

        let previous_value = exercise.current_value;
        exercise.current_value += exercise.increase_amount;
        exercise.last_increased = Some(now);
        exercise.next_increase_date = next;

        report.applied.push(AppliedIncrease {
            exercise: name.clone(),
            previous_value,
            current_value: exercise.current_value,
            next_increase_date: exercise.next_increase_date,
        });
    }

    report
}

/// Next due date for a due exercise, or why it cannot be increased.
fn check_increase(exercise: &ExerciseProgression, today: NaiveDate) -> Result<NaiveDate, String> {
    if !exercise.current_value.is_finite() {
        return Err(format!("current value {} is not a finite number", exercise.current_value));
    }
    if !exercise.increase_amount.is_finite() {
        return Err(format!("increase amount {} is not a finite number", exercise.increase_amount));
    }
    if exercise.increase_amount < 0.0 {
        return Err(format!("increase amount {} is negative", exercise.increase_amount));
    }
    if exercise.interval_weeks == 0 {
        return Err("interval must be at least one week".to_string());
    }

    add_weeks(today, exercise.interval_weeks)
        .ok_or_else(|| format!("{} weeks after {} is out of range", exercise.interval_weeks, today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, exercise, noon, plan};

    #[test]
    fn test_apply_on_due_date() {
        let mut p = plan("2024-01-18", vec![("Squats", exercise(2, 185.0, "2024-02-01"))]);
        let now = noon("2024-02-01");

        let report = apply_increases(&mut p, date("2024-02-01"), now);

        assert_eq!(report.applied.len(), 1);
        assert!(report.failed.is_empty());
        let squats = &p.exercises["Squats"];
        assert_eq!(squats.current_value, 190.0);
        assert_eq!(squats.next_increase_date, date("2024-02-15"));
        assert_eq!(squats.last_increased, Some(now));
        assert_eq!(squats.starting_value, 185.0);
        assert!(!p.is_due(date("2024-02-01")));
    }

    #[test]
    fn test_not_due_is_untouched() {
        let mut p = plan("2024-01-18", vec![
            ("Squats", exercise(2, 185.0, "2024-02-01")),
            ("Lunges", exercise(3, 40.0, "2024-02-08")),
        ]);
        let before = p.exercises["Lunges"].clone();

        let report = apply_increases(&mut p, date("2024-02-01"), noon("2024-02-01"));

        assert_eq!(report.applied.len(), 1);
        assert_eq!(p.exercises["Lunges"], before);
    }

    #[test]
    fn test_disabled_is_untouched() {
        let mut off = exercise(2, 185.0, "2024-02-01");
        off.enabled = false;
        let mut p = plan("2024-01-18", vec![("Squats", off)]);

        let report = apply_increases(&mut p, date("2024-02-01"), noon("2024-02-01"));

        assert!(report.is_empty());
        assert_eq!(p.exercises["Squats"].current_value, 185.0);
    }

    #[test]
    fn test_bad_numbers_fail_only_that_exercise() {
        let mut broken = exercise(2, f64::NAN, "2024-02-01");
        broken.starting_value = 0.0;
        let mut infinite_step = exercise(2, 20.0, "2024-02-01");
        infinite_step.increase_amount = f64::INFINITY;
        let mut p = plan("2024-01-18", vec![
            ("Broken", broken),
            ("Infinite", infinite_step),
            ("Squats", exercise(2, 185.0, "2024-02-01")),
        ]);

        let report = apply_increases(&mut p, date("2024-02-01"), noon("2024-02-01"));

        assert_eq!(report.applied.len(), 1);
        assert_eq!(report.applied[0].exercise, "Squats");
        assert_eq!(report.failed.len(), 2);
        assert_eq!(p.exercises["Squats"].current_value, 190.0);
        assert_eq!(p.exercises["Infinite"].current_value, 20.0);
        assert_eq!(p.exercises["Infinite"].next_increase_date, date("2024-02-01"));
    }

    #[test]
    fn test_value_never_decreases() {
        let mut negative = exercise(2, 100.0, "2024-02-01");
        negative.increase_amount = -5.0;
        let mut p = plan("2024-01-18", vec![("Rows", negative)]);

        let report = apply_increases(&mut p, date("2024-02-01"), noon("2024-02-01"));

        assert_eq!(report.failed.len(), 1);
        assert_eq!(p.exercises["Rows"].current_value, 100.0);
    }

    #[test]
    fn test_unreachable_next_date_fails_only_that_exercise() {
        let huge = exercise(20_000_000, 100.0, "2024-02-01");
        let zero = exercise(0, 50.0, "2024-02-01");
        let mut p = plan("2024-01-18", vec![
            ("Huge", huge.clone()),
            ("Zero", zero.clone()),
            ("Squats", exercise(2, 185.0, "2024-02-01")),
        ]);

        let report = apply_increases(&mut p, date("2024-02-01"), noon("2024-02-01"));

        assert_eq!(report.applied.len(), 1);
        assert_eq!(report.applied[0].exercise, "Squats");
        let failed: Vec<&str> = report.failed.iter().map(|f| f.exercise.as_str()).collect();
        assert_eq!(failed, vec!["Huge", "Zero"]);
        assert_eq!(p.exercises["Huge"], huge);
        assert_eq!(p.exercises["Zero"], zero);
    }
}

//! Due-today checks and the "remind me tomorrow" skip.

use chrono::NaiveDate;
use overload_core::date::add_days;
use overload_core::ProgressionPlan;

/// Plans with at least one enabled exercise due on `today`.
///
/// Read-only, so calling it again without changes returns the same plans.
pub fn plans_due(plans: &[ProgressionPlan], today: NaiveDate) -> Vec<&ProgressionPlan> {
    plans.iter().filter(|plan| plan.is_due(today)).collect()
}

/// Defer every exercise due on `today` by one day without increasing it.
///
/// Returns the names of the deferred exercises. Nothing is deferred past the
/// last representable date.
pub fn skip_due(plan: &mut ProgressionPlan, today: NaiveDate) -> Vec<String> {
    let Some(tomorrow) = add_days(today, 1) else {
        return Vec::new();
    };
    let mut skipped = Vec::new();

    for (name, exercise) in plan.exercises.iter_mut() {
        if exercise.is_due(today) {
            exercise.next_increase_date = tomorrow;
            skipped.push(name.clone());
        }
    }

    skipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, exercise, plan};

    #[test]
    fn test_due_today_matches_example() {
        let plans = vec![
            plan("2024-01-18", vec![("Squats", exercise(2, 185.0, "2024-02-01"))]),
            plan("2024-01-18", vec![("Bench", exercise(2, 135.0, "2024-02-02"))]),
        ];

        let due = plans_due(&plans, date("2024-02-01"));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, plans[0].id);

        // Idempotent
        let again = plans_due(&plans, date("2024-02-01"));
        assert_eq!(again.len(), 1);
        assert_eq!(again[0].id, due[0].id);
    }

    #[test]
    fn test_disabled_excluded_but_value_kept() {
        let mut p = plan("2024-01-18", vec![("Squats", exercise(2, 185.0, "2024-02-01"))]);
        if let Some(ex) = p.exercises.get_mut("Squats") {
            ex.enabled = false;
        }
        let plans = vec![p];

        assert!(plans_due(&plans, date("2024-02-01")).is_empty());
        assert_eq!(plans[0].exercises["Squats"].current_value, 185.0);
    }

    #[test]
    fn test_skip_moves_one_day() {
        let mut p = plan("2024-01-18", vec![
            ("Squats", exercise(2, 185.0, "2024-02-29")),
            ("Lunges", exercise(2, 40.0, "2024-03-07")),
        ]);

        let skipped = skip_due(&mut p, date("2024-02-29"));

        assert_eq!(skipped, vec!["Squats".to_string()]);
        let squats = &p.exercises["Squats"];
        assert_eq!(squats.next_increase_date, date("2024-03-01"));
        assert_eq!(squats.current_value, 185.0);
        assert!(squats.last_increased.is_none());
        assert_eq!(p.exercises["Lunges"].next_increase_date, date("2024-03-07"));
        assert!(!p.is_due(date("2024-02-29")));
        assert!(p.is_due(date("2024-03-01")));
    }

    #[test]
    fn test_skip_on_last_date_is_noop() {
        let mut due = exercise(2, 185.0, "2024-02-01");
        due.next_increase_date = NaiveDate::MAX;
        let mut p = plan("2024-01-18", vec![("Squats", due)]);

        assert!(skip_due(&mut p, NaiveDate::MAX).is_empty());
        assert_eq!(p.exercises["Squats"].next_increase_date, NaiveDate::MAX);
    }
}

//! Fixtures shared by the unit tests.

use overload_core::{SessionExercise, SessionId, WorkoutSession};

pub fn lift(name: &str, weight: f64, reps: u32, sets: u32) -> SessionExercise {
    SessionExercise {
        name: name.to_string(),
        sets: Some(sets),
        reps: Some(reps),
        weight: Some(weight),
        rest: Some(90),
    }
}

pub fn session(
    workout: &str,
    day: &str,
    date: &str,
    exercises: Vec<SessionExercise>,
) -> WorkoutSession {
    WorkoutSession {
        id: SessionId::new(),
        workout_id: workout.into(),
        day_id: day.into(),
        day_name: format!("{} day", day),
        date: overload_core::date::parse_date(date).unwrap(),
        duration: None,
        notes: None,
        exercises,
    }
}

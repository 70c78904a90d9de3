//! Tabular view of sessions and CSV export.

use overload_core::WorkoutSession;

/// Sessions laid out one row per session.
///
/// Columns are Date, Duration and Notes followed by Weight, Reps and Sets
/// for every exercise, exercises in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spreadsheet {
    /// Column titles
    pub header: Vec<String>,
    /// Cells, one row per session
    pub rows: Vec<Vec<String>>,
}

impl Spreadsheet {
    /// Lay out `sessions` in the given order.
    pub fn from_sessions(sessions: &[&WorkoutSession]) -> Self {
        let mut exercises: Vec<&str> = Vec::new();
        for exercise in sessions.iter().flat_map(|s| &s.exercises) {
            if !exercises.contains(&exercise.name.as_str()) {
                exercises.push(&exercise.name);
            }
        }

        let mut header: Vec<String> =
            vec!["Date".to_string(), "Duration".to_string(), "Notes".to_string()];
        for name in &exercises {
            header.push(format!("{} (Weight)", name));
            header.push(format!("{} (Reps)", name));
            header.push(format!("{} (Sets)", name));
        }

        let rows = sessions
            .iter()
            .map(|session| {
                let mut row = vec![
                    session.date.format("%Y-%m-%d").to_string(),
                    session.duration.clone().unwrap_or_else(|| "N/A".to_string()),
                    session.notes.clone().unwrap_or_default(),
                ];
                for name in &exercises {
                    match session.exercise(name) {
                        Some(e) => {
                            row.push(cell(e.weight));
                            row.push(cell(e.reps));
                            row.push(cell(e.sets));
                        }
                        None => row.extend(std::iter::repeat(String::new()).take(3)),
                    }
                }
                row
            })
            .collect();

        Self { header, rows }
    }

    /// Whether there are no sessions.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render as CSV (RFC 4180, CRLF line endings).
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for record in std::iter::once(&self.header).chain(&self.rows) {
            let line: Vec<String> = record.iter().map(|field| quote(field)).collect();
            out.push_str(&line.join(","));
            out.push_str("\r\n");
        }
        out
    }
}

fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn quote(field: &str) -> String {
    if field.contains(&[',', '"', '\r', '\n'][..]) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

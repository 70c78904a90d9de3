//! Workout session history: logging, filtering and analysis.

#![warn(missing_docs)]

pub mod error;
pub mod filter;
pub mod analysis;
pub mod metric;
pub mod sheet;
pub mod log;

pub use error::{HistoryError, Result};
pub use filter::SessionFilter;
pub use analysis::{
    day_performance, exercise_stats, group_by_day, summarize, DayGroup, DayPerformance,
    ExerciseStats, HistorySummary,
};
pub use metric::{metric_series, Metric, MetricChart, MetricSeries, ParseMetricError};
pub use sheet::Spreadsheet;
pub use log::{BasicSessionLog, SessionLog};

#[cfg(test)]
pub(crate) mod test_support;

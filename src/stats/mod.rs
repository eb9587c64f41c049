//! Stats module - Trend fitting

mod regression;

pub use regression::{FitSummary, TrendLine, MIN_FIT_POINTS};

//! GUI module - Chart window

mod app;

pub use app::{show_chart_blocking, TrendChartApp};

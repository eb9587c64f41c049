//! Charts module - Chart rendering

mod plotter;
mod renderer;

pub use plotter::{ChartPlotter, TrendChart, SERIES_COLOR, TREND_COLOR};
pub use renderer::StaticChartRenderer;

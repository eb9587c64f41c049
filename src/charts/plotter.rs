//! Chart Plotter Module
//! Trend chart data and its interactive egui_plot view.

use crate::data::SampleSeries;
use crate::error::ChartError;
use crate::stats::TrendLine;
use egui::{Color32, RichText};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints};
use std::ops::Range;

/// Measured series color
pub const SERIES_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
/// Trend line color
pub const TREND_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red

/// Relative padding added around the data on both axes.
const AXIS_PADDING: f64 = 0.05;

/// Everything needed to draw one chart: the measured series, its fitted
/// trend evaluated at the series' own x values, and the axis labels.
#[derive(Debug, Clone)]
pub struct TrendChart {
    pub series: SampleSeries,
    pub trend: TrendLine,
    pub trend_values: Vec<f64>,
    pub x_label: String,
    pub y_label: String,
}

impl TrendChart {
    /// Fit the series and evaluate its trend line.
    pub fn build(series: &SampleSeries, x_label: &str, y_label: &str) -> Result<Self, ChartError> {
        let trend = TrendLine::fit(series)?;
        let trend_values = trend.evaluate_all(series.xs());
        tracing::debug!(
            series = series.name(),
            slope = trend.slope,
            intercept = trend.intercept,
            r_squared = trend.r_squared,
            "fitted trend line"
        );

        Ok(Self {
            series: series.clone(),
            trend,
            trend_values,
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        self.series.name()
    }

    pub fn series_points(&self) -> Vec<[f64; 2]> {
        self.series.points().collect()
    }

    pub fn trend_points(&self) -> Vec<[f64; 2]> {
        self.series
            .xs()
            .iter()
            .zip(self.trend_values.iter())
            .map(|(&x, &y)| [x, y])
            .collect()
    }

    /// Legend text for the trend line.
    pub fn trend_label(&self) -> String {
        format!("Trend: {} (R² = {:.4})", self.trend, self.trend.r_squared)
    }

    pub fn x_range(&self) -> Range<f64> {
        padded_range(self.series.xs().iter().copied())
    }

    /// Y range covering both the measurements and the trend line.
    pub fn y_range(&self) -> Range<f64> {
        padded_range(
            self.series
                .ys()
                .iter()
                .chain(self.trend_values.iter())
                .copied(),
        )
    }
}

fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_infinite() || max.is_infinite() {
        return 0.0..1.0;
    }
    if max - min == 0.0 {
        return (min - 1.0)..(max + 1.0);
    }
    let pad = (max - min) * AXIS_PADDING;
    (min - pad)..(max + pad)
}

/// Draws trend charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the measured series (solid) with its trend line (dashed).
    pub fn draw_trend_chart(ui: &mut egui::Ui, chart: &TrendChart) {
        ui.label(RichText::new(chart.title()).size(18.0).strong());
        ui.add_space(6.0);

        Plot::new(format!("trend_{}", chart.series.slug()))
            .legend(Legend::default())
            .x_axis_label(chart.x_label.clone())
            .y_axis_label(chart.y_label.clone())
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(chart.series_points()))
                        .color(SERIES_COLOR)
                        .width(2.0)
                        .name("Measured"),
                );
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(chart.trend_points()))
                        .color(TREND_COLOR)
                        .width(2.0)
                        .style(LineStyle::dashed_loose())
                        .name(chart.trend_label()),
                );
            });
    }
}

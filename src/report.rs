//! Chart Renderer
//! Fits each benchmark series and presents it with its trend line.

use crate::charts::TrendChart;
use crate::data::{BenchmarkDataset, SampleSeries};
use crate::error::ChartError;
use crate::output::ChartSink;
use crate::stats::FitSummary;
use tracing::info;

/// Fits series and hands the resulting charts to a sink, one at a time.
pub struct ChartRenderer<S: ChartSink> {
    sink: S,
}

impl<S: ChartSink> ChartRenderer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Fit `series`, draw it with its trend line, and present the chart.
    ///
    /// Fails with `ChartError::InsufficientData` for fewer than two points.
    pub fn render_series_with_trend(
        &mut self,
        series: &SampleSeries,
        x_label: &str,
        y_label: &str,
    ) -> Result<(), ChartError> {
        let chart = TrendChart::build(series, x_label, y_label)?;
        self.present(&chart)
    }

    /// Render every dataset in order.
    ///
    /// All series are fitted before the first chart is presented, so a
    /// malformed series aborts the run without partial output.
    pub fn render_all(
        &mut self,
        datasets: &[BenchmarkDataset],
    ) -> Result<Vec<FitSummary>, ChartError> {
        let charts = build_charts(datasets)?;
        for chart in &charts {
            self.present(chart)?;
        }
        Ok(charts
            .iter()
            .map(|c| FitSummary::new(&c.series, c.trend))
            .collect())
    }

    fn present(&mut self, chart: &TrendChart) -> Result<(), ChartError> {
        info!(
            series = chart.title(),
            points = chart.series.len(),
            trend = %chart.trend,
            "presenting chart"
        );
        self.sink.present(chart)
    }
}

/// Fit every dataset, stopping at the first one that cannot be fitted.
pub fn build_charts(datasets: &[BenchmarkDataset]) -> Result<Vec<TrendChart>, ChartError> {
    datasets
        .iter()
        .map(|d| TrendChart::build(&d.series, &d.x_label, &d.y_label))
        .collect()
}

//! Chart sinks
//! Destinations a finished chart is handed to: a window, files, or memory.

use crate::charts::{StaticChartRenderer, TrendChart};
use crate::config::{ImageFormat, RenderConfig};
use crate::error::ChartError;
use crate::gui;
use std::path::PathBuf;
use tracing::{info, warn};

/// Presents one finished chart.
pub trait ChartSink {
    fn present(&mut self, chart: &TrendChart) -> Result<(), ChartError>;
}

/// Shows each chart in a window and blocks until it is closed.
pub struct WindowSink {
    export_size: (u32, u32),
}

impl WindowSink {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            export_size: config.size(),
        }
    }
}

impl ChartSink for WindowSink {
    fn present(&mut self, chart: &TrendChart) -> Result<(), ChartError> {
        info!(series = chart.title(), "showing chart window");
        gui::show_chart_blocking(chart.clone(), self.export_size)
    }
}

/// Writes one image file per chart.
pub struct FileSink {
    out_dir: PathBuf,
    format: ImageFormat,
    size: (u32, u32),
    open_files: bool,
    written: Vec<PathBuf>,
}

impl FileSink {
    pub fn new(config: &RenderConfig, format: ImageFormat) -> Self {
        Self {
            out_dir: config.out_dir.clone(),
            format,
            size: config.size(),
            open_files: config.open_files,
            written: Vec::new(),
        }
    }

    /// Paths written so far, in presentation order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn path_for(&self, chart: &TrendChart) -> PathBuf {
        self.out_dir
            .join(format!("{}.{}", chart.series.slug(), self.format.extension()))
    }
}

impl ChartSink for FileSink {
    fn present(&mut self, chart: &TrendChart) -> Result<(), ChartError> {
        std::fs::create_dir_all(&self.out_dir)?;
        let path = self.path_for(chart);
        StaticChartRenderer::write_file(chart, &path, self.format, self.size)?;
        info!(series = chart.title(), path = %path.display(), "chart written");

        if self.open_files {
            if let Err(e) = open::that(&path) {
                warn!(path = %path.display(), error = %e, "failed to open chart");
            }
        }

        self.written.push(path);
        Ok(())
    }
}

/// A chart rendered to PNG bytes.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub title: String,
    pub png: Vec<u8>,
}

/// Keeps rendered charts in memory.
pub struct MemorySink {
    size: (u32, u32),
    charts: Vec<RenderedChart>,
}

impl MemorySink {
    pub fn new(size: (u32, u32)) -> Self {
        Self {
            size,
            charts: Vec::new(),
        }
    }

    pub fn charts(&self) -> &[RenderedChart] {
        &self.charts
    }

    pub fn into_charts(self) -> Vec<RenderedChart> {
        self.charts
    }
}

impl ChartSink for MemorySink {
    fn present(&mut self, chart: &TrendChart) -> Result<(), ChartError> {
        let png = StaticChartRenderer::render_png(chart, self.size)?;
        info!(series = chart.title(), bytes = png.len(), "chart rendered to memory");
        self.charts.push(RenderedChart {
            title: chart.title().to_string(),
            png,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SampleSeries;

    #[test]
    fn file_names_use_series_slug() {
        let config = RenderConfig {
            out_dir: PathBuf::from("out"),
            ..RenderConfig::default()
        };
        let sink = FileSink::new(&config, ImageFormat::Svg);
        let series = SampleSeries::indexed("Key decryption", &[1.0, 2.0]).unwrap();
        let chart = TrendChart::build(&series, "x", "y").unwrap();
        assert_eq!(sink.path_for(&chart), PathBuf::from("out/key_decryption.svg"));
    }
}

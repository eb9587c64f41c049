//! Trend Chart Window
//! Shows one chart with its fit summary, a PNG export, and a button to move on.

use crate::charts::{ChartPlotter, StaticChartRenderer, TrendChart};
use crate::config::ImageFormat;
use crate::error::ChartError;
use egui::{Color32, RichText, TopBottomPanel};
use tracing::{info, warn};

/// Window application for a single chart.
pub struct TrendChartApp {
    chart: TrendChart,
    export_size: (u32, u32),
    status: String,
}

impl TrendChartApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, chart: TrendChart, export_size: (u32, u32)) -> Self {
        Self {
            chart,
            export_size,
            status: String::new(),
        }
    }

    /// Ask for a destination and write the chart as PNG.
    fn handle_save_png(&mut self) {
        let file_name = format!("{}.png", self.chart.series.slug());
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(&file_name)
            .save_file()
        else {
            return; // User cancelled
        };

        match StaticChartRenderer::write_file(&self.chart, &path, ImageFormat::Png, self.export_size)
        {
            Ok(()) => {
                info!(path = %path.display(), "chart saved");
                self.status = format!("Saved {}", path.display());
            }
            Err(e) => {
                warn!(error = %e, "failed to save chart");
                self.status = format!("Error: {}", e);
            }
        }
    }
}

impl eframe::App for TrendChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Bottom panel - fit summary and actions
        TopBottomPanel::bottom("fit_summary").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new(self.chart.trend.to_string()).size(13.0).strong());
                ui.label(
                    RichText::new(format!("R² = {:.4}", self.chart.trend.r_squared))
                        .size(13.0)
                        .color(Color32::GRAY),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Next ▶").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    if ui.button("💾 Save PNG…").clicked() {
                        self.handle_save_png();
                    }
                });
            });
            if !self.status.is_empty() {
                ui.label(RichText::new(&self.status).size(11.0));
            }
            ui.add_space(4.0);
        });

        // Central panel - chart
        egui::CentralPanel::default().show(ctx, |ui| {
            ChartPlotter::draw_trend_chart(ui, &self.chart);
        });
    }
}

/// Open a window for `chart` and return once the user closes it.
pub fn show_chart_blocking(chart: TrendChart, export_size: (u32, u32)) -> Result<(), ChartError> {
    let title = chart.title().to_string();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(TrendChartApp::new(cc, chart, export_size)))),
    )
    .map_err(|e| ChartError::Display(e.to_string()))
}

//! Static Chart Renderer
//! Renders trend charts to SVG or PNG with plotters.
//!
//! Layout:
//! 1. Caption: series name
//! 2. Measured series as a solid line, trend line dashed on top
//! 3. Mesh with x/y axis descriptions
//! 4. Legend in the upper-left corner with the fitted equation

use crate::charts::TrendChart;
use crate::config::ImageFormat;
use crate::error::ChartError;
use image::RgbImage;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::io::Cursor;
use std::path::Path;

const SERIES_RGB: RGBColor = RGBColor(52, 152, 219); // Blue
const TREND_RGB: RGBColor = RGBColor(231, 76, 60); // Red
const GRID_RGB: RGBColor = RGBColor(220, 220, 220);

const DASH_LENGTH: u32 = 10;
const DASH_SPACING: u32 = 6;

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render a chart as an SVG document.
    pub fn render_svg(chart: &TrendChart, size: (u32, u32)) -> Result<String, ChartError> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
            Self::draw(&root, chart)?;
            root.present().map_err(ChartError::render)?;
        }
        Ok(svg)
    }

    /// Render a chart as PNG bytes.
    pub fn render_png(chart: &TrendChart, size: (u32, u32)) -> Result<Vec<u8>, ChartError> {
        let (width, height) = size;
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
            Self::draw(&root, chart)?;
            root.present().map_err(ChartError::render)?;
        }

        let image = RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| ChartError::Render("bitmap buffer size mismatch".to_string()))?;
        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)?;
        Ok(png)
    }

    /// Render a chart and write it to `path`.
    pub fn write_file(
        chart: &TrendChart,
        path: &Path,
        format: ImageFormat,
        size: (u32, u32),
    ) -> Result<(), ChartError> {
        match format {
            ImageFormat::Png => std::fs::write(path, Self::render_png(chart, size)?)?,
            ImageFormat::Svg => std::fs::write(path, Self::render_svg(chart, size)?)?,
        }
        Ok(())
    }

    fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        chart: &TrendChart,
    ) -> Result<(), ChartError> {
        root.fill(&WHITE).map_err(ChartError::render)?;

        let mut ctx = ChartBuilder::on(root)
            .caption(chart.title(), ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(chart.x_range(), chart.y_range())
            .map_err(ChartError::render)?;

        ctx.configure_mesh()
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .axis_desc_style(("sans-serif", 16))
            .light_line_style(GRID_RGB.mix(0.5))
            .draw()
            .map_err(ChartError::render)?;

        let measured: Vec<(f64, f64)> = chart.series_points().iter().map(|p| (p[0], p[1])).collect();
        ctx.draw_series(LineSeries::new(measured, SERIES_RGB.stroke_width(2)))
            .map_err(ChartError::render)?
            .label("Measured")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], SERIES_RGB.stroke_width(2)));

        let trend: Vec<(f64, f64)> = chart.trend_points().iter().map(|p| (p[0], p[1])).collect();
        ctx.draw_series(DashedLineSeries::new(
            trend,
            DASH_LENGTH,
            DASH_SPACING,
            TREND_RGB.stroke_width(2),
        ))
        .map_err(ChartError::render)?
        .label(chart.trend_label())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], TREND_RGB.stroke_width(2)));

        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .draw()
            .map_err(ChartError::render)?;

        Ok(())
    }
}

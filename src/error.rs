//! Error types shared by fitting, rendering and presentation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("series '{series}' has {points} point(s); a trend line needs at least 2")]
    InsufficientData { series: String, points: usize },
    #[error("series '{series}' has identical x values; slope is undefined")]
    DegenerateAbscissa { series: String },
    #[error("series '{series}' has {x_len} x value(s) but {y_len} y value(s)")]
    LengthMismatch {
        series: String,
        x_len: usize,
        y_len: usize,
    },
    #[error("series '{series}' has a non-finite value at index {index}")]
    NonFiniteValue { series: String, index: usize },
    #[error("Failed to render chart: {0}")]
    Render(String),
    #[error("Failed to display chart: {0}")]
    Display(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("Failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChartError {
    /// Wrap a drawing backend error.
    pub(crate) fn render<E: std::fmt::Display>(err: E) -> Self {
        ChartError::Render(err.to_string())
    }
}

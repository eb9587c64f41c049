//! Sample Series Module
//! Ordered (x, y) measurements for a single benchmark.

use crate::error::ChartError;

/// One benchmark's measurements: x is the independent variable
/// (attestation count or policy length), y the time in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    name: String,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl SampleSeries {
    /// Build a series from separate x and y columns.
    ///
    /// Columns must have equal length and contain only finite values. The
    /// point count is not checked here; fitting reports too-short series.
    pub fn from_columns(
        name: impl Into<String>,
        xs: &[f64],
        ys: &[f64],
    ) -> Result<Self, ChartError> {
        let name = name.into();

        if xs.len() != ys.len() {
            return Err(ChartError::LengthMismatch {
                series: name,
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }

        if let Some(index) = xs
            .iter()
            .zip(ys.iter())
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(ChartError::NonFiniteValue {
                series: name,
                index,
            });
        }

        Ok(Self {
            name,
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    /// Build a series whose x values are the 1-based sample indices.
    pub fn indexed(name: impl Into<String>, ys: &[f64]) -> Result<Self, ChartError> {
        let xs: Vec<f64> = (1..=ys.len()).map(|i| i as f64).collect();
        Self::from_columns(name, &xs, ys)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Points as `[x, y]` pairs in series order.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.xs.iter().zip(self.ys.iter()).map(|(&x, &y)| [x, y])
    }

    /// File-name friendly form of the series name.
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        for c in self.name.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.ends_with('_') {
                slug.push('_');
            }
        }
        let trimmed = slug.trim_matches('_');
        if trimmed.is_empty() {
            "series".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

//! Trend Line Module
//! Degree-1 least-squares fit over a sample series.

use crate::data::SampleSeries;
use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use std::fmt;

/// Minimum number of points for a well-defined fit.
pub const MIN_FIT_POINTS: usize = 2;

/// Fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination of the fit.
    pub r_squared: f64,
}

impl TrendLine {
    /// Fit a line minimizing the sum of squared residuals.
    ///
    /// Uses the centred normal equations: `slope = cov(x, y) / var(x)` and
    /// `intercept = mean(y) - slope * mean(x)`.
    pub fn fit(series: &SampleSeries) -> Result<Self, ChartError> {
        let n = series.len();
        if n < MIN_FIT_POINTS {
            return Err(ChartError::InsufficientData {
                series: series.name().to_string(),
                points: n,
            });
        }

        let xs = series.xs();
        let ys = series.ys();

        let mean_x = xs.iter().mean();
        let mean_y = ys.iter().mean();
        let var_x = xs.iter().variance();
        let cov_xy = xs.iter().covariance(ys.iter());

        if var_x == 0.0 || !var_x.is_finite() {
            return Err(ChartError::DegenerateAbscissa {
                series: series.name().to_string(),
            });
        }

        let slope = cov_xy / var_x;
        let intercept = mean_y - slope * mean_x;

        let mut ss_res = 0.0;
        let mut ss_tot = 0.0;
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            let residual = y - (slope * x + intercept);
            ss_res += residual * residual;
            ss_tot += (y - mean_y) * (y - mean_y);
        }
        // A constant series is reproduced exactly by its horizontal fit.
        let r_squared = if ss_tot == 0.0 {
            1.0
        } else {
            1.0 - ss_res / ss_tot
        };

        Ok(Self {
            slope,
            intercept,
            r_squared,
        })
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Evaluate the line at each x, preserving order and length.
    pub fn evaluate_all(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}

impl fmt::Display for TrendLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.intercept < 0.0 { '-' } else { '+' };
        write!(
            f,
            "y = {:.3}x {} {:.3}",
            self.slope,
            sign,
            self.intercept.abs()
        )
    }
}

/// Per-series fit result, as printed by `--summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitSummary {
    pub series: String,
    pub points: usize,
    #[serde(flatten)]
    pub trend: TrendLine,
}

impl FitSummary {
    pub fn new(series: &SampleSeries, trend: TrendLine) -> Self {
        Self {
            series: series.name().to_string(),
            points: series.len(),
            trend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn series(xs: &[f64], ys: &[f64]) -> SampleSeries {
        SampleSeries::from_columns("test", xs, ys).unwrap()
    }

    #[test]
    fn identity_line() {
        let trend = TrendLine::fit(&series(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0])).unwrap();
        assert!((trend.slope - 1.0).abs() < TOLERANCE);
        assert!(trend.intercept.abs() < TOLERANCE);
        assert!((trend.r_squared - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn constant_series_is_horizontal() {
        let trend =
            TrendLine::fit(&series(&[1.0, 2.0, 3.0, 4.0], &[2.0, 2.0, 2.0, 2.0])).unwrap();
        assert!(trend.slope.abs() < TOLERANCE);
        assert!((trend.intercept - 2.0).abs() < TOLERANCE);
        assert_eq!(trend.r_squared, 1.0);
    }

    #[test]
    fn single_point_is_insufficient() {
        let err = TrendLine::fit(&series(&[1.0], &[5.0])).unwrap_err();
        match err {
            ChartError::InsufficientData { series, points } => {
                assert_eq!(series, "test");
                assert_eq!(points, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_series_is_insufficient() {
        let err = TrendLine::fit(&series(&[], &[])).unwrap_err();
        assert!(matches!(err, ChartError::InsufficientData { points: 0, .. }));
    }

    #[test]
    fn identical_x_values_are_rejected() {
        let err = TrendLine::fit(&series(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0])).unwrap_err();
        assert!(matches!(err, ChartError::DegenerateAbscissa { .. }));
    }

    #[test]
    fn matches_hand_computed_fit() {
        // x̄ = 2.5, ȳ = 4.0, Sxy = 7.0, Sxx = 5.0
        let trend =
            TrendLine::fit(&series(&[1.0, 2.0, 3.0, 4.0], &[2.0, 3.0, 5.0, 6.0])).unwrap();
        assert!((trend.slope - 1.4).abs() < TOLERANCE);
        assert!((trend.intercept - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn evaluate_all_keeps_length() {
        let trend = TrendLine {
            slope: 2.0,
            intercept: 1.0,
            r_squared: 1.0,
        };
        assert_eq!(trend.evaluate_all(&[0.0, 1.0, 2.0]), vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn display_formats_negative_intercept() {
        let trend = TrendLine {
            slope: 1.5,
            intercept: -2.25,
            r_squared: 0.9,
        };
        assert_eq!(trend.to_string(), "y = 1.500x - 2.250");
    }

    #[test]
    fn summary_serializes_flat() {
        let s = series(&[1.0, 2.0], &[3.0, 5.0]);
        let trend = TrendLine::fit(&s).unwrap();
        let json = serde_json::to_value(FitSummary::new(&s, trend)).unwrap();
        assert_eq!(json["series"], "test");
        assert_eq!(json["points"], 2);
        assert!((json["slope"].as_f64().unwrap() - 2.0).abs() < TOLERANCE);
    }
}

//! Embedded benchmark measurements, in presentation order.

use super::SampleSeries;
use crate::error::ChartError;

pub const ATTESTATIONS_LABEL: &str = "Amount of attestations";
pub const POLICY_LENGTH_LABEL: &str = "Length of policy";
pub const TIME_LABEL: &str = "Time (milliseconds)";

const PROOF_OBJECT_VERIFICATION_MS: [f64; 30] = [
    38.0, 32.0, 34.0, 32.0, 33.0, 35.0, 40.0, 39.0, 41.0, 46.0, 47.0, 53.0, 52.0, 47.0, 54.0,
    53.0, 54.0, 58.0, 53.0, 49.0, 56.0, 62.0, 60.0, 66.0, 67.0, 72.0, 76.0, 65.0, 74.0, 80.0,
];

const PROOF_OBJECT_CONSTRUCTION_MS: [f64; 30] = [
    137.0, 250.0, 417.0, 690.0, 993.0, 1290.0, 1614.0, 1890.0, 2194.0, 2528.0, 2803.0, 3161.0,
    3434.0, 3746.0, 4025.0, 4389.0, 4633.0, 4975.0, 5196.0, 5502.0, 5761.0, 6043.0, 6344.0,
    6629.0, 7161.0, 7400.0, 7646.0, 8241.0, 8500.0, 8651.0,
];

// Placeholder figures: no recorded run of the key-decryption benchmark exists yet.
const KEY_DECRYPTION_MS: [f64; 30] = [
    15.0, 18.0, 21.0, 23.0, 27.0, 30.0, 33.0, 35.0, 39.0, 41.0, 45.0, 47.0, 51.0, 53.0, 57.0,
    59.0, 63.0, 66.0, 68.0, 72.0, 75.0, 77.0, 81.0, 84.0, 86.0, 90.0, 93.0, 95.0, 99.0, 102.0,
];

/// A series together with the axis labels it is drawn with.
#[derive(Debug, Clone)]
pub struct BenchmarkDataset {
    pub series: SampleSeries,
    pub x_label: String,
    pub y_label: String,
}

impl BenchmarkDataset {
    pub fn new(series: SampleSeries, x_label: &str, y_label: &str) -> Self {
        Self {
            series,
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
        }
    }
}

/// The three benchmark datasets: verification, construction, decryption.
pub fn builtin_datasets() -> Result<Vec<BenchmarkDataset>, ChartError> {
    Ok(vec![
        BenchmarkDataset::new(
            SampleSeries::indexed("Proof object verification", &PROOF_OBJECT_VERIFICATION_MS)?,
            ATTESTATIONS_LABEL,
            TIME_LABEL,
        ),
        BenchmarkDataset::new(
            SampleSeries::indexed("Proof object construction", &PROOF_OBJECT_CONSTRUCTION_MS)?,
            ATTESTATIONS_LABEL,
            TIME_LABEL,
        ),
        BenchmarkDataset::new(
            SampleSeries::indexed("Key decryption", &KEY_DECRYPTION_MS)?,
            POLICY_LENGTH_LABEL,
            TIME_LABEL,
        ),
    ])
}

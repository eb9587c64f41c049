//! Data module - Sample series and embedded benchmark data

mod datasets;
mod series;

pub use datasets::{
    builtin_datasets, BenchmarkDataset, ATTESTATIONS_LABEL, POLICY_LENGTH_LABEL, TIME_LABEL,
};
pub use series::SampleSeries;

//! Bench Charts - Benchmark trend charts
//!
//! Plots proof-object verification, proof-object construction and
//! key-decryption timings, each with a least-squares trend line.

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod gui;
pub mod output;
pub mod report;
pub mod stats;

pub use charts::TrendChart;
pub use config::{ImageFormat, OutputMode, RenderConfig};
pub use data::{builtin_datasets, BenchmarkDataset, SampleSeries};
pub use error::ChartError;
pub use output::{ChartSink, FileSink, MemorySink, WindowSink};
pub use report::ChartRenderer;
pub use stats::{FitSummary, TrendLine};

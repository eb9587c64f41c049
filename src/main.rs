//! Bench Charts - Benchmark trend chart renderer
//!
//! Plots the embedded benchmark timings, one chart per series, each with a
//! dashed least-squares trend line.

use anyhow::Context;
use bench_charts::{
    builtin_datasets, ChartRenderer, ChartSink, FileSink, FitSummary, ImageFormat, MemorySink,
    OutputMode, RenderConfig, WindowSink,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "bench_charts")]
#[command(about = "Plot benchmark timings with least-squares trend lines")]
struct Cli {
    /// Where charts are presented
    #[arg(long, value_enum, default_value_t = OutputArg::Window, env = "BENCH_CHARTS_OUTPUT")]
    output: OutputArg,

    /// Directory for png/svg output
    #[arg(long, default_value = "charts", env = "BENCH_CHARTS_OUT_DIR")]
    out_dir: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 768)]
    height: u32,

    /// Open written files with the system viewer
    #[arg(long)]
    open: bool,

    /// Print fitted trend lines as JSON
    #[arg(long)]
    summary: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputArg {
    Window,
    Png,
    Svg,
    Memory,
}

impl From<OutputArg> for OutputMode {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Window => OutputMode::Window,
            OutputArg::Png => OutputMode::File(ImageFormat::Png),
            OutputArg::Svg => OutputMode::File(ImageFormat::Svg),
            OutputArg::Memory => OutputMode::Memory,
        }
    }
}

impl Cli {
    fn into_config(self) -> RenderConfig {
        RenderConfig {
            output: self.output.into(),
            out_dir: self.out_dir,
            width: self.width,
            height: self.height,
            open_files: self.open,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("bench_charts=info".parse()?))
        .init();

    let cli = Cli::parse();
    let summary = cli.summary;
    let config = cli.into_config();
    info!(output = %config.output, "rendering benchmark charts");

    let fits = match config.output {
        OutputMode::Window => render(WindowSink::new(&config))?,
        OutputMode::File(format) => render(FileSink::new(&config, format))?,
        OutputMode::Memory => render(MemorySink::new(config.size()))?,
    };

    if summary {
        println!("{}", serde_json::to_string_pretty(&fits)?);
    }

    Ok(())
}

fn render<S: ChartSink>(sink: S) -> anyhow::Result<Vec<FitSummary>> {
    let datasets = builtin_datasets().context("invalid embedded dataset")?;
    let mut renderer = ChartRenderer::new(sink);
    let fits = renderer
        .render_all(&datasets)
        .context("failed to render benchmark charts")?;
    info!(charts = fits.len(), "done");
    Ok(fits)
}

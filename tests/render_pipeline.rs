use bench_charts::charts::StaticChartRenderer;
use bench_charts::data::{ATTESTATIONS_LABEL, TIME_LABEL};
use bench_charts::{
    builtin_datasets, BenchmarkDataset, ChartError, ChartRenderer, ChartSink, FileSink,
    ImageFormat, MemorySink, OutputMode, RenderConfig, SampleSeries, TrendChart,
};
use tempfile::tempdir;

#[derive(Default)]
struct RecordingSink {
    charts: Vec<TrendChart>,
}

impl ChartSink for RecordingSink {
    fn present(&mut self, chart: &TrendChart) -> Result<(), ChartError> {
        self.charts.push(chart.clone());
        Ok(())
    }
}

#[test]
fn builtin_charts_are_presented_in_order() {
    let datasets = builtin_datasets().unwrap();
    let mut renderer = ChartRenderer::new(RecordingSink::default());
    let fits = renderer.render_all(&datasets).unwrap();

    let sink = renderer.into_sink();
    let titles: Vec<&str> = sink.charts.iter().map(|c| c.title()).collect();
    assert_eq!(
        titles,
        [
            "Proof object verification",
            "Proof object construction",
            "Key decryption"
        ]
    );
    assert_eq!(fits.len(), 3);
    for chart in &sink.charts {
        assert_eq!(chart.trend_values.len(), chart.series.len());
        assert_eq!(chart.y_label, TIME_LABEL);
    }
}

#[test]
fn builtin_trends_grow_with_input_size() {
    let datasets = builtin_datasets().unwrap();
    let mut renderer = ChartRenderer::new(RecordingSink::default());
    let fits = renderer.render_all(&datasets).unwrap();
    assert!(fits.iter().all(|f| f.trend.slope > 0.0));
    assert!(fits[1].trend.slope > fits[0].trend.slope);
}

#[test]
fn malformed_series_aborts_before_presenting() {
    let mut datasets = builtin_datasets().unwrap();
    datasets.insert(
        1,
        BenchmarkDataset::new(
            SampleSeries::from_columns("Broken", &[1.0], &[5.0]).unwrap(),
            ATTESTATIONS_LABEL,
            TIME_LABEL,
        ),
    );

    let mut renderer = ChartRenderer::new(RecordingSink::default());
    let err = renderer.render_all(&datasets).unwrap_err();
    assert!(matches!(err, ChartError::InsufficientData { ref series, .. } if series == "Broken"));
    assert!(renderer.sink().charts.is_empty());
}

#[test]
fn file_sink_writes_one_svg_per_series() {
    let dir = tempdir().unwrap();
    let config = RenderConfig {
        output: OutputMode::File(ImageFormat::Svg),
        out_dir: dir.path().join("charts"),
        width: 640,
        height: 480,
        open_files: false,
    };
    let datasets = builtin_datasets().unwrap();
    let mut renderer = ChartRenderer::new(FileSink::new(&config, ImageFormat::Svg));
    renderer.render_all(&datasets).unwrap();

    let sink = renderer.into_sink();
    let names: Vec<String> = sink
        .written()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        [
            "proof_object_verification.svg",
            "proof_object_construction.svg",
            "key_decryption.svg"
        ]
    );

    let svg = std::fs::read_to_string(&sink.written()[2]).unwrap();
    assert!(svg.contains("Length of policy"));
    assert!(svg.contains("Time (milliseconds)"));
}

#[test]
fn memory_sink_holds_png_bytes() {
    let series = SampleSeries::indexed("Memory", &[3.0, 5.0, 4.0, 8.0]).unwrap();
    let mut renderer = ChartRenderer::new(MemorySink::new((320, 240)));
    renderer
        .render_series_with_trend(&series, ATTESTATIONS_LABEL, TIME_LABEL)
        .unwrap();

    let charts = renderer.into_sink().into_charts();
    assert_eq!(charts.len(), 1);
    assert_eq!(charts[0].title, "Memory");
    assert_eq!(&charts[0].png[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn svg_contains_both_axis_labels() {
    let series = SampleSeries::indexed("Labels", &[1.0, 2.0, 4.0]).unwrap();
    let chart = TrendChart::build(&series, ATTESTATIONS_LABEL, TIME_LABEL).unwrap();
    let svg = StaticChartRenderer::render_svg(&chart, (480, 360)).unwrap();
    assert!(svg.contains(ATTESTATIONS_LABEL));
    assert!(svg.contains(TIME_LABEL));
    assert!(svg.contains("Measured"));
}

//! End-to-end runs over CSV files on disk.

use std::io::Write;
use std::path::PathBuf;

use smacross_core::data::FormatError;
use smacross_core::{run, LoadError, OutputFormat, PipelineError, RunConfig};

const HEADER: &str = "Date,Open,High,Low,Close,Volume";

/// Write a CSV with one row per close, dated from 2024-01-01.
fn write_csv(dir: &tempfile::TempDir, closes: &[f64], extra: &[&str]) -> PathBuf {
    let path = dir.path().join("prices.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{HEADER}").unwrap();
    let base = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for (i, close) in closes.iter().enumerate() {
        let date = base + chrono::Duration::days(i as i64);
        writeln!(file, "{date},1,1,1,{close},1000").unwrap();
    }
    for line in extra {
        writeln!(file, "{line}").unwrap();
    }
    path
}

fn run_text(path: PathBuf) -> (Vec<String>, smacross_core::RunSummary) {
    let config = RunConfig::default().with_input(Some(path));
    let mut out = Vec::new();
    let summary = run(&config, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    (text.lines().map(str::to_string).collect(), summary)
}

#[test]
fn twenty_one_rising_closes() {
    let dir = tempfile::tempdir().unwrap();
    let closes: Vec<f64> = (100..=120).map(f64::from).collect();
    let (lines, summary) = run_text(write_csv(&dir, &closes, &[]));

    assert_eq!(
        lines,
        vec![
            "Date: 2024-01-20, Close: 119.00, SMA(20): 109.50, Signal: ",
            "Date: 2024-01-21, Close: 120.00, SMA(20): 110.50, Signal: ",
        ]
    );
    assert_eq!(summary.rows_read, 22);
    assert_eq!(summary.records, 21);
    assert_eq!(summary.emitted, 2);
}

#[test]
fn buy_and_sell_reported() {
    let dir = tempfile::tempdir().unwrap();
    // flat at 100, pop to 121 (BUY), then collapse to 80 (SELL)
    let mut closes = vec![100.0; 21];
    closes.push(121.0);
    closes.push(80.0);
    let (lines, summary) = run_text(write_csv(&dir, &closes, &[]));

    assert_eq!(lines.len(), 4);
    assert!(lines[2].ends_with("Signal: BUY"), "{}", lines[2]);
    assert!(lines[3].ends_with("Signal: SELL"), "{}", lines[3]);
    assert_eq!(summary.buys, 1);
    assert_eq!(summary.sells, 1);
}

#[test]
fn malformed_rows_do_not_disturb_valid_ones() {
    let dir = tempfile::tempdir().unwrap();
    let clean: Vec<f64> = (100..=120).map(f64::from).collect();
    let (clean_lines, _) = run_text(write_csv(&dir, &clean, &[]));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dirty.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{HEADER}").unwrap();
    let base = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for (i, close) in clean.iter().enumerate() {
        if i == 5 {
            writeln!(file, "2024-01-05,1,1").unwrap();
            writeln!(file, "2024-13-40,1,1,1,100,1000").unwrap();
            writeln!(file, "2024-01-05,1,1,1,abc,1000").unwrap();
        }
        let date = base + chrono::Duration::days(i as i64);
        writeln!(file, "{date},1,1,1,{close},1000").unwrap();
    }
    drop(file);

    let (dirty_lines, summary) = run_text(path);
    assert_eq!(dirty_lines, clean_lines);
    assert_eq!(summary.skipped, 3);
    assert_eq!(summary.records, 21);
}

#[test]
fn header_only_file_is_a_clean_empty_run() {
    let dir = tempfile::tempdir().unwrap();
    let (lines, summary) = run_text(write_csv(&dir, &[], &[]));
    assert!(lines.is_empty());
    assert_eq!(summary.records, 0);
    assert_eq!(summary.emitted, 0);
}

#[test]
fn missing_file_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunConfig::default().with_input(Some(dir.path().join("ksa_us_d.csv")));
    let mut out = Vec::new();
    let err = run(&config, &mut out).unwrap_err();

    assert!(matches!(err, PipelineError::Load(LoadError::Io { .. })));
    assert!(out.is_empty());
}

#[test]
fn undecodable_file_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(&path, b"Date,Open,High,Low,Close\n2024-01-01,1,1,1,\xff\n").unwrap();
    let config = RunConfig::default().with_input(Some(path));
    let mut out = Vec::new();
    let err = run(&config, &mut out).unwrap_err();

    assert!(matches!(err, PipelineError::Load(LoadError::Format { .. })));
    assert!(out.is_empty());
}

#[test]
fn unterminated_quote_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let closes: Vec<f64> = (100..=125).map(f64::from).collect();
    let path = write_csv(&dir, &closes, &["2024-02-01,1,1,1,\"130,1000", "2024-02-02,1,1,1,131,1000"]);
    let config = RunConfig::default().with_input(Some(path));
    let mut out = Vec::new();
    let err = run(&config, &mut out).unwrap_err();

    assert!(
        matches!(
            err,
            PipelineError::Load(LoadError::Format {
                source: FormatError::UnterminatedQuote { line: 28 },
                ..
            })
        ),
        "got {err:?}"
    );
    assert!(out.is_empty());
}

#[test]
fn json_output_has_one_object_per_row() {
    let dir = tempfile::tempdir().unwrap();
    let mut closes = vec![100.0; 21];
    closes.push(121.0);
    let config = RunConfig::default()
        .with_input(Some(write_csv(&dir, &closes, &[])))
        .with_format(Some(OutputFormat::Json));
    let mut out = Vec::new();
    run(&config, &mut out).unwrap();

    let values: Vec<serde_json::Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(values.len(), 3);
    assert_eq!(values[2]["date"], "2024-01-22");
    assert_eq!(values[2]["close"], 121.0);
    assert_eq!(values[2]["signal"], "BUY");
    assert!(values[0]["signal"].is_null());
}

//! End-to-end: input file → parse → tally → propagate → render.

use std::fs;
use std::path::PathBuf;

use stones_engine::{HistogramPropagator, SimConfig};
use stones_io::{read_values, render, render_section, render_total, tally, HEADER_END};
use stones_test_utils::fixtures::{SAMPLE_TEXT, SAMPLE_TOTAL_25};

fn write_input(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("stones-io-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn sample_file_renders_expected_total() {
    let path = write_input("sample.txt", SAMPLE_TEXT);
    let initial = tally(read_values(&path).unwrap());

    let mut p = HistogramPropagator::new(SimConfig::with_rounds(25)).unwrap();
    let report = p.run_with_report(initial).unwrap();
    assert_eq!(report.total, SAMPLE_TOTAL_25);

    let mut out = Vec::new();
    render_section(&mut out, HEADER_END, &report.histogram).unwrap();
    let mut tail = Vec::new();
    render_total(&mut tail, report.total).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("~~END HISTOGRAM~~\n"));
    assert_eq!(text.lines().count(), report.histogram.len() + 1);
    assert_eq!(String::from_utf8(tail).unwrap(), "~~Total Count~~\n55312\n");
}

#[test]
fn one_round_output_matches_worked_example() {
    let path = write_input("one_round.txt", "125 17");
    let initial = tally(read_values(&path).unwrap());

    let mut p = HistogramPropagator::new(SimConfig::default()).unwrap();
    let h = p.run(initial, 1).unwrap();
    let total = h.total().unwrap();

    let mut out = Vec::new();
    render(&mut out, &h, total).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "{1, 1}\n{7, 1}\n{253000, 1}\n~~Total Count~~\n3\n"
    );
}

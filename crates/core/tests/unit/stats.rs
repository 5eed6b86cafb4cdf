//! # Statistics Tests

use logihex_core::parser::parse_lines;
use logihex_core::stats::{ConvertStats, STATS_SECTIONS};

fn sample() -> ConvertStats {
    let mut stats = parse_lines(["v3.0 hex words addressed", "0: 1 2", "# note", "1: 3"]).stats;
    stats.lines_emitted = 4;
    stats.lines_filled = 2;
    stats
}

#[test]
fn test_parse_counters() {
    let stats = sample();
    assert_eq!(stats.lines_read, 4);
    assert!(stats.header_seen);
    assert_eq!(stats.records, 2);
    assert_eq!(stats.ignored_lines, 1);
    assert_eq!(stats.words_parsed, 3);
    assert_eq!(stats.overwrites, 1);
}

#[test]
fn test_render_all_sections() {
    let report = sample().render();
    assert!(report.contains("LOGISIM IMAGE CONVERSION STATISTICS"));
    assert!(report.contains("input_records            2"));
    assert!(report.contains("words_overwritten        1"));
    assert!(report.contains("output_filled            2"));
}

#[test]
fn test_render_selected_section() {
    let report = sample().render_sections(&["output"]);
    assert!(report.contains("output_lines"));
    assert!(!report.contains("input_lines"));
    assert!(!report.contains("words_parsed"));
}

#[test]
fn test_section_names() {
    assert_eq!(STATS_SECTIONS, &["input", "words", "output"]);
}

#[test]
fn test_display_summary() {
    assert_eq!(
        sample().to_string(),
        "4 lines (2 records, 1 ignored), 3 words, 1 overwritten, 4 emitted (2 filled)"
    );
}

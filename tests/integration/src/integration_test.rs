//! End-to-end tests over realistic slicer output
//!
//! Each fixture is copied to a temp dir, rewritten in place through the same
//! read -> reorder -> atomic write path the CLI uses, and compared byte for
//! byte with the expected file next to it.

use ad5m_blocks::Options;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/gcode")
        .join(name)
}

/// Copy `name` into `dir` and rewrite it like the CLI does.
fn rewrite_copy(dir: &Path, name: &str, options: &Options) -> (String, ad5m_blocks::Summary) {
    let path = dir.join(name);
    fs::copy(fixture(name), &path).unwrap();

    let content = ad5m_fs::read_text(&path).unwrap();
    let (output, summary) = ad5m_blocks::process(&content, options);
    ad5m_fs::write_text(&path, &output).unwrap();

    (fs::read_to_string(&path).unwrap(), summary)
}

#[rstest]
#[case::with_detector("orca_ad5m.gcode", true, "orca_ad5m.expected.gcode")]
#[case::without_detector("orca_ad5m.gcode", false, "orca_ad5m.no_detector.expected.gcode")]
#[case::no_thumbnail("no_thumbnail.gcode", true, "no_thumbnail.expected.gcode")]
#[case::two_thumbnails("two_thumbnails.gcode", true, "two_thumbnails.expected.gcode")]
fn test_fixture_matches_expected(
    #[case] input: &str,
    #[case] spaghetti_detector: bool,
    #[case] expected: &str,
) {
    let temp = TempDir::new().unwrap();
    let options = Options { spaghetti_detector };

    let (actual, _) = rewrite_copy(temp.path(), input, &options);

    let expected = fs::read_to_string(fixture(expected)).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn test_orca_summary() {
    let temp = TempDir::new().unwrap();
    let (_, summary) = rewrite_copy(temp.path(), "orca_ad5m.gcode", &Options::default());

    assert_eq!(summary.pre_config_lines, 8);
    assert_eq!(summary.injected_lines, 2);
    assert_eq!(summary.header_lines, 8 + 2 + 2);
    assert_eq!(summary.config_lines, 3 + 2 + 2);
    assert!(!summary.metadata_dropped);
    assert_eq!(
        summary.output_lines,
        summary.input_lines + 4 + summary.injected_lines
    );
}

#[test]
fn test_two_thumbnails_repeat_metadata() {
    let temp = TempDir::new().unwrap();
    let (output, summary) =
        rewrite_copy(temp.path(), "two_thumbnails.gcode", &Options::default());

    assert_eq!(output.matches("; HEADER_BLOCK_START").count(), 2);
    assert_eq!(output.matches("; CONFIG_BLOCK_START").count(), 2);
    assert_eq!(output.matches("; total layers count").count(), 2);
    let metadata = summary.header_lines + summary.pre_config_lines + summary.config_lines;
    assert_eq!(
        summary.output_lines,
        summary.input_lines + 4 + metadata + summary.injected_lines
    );
}

#[test]
fn test_no_thumbnail_drops_metadata() {
    let temp = TempDir::new().unwrap();
    let (output, summary) =
        rewrite_copy(temp.path(), "no_thumbnail.gcode", &Options::default());

    assert!(summary.metadata_dropped);
    assert!(!output.contains("; HEADER_BLOCK_START"));
    assert!(!output.contains("; CONFIG_BLOCK_START"));
    assert!(!output.contains("; estimated printing time"));
}

#[test]
fn test_second_run_only_moves_blank_lines() {
    let temp = TempDir::new().unwrap();
    let options = Options {
        spaghetti_detector: false,
    };
    let (first, _) = rewrite_copy(temp.path(), "orca_ad5m.gcode", &options);
    let (second, _) = ad5m_blocks::process(&first, &options);

    let non_blank = |text: &str| -> Vec<String> {
        text.lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    };
    assert_eq!(non_blank(&second), non_blank(&first));
}

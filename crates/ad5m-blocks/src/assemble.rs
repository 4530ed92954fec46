//! Reassembly of regions into the order the printer firmware expects.

use crate::Options;
use crate::inject::inject_safety_markers;
use crate::markers::{BlockKind, is_marker};
use crate::partition::{Partition, Region};

/// Counts describing one run over a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub input_lines: usize,
    pub output_lines: usize,
    pub thumbnail_lines: usize,
    pub header_lines: usize,
    pub pre_config_lines: usize,
    pub config_lines: usize,
    pub main_body_lines: usize,
    pub injected_lines: usize,
    /// Header, statistics or config lines existed but had nowhere to go
    /// because the file has no thumbnail end marker.
    pub metadata_dropped: bool,
}

/// Output lines of a run together with its [`Summary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed<'a> {
    pub lines: Vec<&'a str>,
    pub summary: Summary,
}

/// Lay out the regions of `partition` followed by `body`.
///
/// Header, statistics and config go right after every thumbnail end marker,
/// so a file with several thumbnails carries them once per thumbnail.
/// Without an end marker they are left out entirely.
pub fn reassemble<'a>(partition: &Partition<'a>, body: Vec<&'a str>) -> Vec<&'a str> {
    let thumbnail = partition.region(Region::Thumbnail);
    let mut output = Vec::with_capacity(partition.captured_lines() + body.len());

    for &line in thumbnail {
        output.push(line);
        if is_marker(line, BlockKind::Thumbnail.end_marker()) {
            output.extend_from_slice(partition.region(Region::Header));
            output.extend_from_slice(partition.region(Region::PreConfigFields));
            output.extend_from_slice(partition.region(Region::Config));
        }
    }

    output.extend(body);
    output
}

/// Reorder the lines of a sliced file.
///
/// # Example
/// ```
/// use ad5m_blocks::{Options, process_lines};
///
/// let input = [
///     "; HEADER_BLOCK_START\n",
///     "; HEADER_BLOCK_END\n",
///     "; THUMBNAIL_BLOCK_START\n",
///     "; THUMBNAIL_BLOCK_END\n",
///     "G28\n",
/// ];
/// let processed = process_lines(&input, &Options::default());
/// assert_eq!(processed.lines[0], "; THUMBNAIL_BLOCK_START\n");
/// assert_eq!(processed.lines[3], "; HEADER_BLOCK_START\n");
/// ```
pub fn process_lines<'a>(lines: &[&'a str], options: &Options) -> Processed<'a> {
    let partition = Partition::from_lines(lines);

    let main_body = partition.region(Region::MainBody);
    let (body, injected_lines) = if options.spaghetti_detector {
        inject_safety_markers(main_body)
    } else {
        (main_body.to_vec(), 0)
    };

    let has_thumbnail_end = partition
        .region(Region::Thumbnail)
        .iter()
        .any(|line| is_marker(line, BlockKind::Thumbnail.end_marker()));
    let metadata_lines = partition.region(Region::Header).len()
        + partition.region(Region::PreConfigFields).len()
        + partition.region(Region::Config).len();
    let metadata_dropped = !has_thumbnail_end && metadata_lines > 0;
    if metadata_dropped {
        tracing::debug!(
            metadata_lines,
            "No thumbnail end marker, header and config are omitted"
        );
    }

    let output = reassemble(&partition, body);

    let summary = Summary {
        input_lines: lines.len(),
        output_lines: output.len(),
        thumbnail_lines: partition.region(Region::Thumbnail).len(),
        header_lines: partition.region(Region::Header).len(),
        pre_config_lines: partition.region(Region::PreConfigFields).len(),
        config_lines: partition.region(Region::Config).len(),
        main_body_lines: main_body.len(),
        injected_lines,
        metadata_dropped,
    };
    tracing::debug!(?summary, "Reordered gcode");

    Processed {
        lines: output,
        summary,
    }
}

/// Reorder whole-file text, returning the new text and its [`Summary`].
pub fn process(content: &str, options: &Options) -> (String, Summary) {
    let lines = crate::split_lines(content);
    let processed = process_lines(&lines, options);
    (processed.lines.concat(), processed.summary)
}

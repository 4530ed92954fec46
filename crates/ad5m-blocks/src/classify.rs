//! Line-by-line classification of a sliced gcode file.
//!
//! The scanner keeps one flag per block plus a flag that says whether
//! statistics lines may still be lifted out of the main body. Checks run in
//! a fixed priority order: config, header, thumbnail, statistics, body. A
//! line that could match several categories goes to the first one.

use crate::markers::{BlockKind, is_marker, is_pre_config_field};

/// Where a single input line is filed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The start marker of a block.
    OpenBlock(BlockKind),
    /// The end marker of a block.
    CloseBlock(BlockKind),
    /// A line between a block's markers.
    Inside(BlockKind),
    /// A print statistics line found before the config block.
    PreConfigField,
    /// Everything else.
    MainBody,
}

/// Stateful scanner assigning each line a [`Placement`].
///
/// Feed lines in file order; the result for a line depends on every line
/// before it.
#[derive(Debug, Clone)]
pub struct Classifier {
    in_config: bool,
    in_header: bool,
    in_thumbnail: bool,
    collecting_pre_config: bool,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            in_config: false,
            in_header: false,
            in_thumbnail: false,
            collecting_pre_config: true,
        }
    }

    /// Classify the next line.
    pub fn classify(&mut self, line: &str) -> Placement {
        let config = BlockKind::Config;
        if is_marker(line, config.start_marker()) {
            self.in_config = true;
            // Statistics after the config block has started belong to it or the body.
            self.collecting_pre_config = false;
            return Placement::OpenBlock(config);
        }
        if is_marker(line, config.end_marker()) {
            self.in_config = false;
            return Placement::CloseBlock(config);
        }
        if self.in_config {
            return Placement::Inside(config);
        }

        let header = BlockKind::Header;
        if is_marker(line, header.start_marker()) {
            self.in_header = true;
            return Placement::OpenBlock(header);
        }
        if is_marker(line, header.end_marker()) {
            self.in_header = false;
            return Placement::CloseBlock(header);
        }
        if self.in_header {
            return Placement::Inside(header);
        }

        // The thumbnail keeps its own markers and is not padded.
        let thumbnail = BlockKind::Thumbnail;
        if is_marker(line, thumbnail.start_marker()) {
            self.in_thumbnail = true;
            return Placement::OpenBlock(thumbnail);
        }
        if is_marker(line, thumbnail.end_marker()) {
            self.in_thumbnail = false;
            return Placement::CloseBlock(thumbnail);
        }
        if self.in_thumbnail {
            return Placement::Inside(thumbnail);
        }

        if self.collecting_pre_config && is_pre_config_field(line) {
            return Placement::PreConfigField;
        }

        Placement::MainBody
    }
}

//! Gcode metadata block reordering for the Flashforge Adventurer 5M.
//!
//! The printer only shows print time, filament usage and a preview on its
//! screen when these appear in a particular order near the top of the file.
//! Slicers write them elsewhere, so this crate moves them:
//!
//! ```text
//! ; THUMBNAIL_BLOCK_START ... ; THUMBNAIL_BLOCK_END
//! ; HEADER_BLOCK_START ... ; HEADER_BLOCK_END
//! ; filament used [g] = ...          (print statistics)
//! ; CONFIG_BLOCK_START ... ; CONFIG_BLOCK_END
//! <everything else, in original order>
//! ```
//!
//! Optionally the filament start and end gcode is bracketed with `M981`
//! commands so the printer's spaghetti detector is armed while printing.
//!
//! Marker structure is trusted as found. Unbalanced or misplaced markers
//! change the output shape but never cause an error.

pub mod assemble;
pub mod classify;
pub mod inject;
pub mod markers;
pub mod partition;

pub use assemble::{Processed, Summary, process, process_lines, reassemble};
pub use classify::{Classifier, Placement};
pub use inject::inject_safety_markers;
pub use markers::BlockKind;
pub use partition::{Partition, Region};

/// Settings for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Bracket the extrusion gcode with spaghetti detector commands.
    pub spaghetti_detector: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            spaghetti_detector: true,
        }
    }
}

/// Split text into lines, keeping each line's terminator.
///
/// Concatenating the result gives back `content` unchanged.
///
/// # Example
/// ```
/// use ad5m_blocks::split_lines;
///
/// assert_eq!(split_lines("G28\r\nG1 X0"), vec!["G28\r\n", "G1 X0"]);
/// assert!(split_lines("").is_empty());
/// ```
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

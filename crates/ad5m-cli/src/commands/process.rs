//! In-place reordering of a sliced gcode file

use std::path::Path;

use ad5m_blocks::{Options, Summary};

use crate::error::{CliError, Result};

/// Reorder the gcode at `path` and write the result back to the same file.
///
/// The file is left untouched if anything fails before the write.
pub fn run_process(path: &Path, options: &Options) -> Result<Summary> {
    if path.is_dir() {
        return Err(CliError::user(format!(
            "{} is a directory, expected a gcode file",
            path.display()
        )));
    }

    let content = ad5m_fs::read_text(path)?;
    let (output, summary) = ad5m_blocks::process(&content, options);

    tracing::debug!(
        path = %path.display(),
        input_lines = summary.input_lines,
        output_lines = summary.output_lines,
        injected = summary.injected_lines,
        metadata_dropped = summary.metadata_dropped,
        "Processed gcode"
    );

    ad5m_fs::write_text(path, &output)?;
    Ok(summary)
}

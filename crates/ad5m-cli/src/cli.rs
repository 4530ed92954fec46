//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

use ad5m_blocks::Options;

/// Reorder a sliced gcode file so the Flashforge Adventurer 5M shows its
/// preview, print time and filament usage
///
/// The file is rewritten in place. Add this binary as a post-processing
/// script in the slicer; the slicer passes the output path as the argument.
#[derive(Parser, Debug)]
#[command(name = "ad5m-post")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Sliced gcode file to rewrite
    pub gcode_file: PathBuf,

    /// Do not insert spaghetti detector commands around the filament gcode
    #[arg(long, env = "AD5M_NO_SPAGHETTI_DETECTOR")]
    pub no_spaghetti_detector: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Transformation settings selected on the command line.
    pub fn options(&self) -> Options {
        Options {
            spaghetti_detector: !self.no_spaghetti_detector,
        }
    }
}

//! Literal marker lines and substrings written by the slicer.

/// Blank line used to pad the Header and Config blocks on both sides.
pub const SEPARATOR: &str = "\n";

/// Comment the slicer writes at the start of the filament start gcode.
pub const FILAMENT_START_MARKER: &str = "; filament start gcode";

/// Comment the slicer writes at the start of the filament end gcode.
pub const FILAMENT_END_MARKER: &str = "; filament end gcode";

/// Firmware command that arms the spaghetti detector.
pub const SPAGHETTI_DETECTOR_ENABLE: &str = "M981 S1 P20000 ; Enable spaghetti detector\n";

/// Firmware command that disarms the spaghetti detector.
pub const SPAGHETTI_DETECTOR_DISABLE: &str = "M981 S0 P20000 ; Disable spaghetti detector\n";

/// Print statistics the printer screen reads from just above the config block.
pub const PRE_CONFIG_FIELDS: [&str; 8] = [
    "; filament used [mm]",
    "; filament used [cm3]",
    "; filament used [g]",
    "; filament cost",
    "; total filament used [g]",
    "; total filament cost",
    "; total layers count",
    "; estimated printing time (normal mode)",
];

/// A marker-delimited metadata block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Embedded preview images (`; THUMBNAIL_BLOCK_START`)
    Thumbnail,
    /// Slicer header (`; HEADER_BLOCK_START`)
    Header,
    /// Full slicer settings dump (`; CONFIG_BLOCK_START`)
    Config,
}

impl BlockKind {
    /// The line that opens this block.
    pub fn start_marker(&self) -> &'static str {
        match self {
            Self::Thumbnail => "; THUMBNAIL_BLOCK_START",
            Self::Header => "; HEADER_BLOCK_START",
            Self::Config => "; CONFIG_BLOCK_START",
        }
    }

    /// The line that closes this block.
    pub fn end_marker(&self) -> &'static str {
        match self {
            Self::Thumbnail => "; THUMBNAIL_BLOCK_END",
            Self::Header => "; HEADER_BLOCK_END",
            Self::Config => "; CONFIG_BLOCK_END",
        }
    }

    /// Whether the block is wrapped in [`SEPARATOR`] lines when collected.
    pub fn is_padded(&self) -> bool {
        !matches!(self, Self::Thumbnail)
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Thumbnail => "thumbnail",
            Self::Header => "header",
            Self::Config => "config",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether `line`, ignoring surrounding whitespace, is exactly `marker`.
pub fn is_marker(line: &str, marker: &str) -> bool {
    line.trim() == marker
}

/// Whether `line` carries one of the [`PRE_CONFIG_FIELDS`].
pub fn is_pre_config_field(line: &str) -> bool {
    let trimmed = line.trim();
    PRE_CONFIG_FIELDS
        .iter()
        .any(|field| trimmed.contains(field))
}

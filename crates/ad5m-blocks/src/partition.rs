//! Splitting a gcode file into its five regions.

use crate::classify::{Classifier, Placement};
use crate::markers::{BlockKind, SEPARATOR};

/// A named group of lines in the reordered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Thumbnail,
    Header,
    Config,
    PreConfigFields,
    MainBody,
}

impl From<BlockKind> for Region {
    fn from(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Thumbnail => Self::Thumbnail,
            BlockKind::Header => Self::Header,
            BlockKind::Config => Self::Config,
        }
    }
}

/// The lines of a file sorted into regions, each in input order.
///
/// Header and Config keep their markers and gain a [`SEPARATOR`] before the
/// start marker and after the end marker. Thumbnail keeps its markers as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    thumbnail: Vec<&'a str>,
    header: Vec<&'a str>,
    config: Vec<&'a str>,
    pre_config: Vec<&'a str>,
    main_body: Vec<&'a str>,
    separators: usize,
}

impl<'a> Partition<'a> {
    /// Sort `lines` into regions in a single forward pass.
    pub fn from_lines(lines: &[&'a str]) -> Self {
        let mut partition = Self::default();
        let mut classifier = Classifier::new();

        for &line in lines {
            let placement = classifier.classify(line);
            partition.push(placement, line);
        }

        tracing::debug!(
            thumbnail = partition.thumbnail.len(),
            header = partition.header.len(),
            pre_config = partition.pre_config.len(),
            config = partition.config.len(),
            main_body = partition.main_body.len(),
            "Partitioned gcode lines"
        );

        partition
    }

    fn push(&mut self, placement: Placement, line: &'a str) {
        match placement {
            Placement::OpenBlock(kind) => {
                if kind.is_padded() {
                    self.buffer_mut(kind.into()).push(SEPARATOR);
                    self.separators += 1;
                }
                self.buffer_mut(kind.into()).push(line);
            }
            Placement::CloseBlock(kind) => {
                self.buffer_mut(kind.into()).push(line);
                if kind.is_padded() {
                    self.buffer_mut(kind.into()).push(SEPARATOR);
                    self.separators += 1;
                }
            }
            Placement::Inside(kind) => self.buffer_mut(kind.into()).push(line),
            Placement::PreConfigField => self.pre_config.push(line),
            Placement::MainBody => self.main_body.push(line),
        }
    }

    fn buffer_mut(&mut self, region: Region) -> &mut Vec<&'a str> {
        match region {
            Region::Thumbnail => &mut self.thumbnail,
            Region::Header => &mut self.header,
            Region::Config => &mut self.config,
            Region::PreConfigFields => &mut self.pre_config,
            Region::MainBody => &mut self.main_body,
        }
    }

    /// Lines collected for `region`, separators included.
    pub fn region(&self, region: Region) -> &[&'a str] {
        match region {
            Region::Thumbnail => &self.thumbnail,
            Region::Header => &self.header,
            Region::Config => &self.config,
            Region::PreConfigFields => &self.pre_config,
            Region::MainBody => &self.main_body,
        }
    }

    /// Whether any thumbnail line was seen.
    pub fn has_thumbnail(&self) -> bool {
        !self.thumbnail.is_empty()
    }

    /// Number of padding lines added around Header and Config markers.
    pub fn separator_count(&self) -> usize {
        self.separators
    }

    /// Number of input lines captured, excluding added separators.
    pub fn captured_lines(&self) -> usize {
        self.thumbnail.len()
            + self.header.len()
            + self.config.len()
            + self.pre_config.len()
            + self.main_body.len()
            - self.separators
    }
}

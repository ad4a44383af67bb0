//! Recovers `<path>@<hex-offset>` references to one binary from a log.

mod binary_filter;
mod offset_match;
mod pattern;
mod sink;

use crate::error::{Error, Result};
use binary_filter::BinaryFilter;
use grep::{
    matcher::LineTerminator,
    searcher::{BinaryDetection, Searcher, SearcherBuilder},
};
use pattern::OffsetPattern;
use sink::OffsetsSink;
use std::path::Path;
use tracing::debug;

/// Leading filtered matches that never reach the output.
pub const SKIPPED_MATCHES: usize = 2;

pub struct OffsetExtractor {
    pattern: OffsetPattern,
    searcher: Searcher,
}

impl OffsetExtractor {
    pub fn new() -> Result<Self> {
        let searcher = SearcherBuilder::new()
            .binary_detection(BinaryDetection::none())
            .line_terminator(LineTerminator::byte(b'\n'))
            .line_number(true)
            .multi_line(false)
            .build();

        Ok(Self {
            pattern: OffsetPattern::new()?,
            searcher,
        })
    }

    /// Returns the offsets of every line referencing `binary_path`, in log
    /// order, without the first [`SKIPPED_MATCHES`] of them.
    pub fn extract(&mut self, log_path: &Path, binary_path: &Path) -> Result<Vec<String>> {
        let filter = BinaryFilter::new(binary_path);
        debug!(log = %log_path.display(), binary = filter.file_name(), "extracting offsets");

        let mut offsets = Vec::new();
        let sink = OffsetsSink::new(&self.pattern, &filter, &mut offsets);
        self.searcher
            .search_path(self.pattern.matcher(), log_path, sink)
            .map_err(|source| Error::Log {
                path: log_path.into(),
                source,
            })?;

        debug!(matches = offsets.len(), "filtered matches");
        offsets.drain(..SKIPPED_MATCHES.min(offsets.len()));

        Ok(offsets)
    }
}

pub fn extract(log_path: &Path, binary_path: &Path) -> Result<Vec<String>> {
    OffsetExtractor::new()?.extract(log_path, binary_path)
}

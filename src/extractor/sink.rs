use grep::searcher::{Searcher, Sink, SinkMatch};
use tracing::trace;

use super::{binary_filter::BinaryFilter, pattern::OffsetPattern};

pub(crate) struct OffsetsSink<'a> {
    pattern: &'a OffsetPattern,
    filter: &'a BinaryFilter,
    offsets: &'a mut Vec<String>,
}

impl<'a> OffsetsSink<'a> {
    pub(crate) fn new(
        pattern: &'a OffsetPattern,
        filter: &'a BinaryFilter,
        offsets: &'a mut Vec<String>,
    ) -> Self {
        Self {
            pattern,
            filter,
            offsets,
        }
    }
}

impl Sink for OffsetsSink<'_> {
    type Error = std::io::Error;

    fn matched(&mut self, _: &Searcher, sink_match: &SinkMatch) -> Result<bool, std::io::Error> {
        let line_number = sink_match.line_number();

        let Some(m) = self.pattern.captures(sink_match.bytes())? else {
            return Ok(true);
        };

        if self.filter.accepts(&m.path) {
            trace!(?line_number, path = %m.path, offset = %m.offset, "offset kept");
            self.offsets.push(m.offset);
        } else {
            trace!(?line_number, path = %m.path, "path does not mention binary");
        }

        Ok(true)
    }
}

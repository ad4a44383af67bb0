use super::offset_match::OffsetMatch;
use grep::{
    matcher::{Captures, Matcher},
    regex::{RegexMatcher, RegexMatcherBuilder},
};
use std::io;

/// Path, then the last `@` that is followed by a lowercase hex run.
/// The path group is greedy, so `a@1f@2b` splits at the second `@`.
const OFFSET_PATTERN: &str = r"^(.+)@([0-9a-f]+)";

const PATH_GROUP: usize = 1;
const OFFSET_GROUP: usize = 2;

pub struct OffsetPattern {
    matcher: RegexMatcher,
}

impl OffsetPattern {
    pub fn new() -> Result<Self, grep::regex::Error> {
        // multi_line makes `^` anchor at every line start, the searcher
        // may hand the matcher a buffer holding many lines
        let matcher = RegexMatcherBuilder::new()
            .line_terminator(Some(b'\n'))
            .multi_line(true)
            .build(OFFSET_PATTERN)?;

        Ok(Self { matcher })
    }

    pub fn matcher(&self) -> &RegexMatcher {
        &self.matcher
    }

    pub fn captures(&self, line: &[u8]) -> io::Result<Option<OffsetMatch>> {
        let mut caps = self.matcher.new_captures().map_err(io::Error::other)?;
        if !self
            .matcher
            .captures(line, &mut caps)
            .map_err(io::Error::other)?
        {
            return Ok(None);
        }

        let (Some(path), Some(offset)) = (caps.get(PATH_GROUP), caps.get(OFFSET_GROUP)) else {
            return Ok(None);
        };

        Ok(Some(OffsetMatch::new(
            String::from_utf8_lossy(&line[path.start()..path.end()]).into_owned(),
            String::from_utf8_lossy(&line[offset.start()..offset.end()]).into_owned(),
        )))
    }
}

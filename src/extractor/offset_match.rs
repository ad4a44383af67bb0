#[derive(Debug, PartialEq, Eq)]
pub struct OffsetMatch {
    pub path: String,
    pub offset: String,
}

impl OffsetMatch {
    pub fn new(path: String, offset: String) -> Self {
        Self { path, offset }
    }
}

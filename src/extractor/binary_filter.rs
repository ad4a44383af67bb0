use std::path::Path;

/// Keeps matches whose path mentions the target binary's file name.
pub struct BinaryFilter {
    file_name: String,
}

impl BinaryFilter {
    pub fn new(binary_path: &Path) -> Self {
        Self {
            file_name: extract_file_name(&binary_path.to_string_lossy()),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn accepts(&self, path: &str) -> bool {
        path.contains(self.file_name.as_str())
    }
}

// Text after the last '/', a trailing slash leaves an empty name.
fn extract_file_name(input: &str) -> String {
    let mut split = input.rsplit('/');
    split.next().unwrap_or_default().into()
}

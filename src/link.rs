//! Link target extraction.
//!
//! This is a line heuristic, not a markdown parser: only the first open
//! marker and the first close marker on a line are looked at, and code
//! blocks, comments and escapes are not recognised.

/// The marker pair and file extension that identify a page link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMarkers {
    pub open: char,
    pub close: char,
    pub extension: String,
}

impl Default for LinkMarkers {
    fn default() -> Self {
        Self {
            open: '(',
            close: ')',
            extension: ".md".to_string(),
        }
    }
}

impl LinkMarkers {
    /// Return the bare file name linked from `line`, if any.
    ///
    /// The candidate is the text strictly between the first `open` and the
    /// first `close`; it is accepted only when `close` comes after `open` and
    /// the candidate ends with the extension.
    pub fn extract_link_target<'a>(&self, line: &'a str) -> Option<&'a str> {
        let start = line.find(self.open)?;
        let end = line.find(self.close)?;
        if end <= start {
            return None;
        }
        let target = &line[start + self.open.len_utf8()..end];
        if !target.ends_with(self.extension.as_str()) {
            return None;
        }
        Some(bare_name(target))
    }

    /// Whether a file name carries the markdown extension.
    pub fn is_markdown(&self, name: &str) -> bool {
        name.ends_with(self.extension.as_str())
    }
}

/// Strip everything up to and including the last `/`.
pub fn bare_name(target: &str) -> &str {
    match target.rfind('/') {
        Some(i) => &target[i + 1..],
        None => target,
    }
}

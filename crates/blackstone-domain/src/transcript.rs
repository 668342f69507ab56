//! Transcript module - the cleaned text rendition of a source document
//!
//! A transcript is the concatenation of per-page text, each page preceded by
//! a boundary marker, with whitespace-only lines removed. It is the single
//! coupling point between the extraction and analysis stages.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Format the boundary marker emitted before each page's text.
///
/// # Examples
///
/// ```
/// use blackstone_domain::transcript::page_marker;
///
/// assert_eq!(page_marker(3), "--- PAGE 3 ---");
/// ```
pub fn page_marker(page: usize) -> String {
    format!("--- PAGE {} ---", page)
}

/// Check whether a line is a page-boundary marker.
pub fn is_page_marker(line: &str) -> bool {
    line.strip_prefix("--- PAGE ")
        .and_then(|rest| rest.strip_suffix(" ---"))
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

/// Remove lines consisting solely of whitespace, preserving the relative
/// order of all remaining lines.
///
/// Idempotent: applying it to already-cleaned text is a no-op.
pub fn strip_blank_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cleaned plain-text representation of a source document's page contents.
///
/// Construction always applies the blank-line filter, so a `Transcript`
/// never contains a whitespace-only line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    /// Create a transcript from raw text, applying the blank-line filter.
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            text: strip_blank_lines(&raw.into()),
        }
    }

    /// Assemble a transcript from per-page text in document order.
    ///
    /// Every page gets a marker, numbered from 1; a page with no text still
    /// gets its marker with nothing after it.
    pub fn from_pages<S: AsRef<str>>(pages: &[S]) -> Self {
        let mut text = String::new();
        for (idx, page) in pages.iter().enumerate() {
            text.push('\n');
            text.push_str(&page_marker(idx + 1));
            text.push('\n');
            text.push_str(page.as_ref());
        }
        Self::new(text)
    }

    /// The cleaned transcript text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True when the transcript holds no text at all, markers included.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of page-boundary markers in the transcript.
    pub fn page_count(&self) -> usize {
        self.text.lines().filter(|l| is_page_marker(l)).count()
    }

    /// True when at least one line besides the page markers survived
    /// extraction. A scanned-image document can legitimately report false.
    pub fn has_content(&self) -> bool {
        self.text.lines().any(|l| !is_page_marker(l))
    }

    /// Write the transcript to `path` as UTF-8.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, &self.text)
    }

    /// Read a previously saved transcript from `path`.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::new(fs::read_to_string(path)?))
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_round_trip() {
        assert!(is_page_marker(&page_marker(1)));
        assert!(is_page_marker(&page_marker(120)));
    }

    #[test]
    fn test_marker_rejects_lookalikes() {
        assert!(!is_page_marker("--- PAGE ---"));
        assert!(!is_page_marker("--- PAGE one ---"));
        assert!(!is_page_marker("PAGE 1"));
        assert!(!is_page_marker("some text --- PAGE 1 ---"));
    }

    #[test]
    fn test_from_pages_emits_one_marker_per_page() {
        let pages = vec!["first page", "second page", "third page"];
        let transcript = Transcript::from_pages(&pages);
        assert_eq!(transcript.page_count(), 3);
    }

    #[test]
    fn test_markers_ascend_from_one() {
        let pages = vec!["a", "b", "c", "d"];
        let transcript = Transcript::from_pages(&pages);

        let markers: Vec<&str> = transcript
            .as_str()
            .lines()
            .filter(|l| is_page_marker(l))
            .collect();
        assert_eq!(
            markers,
            vec![
                "--- PAGE 1 ---",
                "--- PAGE 2 ---",
                "--- PAGE 3 ---",
                "--- PAGE 4 ---"
            ]
        );
    }

    #[test]
    fn test_empty_page_keeps_its_marker() {
        let pages = vec!["some text", "", "more text"];
        let transcript = Transcript::from_pages(&pages);
        assert_eq!(transcript.page_count(), 3);

        let lines: Vec<&str> = transcript.as_str().lines().collect();
        assert_eq!(lines[2], "--- PAGE 2 ---");
        assert_eq!(lines[3], "--- PAGE 3 ---");
    }

    #[test]
    fn test_no_whitespace_only_lines_survive() {
        let raw = "first\n   \n\t\nsecond\n\nthird";
        let transcript = Transcript::new(raw);
        assert!(transcript.as_str().lines().all(|l| !l.trim().is_empty()));
        assert_eq!(transcript.as_str(), "first\nsecond\nthird");
    }

    #[test]
    fn test_blank_line_filter_is_idempotent() {
        let raw = "a\n  \nb\n\nc";
        let once = strip_blank_lines(raw);
        let twice = strip_blank_lines(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_markers_only_transcript_has_no_content() {
        let pages = vec!["", "", ""];
        let transcript = Transcript::from_pages(&pages);
        assert_eq!(transcript.page_count(), 3);
        assert!(!transcript.has_content());
        assert!(!transcript.is_empty());
    }

    #[test]
    fn test_zero_pages_is_empty() {
        let transcript = Transcript::from_pages::<&str>(&[]);
        assert!(transcript.is_empty());
        assert_eq!(transcript.page_count(), 0);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.txt");

        let original = Transcript::from_pages(&["page one text", "page two text"]);
        original.save(&path).unwrap();

        let loaded = Transcript::load(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = Transcript::load("/no/such/transcript.txt");
        assert!(result.is_err());
    }
}

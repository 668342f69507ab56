//! Per-page text extraction backed by lopdf

use crate::error::PdfError;
use blackstone_domain::Transcript;
use lopdf::Document;
use std::path::Path;
use tracing::{debug, warn};

/// Extract a cleaned transcript from the PDF at `path`.
///
/// Pages contribute text in document order, each preceded by its boundary
/// marker. A page whose text extraction fails is treated as empty (the
/// marker is still emitted); only a document that cannot be loaded at all
/// is an error. A zero-page or image-only document therefore yields a
/// transcript of markers, which callers can detect via
/// [`Transcript::has_content`].
pub fn extract_transcript(path: impl AsRef<Path>) -> Result<Transcript, PdfError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PdfError::NotFound(path.to_path_buf()));
    }

    let doc = Document::load(path).map_err(|e| PdfError::Parse(e.to_string()))?;

    // BTreeMap keys, so iteration is already in ascending page order.
    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    debug!(
        "Loaded {} ({} pages)",
        path.display(),
        page_numbers.len()
    );

    let mut pages = Vec::with_capacity(page_numbers.len());
    for page_num in page_numbers {
        match doc.extract_text(&[page_num]) {
            Ok(text) => pages.push(text),
            Err(e) => {
                warn!("No text extracted from page {}: {}", page_num, e);
                pages.push(String::new());
            }
        }
    }

    Ok(Transcript::from_pages(&pages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackstone_domain::transcript::is_page_marker;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document as PdfDocument, Object, Stream};
    use std::fs;

    /// Build a minimal PDF with one page per entry; `None` produces a page
    /// with no content stream.
    fn build_pdf(page_texts: &[Option<&str>]) -> Vec<u8> {
        let mut doc = PdfDocument::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for text in page_texts {
            let mut page_dict = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            };
            if let Some(text) = text {
                let content = Content {
                    operations: vec![
                        Operation::new("BT", vec![]),
                        Operation::new("Tf", vec!["F1".into(), 12.into()]),
                        Operation::new("Td", vec![50.into(), 700.into()]),
                        Operation::new("Tj", vec![Object::string_literal(*text)]),
                        Operation::new("ET", vec![]),
                    ],
                };
                let content_id =
                    doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
                page_dict.set("Contents", content_id);
            }
            let page_id = doc.add_object(page_dict);
            kids.push(Object::Reference(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        });
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    fn write_pdf(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_one_marker_per_page_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = build_pdf(&[
            Some("Section 1. Short title."),
            Some("Section 2. Definitions."),
            Some("Section 3. Eligibility."),
        ]);
        let path = write_pdf(&dir, "act.pdf", &pdf);

        let transcript = extract_transcript(&path).unwrap();
        assert_eq!(transcript.page_count(), 3);

        let markers: Vec<&str> = transcript
            .as_str()
            .lines()
            .filter(|l| is_page_marker(l))
            .collect();
        assert_eq!(
            markers,
            vec!["--- PAGE 1 ---", "--- PAGE 2 ---", "--- PAGE 3 ---"]
        );
    }

    #[test]
    fn test_page_text_follows_its_marker() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = build_pdf(&[Some("First page body"), Some("Second page body")]);
        let path = write_pdf(&dir, "two.pdf", &pdf);

        let transcript = extract_transcript(&path).unwrap();
        let text = transcript.as_str();
        assert!(text.contains("First page body"));
        assert!(text.contains("Second page body"));

        let first_marker = text.find("--- PAGE 1 ---").unwrap();
        let first_body = text.find("First page body").unwrap();
        let second_marker = text.find("--- PAGE 2 ---").unwrap();
        let second_body = text.find("Second page body").unwrap();
        assert!(first_marker < first_body);
        assert!(first_body < second_marker);
        assert!(second_marker < second_body);
    }

    #[test]
    fn test_content_free_page_keeps_marker() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = build_pdf(&[Some("Some text"), None]);
        let path = write_pdf(&dir, "mixed.pdf", &pdf);

        let transcript = extract_transcript(&path).unwrap();
        assert_eq!(transcript.page_count(), 2);
        assert!(transcript.as_str().contains("--- PAGE 2 ---"));
    }

    #[test]
    fn test_all_empty_pages_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = build_pdf(&[None, None]);
        let path = write_pdf(&dir, "empty.pdf", &pdf);

        let transcript = extract_transcript(&path).unwrap();
        assert_eq!(transcript.page_count(), 2);
        assert!(!transcript.has_content());
    }

    #[test]
    fn test_no_blank_lines_in_transcript() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = build_pdf(&[Some("line one"), Some("line two")]);
        let path = write_pdf(&dir, "clean.pdf", &pdf);

        let transcript = extract_transcript(&path).unwrap();
        assert!(transcript
            .as_str()
            .lines()
            .all(|line| !line.trim().is_empty()));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = extract_transcript("/no/such/file.pdf");
        match result {
            Err(PdfError::NotFound(path)) => {
                assert_eq!(path, std::path::PathBuf::from("/no/such/file.pdf"));
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_display_names_the_path() {
        let err = extract_transcript("/no/such/file.pdf").unwrap_err();
        assert!(err.to_string().contains("/no/such/file.pdf"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_garbage_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(&dir, "garbage.pdf", b"this is not a pdf at all");

        let result = extract_transcript(&path);
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }
}

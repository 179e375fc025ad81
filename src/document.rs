//! Document input and file output
//!
//! The summarizer accepts plain text and PDF files. PDF text is extracted
//! page by page with [`lopdf`], each page followed by a blank line.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Result, ToolError};

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read the text of a `.txt` or `.pdf` file.
///
/// Other extensions are refused before the file is opened. A document
/// without any text is an error.
pub fn load_document(path: &Path) -> Result<String> {
    let name = display_name(path);
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let text = match extension.as_str() {
        "txt" => {
            let bytes = fs::read(path)?;
            String::from_utf8(bytes).map_err(|_| ToolError::Document(format!("{} is not valid UTF-8", name)))?
        }
        "pdf" => extract_pdf_text(&fs::read(path)?)?,
        _ => return Err(ToolError::UnsupportedFile(name)),
    };

    if text.trim().is_empty() {
        return Err(ToolError::Document(format!("no text found in {}", name)));
    }
    info!("Loaded {} chars from {}", text.chars().count(), name);
    Ok(text)
}

/// Extract the text of every page in order
pub fn extract_pdf_text(data: &[u8]) -> Result<String> {
    let doc = lopdf::Document::load_mem(data).map_err(|e| ToolError::Document(e.to_string()))?;
    if doc.is_encrypted() {
        return Err(ToolError::Document("PDF is encrypted".into()));
    }

    let mut text = String::new();
    for page_number in doc.get_pages().keys() {
        let page_text = doc
            .extract_text(&[*page_number])
            .map_err(|e| ToolError::Document(format!("page {}: {}", page_number, e)))?;
        text.push_str(page_text.trim_end());
        text.push_str("\n\n");
    }
    Ok(text)
}

/// Write a result (minified script, QR image, ...) to disk
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes)?;
    info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    fn write_pdf(path: &Path, pages: &[&str]) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for line in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*line)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    #[test]
    fn test_load_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.TXT");
        fs::write(&path, "plain notes").unwrap();
        assert_eq!(load_document(&path).unwrap(), "plain notes");
    }

    #[test]
    fn test_load_pdf_pages() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        write_pdf(&path, &["First page", "Second page"]);

        let text = load_document(&path).unwrap();
        let first = text.find("First page").unwrap();
        let second = text.find("Second page").unwrap();
        assert!(first < second);
        assert!(text[first..second].contains("\n\n"));
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn test_unsupported_extension_is_refused_before_reading() {
        // the file does not exist, so any read attempt would be an I/O error
        let err = load_document(Path::new("/nonexistent/slides.docx")).unwrap_err();
        assert!(matches!(err, ToolError::UnsupportedFile(name) if name == "slides.docx"));
    }

    #[test]
    fn test_blank_document_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "  \n\t").unwrap();
        assert!(matches!(load_document(&path), Err(ToolError::Document(_))));
    }

    #[test]
    fn test_corrupt_pdf_is_document_error() {
        assert!(matches!(extract_pdf_text(b"not a pdf"), Err(ToolError::Document(_))));
    }

    #[test]
    fn test_write_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.js");
        write_output(&path, b"let a=1;").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"let a=1;");
    }
}

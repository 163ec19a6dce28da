use crate::error::ExtractError;
use crate::models::DocumentFormat;
use crate::traits::TextExtractor;
use lopdf::Document;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Clone, Copy, Default)]
pub struct FileTextExtractor;

impl TextExtractor for FileTextExtractor {
    fn extract(&self, path: &Path, format: DocumentFormat) -> Result<String, ExtractError> {
        match format {
            DocumentFormat::Pdf => extract_pdf_text(path),
            DocumentFormat::Docx => extract_docx_text(path),
            DocumentFormat::PlainText => extract_plain_text(path),
        }
    }
}

/// Reads `path` using the reader selected by `declared_extension`.
pub fn extract_text(path: &Path, declared_extension: &str) -> Result<String, ExtractError> {
    FileTextExtractor.extract(path, DocumentFormat::from_extension(declared_extension))
}

/// Concatenates page text in page order. Image-only pages yield nothing.
pub fn extract_pdf_text(path: &Path) -> Result<String, ExtractError> {
    let document = Document::load(path).map_err(|error| ExtractError::PdfParse(error.to_string()))?;

    let mut text = String::new();
    for page_no in document.get_pages().into_keys() {
        let page_text = document
            .extract_text(&[page_no])
            .map_err(|error| ExtractError::PdfParse(error.to_string()))?;
        text.push_str(&page_text);
    }

    Ok(text)
}

pub fn extract_docx_text(path: &Path) -> Result<String, ExtractError> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file))?;
    let mut xml = String::new();
    archive.by_name(DOCX_BODY_PART)?.read_to_string(&mut xml)?;

    docx_paragraphs(&xml).map(|paragraphs| paragraphs.join("\n"))
}

/// Lossy UTF-8 decode; invalid sequences are dropped.
pub fn extract_plain_text(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).replace(char::REPLACEMENT_CHARACTER, ""))
}

/// Paragraph texts in document order. A paragraph nested inside another one
/// (text boxes) is emitted on its own and the enclosing paragraph keeps the
/// text on both sides of it.
fn docx_paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(ref element) => match element.local_name().as_ref() {
                b"p" => open.push(String::new()),
                b"t" => in_text = true,
                b"tab" => push_text(&mut open, "\t"),
                b"br" | b"cr" => push_text(&mut open, "\n"),
                _ => {}
            },
            Event::Empty(ref element) => match element.local_name().as_ref() {
                b"p" => paragraphs.push(String::new()),
                b"tab" => push_text(&mut open, "\t"),
                b"br" | b"cr" => push_text(&mut open, "\n"),
                _ => {}
            },
            Event::End(ref element) => match element.local_name().as_ref() {
                b"p" => {
                    if let Some(paragraph) = open.pop() {
                        paragraphs.push(paragraph);
                    }
                }
                b"t" => in_text = false,
                _ => {}
            },
            Event::Text(ref text) if in_text => push_text(&mut open, &text.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_text(open: &mut [String], text: &str) {
    if let Some(paragraph) = open.last_mut() {
        paragraph.push_str(text);
    }
}

use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    /// Maps a declared extension such as `.pdf` to its reader; anything unknown is plain text.
    pub fn from_extension(extension: &str) -> Self {
        let trimmed = extension.trim().trim_start_matches('.');
        if trimmed.eq_ignore_ascii_case("pdf") {
            Self::Pdf
        } else if trimmed.eq_ignore_ascii_case("docx") {
            Self::Docx
        } else {
            Self::PlainText
        }
    }
}

/// A span reported by an [`EntityRecognizer`](crate::EntityRecognizer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedEntity {
    pub text: String,
    pub label: String,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMatch {
    pub text: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct FileMatch {
    pub path: PathBuf,
    pub keyword_counts: BTreeMap<String, usize>,
    pub entities: Vec<EntityMatch>,
}

impl FileMatch {
    pub fn is_empty(&self) -> bool {
        self.keyword_counts.is_empty() && self.entities.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct SearchReport {
    pub matches: Vec<FileMatch>,
    pub skipped_files: Vec<SkippedFile>,
    pub files_scanned: usize,
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("pdf parse error: {0}")]
    PdfParse(String),

    #[error("docx package error: {0}")]
    Docx(#[from] zip::result::ZipError),

    #[error("docx xml error: {0}")]
    Xml(#[from] quick_xml::Error),
}

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("wordnet dictionary: {0:#}")]
    Dictionary(anyhow::Error),

    #[error("invalid thesaurus json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error reading keyword file {path}: {source}")]
    KeywordFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
}

#[derive(Debug, Error)]
pub enum ToolkitError {
    #[error("failed to load wordnet from {dir}: {source}")]
    WordNet {
        dir: PathBuf,
        #[source]
        source: LexiconError,
    },

    #[error("failed to load thesaurus {path}: {source}")]
    Thesaurus {
        path: PathBuf,
        #[source]
        source: LexiconError,
    },
}

pub type Result<T, E = SearchError> = std::result::Result<T, E>;

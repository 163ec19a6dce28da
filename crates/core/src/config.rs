use crate::entities::word_set;
use crate::error::ConfigError;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordSource {
    Inline(Vec<String>),
    File(PathBuf),
}

impl Default for KeywordSource {
    fn default() -> Self {
        Self::Inline(Vec::new())
    }
}

/// Everything one search run needs, independent of how it was collected.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    pub directory: PathBuf,
    pub extension: String,
    pub keywords: KeywordSource,
    pub names: Vec<String>,
    pub expand_synonyms: bool,
}

impl SearchConfig {
    /// The extension is trimmed here so validation and matching see the same value.
    pub fn new(directory: impl Into<PathBuf>, extension: impl AsRef<str>) -> Self {
        Self {
            directory: directory.into(),
            extension: extension.as_ref().trim().to_string(),
            keywords: KeywordSource::default(),
            names: Vec::new(),
            expand_synonyms: true,
        }
    }

    pub fn with_keywords(mut self, keywords: KeywordSource) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = names;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.directory.as_os_str().is_empty() {
            return Err(ConfigError::InvalidArgument(
                "directory must not be empty".to_string(),
            ));
        }
        if self.extension.is_empty() {
            return Err(ConfigError::InvalidArgument(
                "file extension must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolves the keyword source. An unreadable keyword file is logged and
    /// yields no keywords so entity matching can still run.
    pub fn load_keywords(&self) -> BTreeSet<String> {
        match &self.keywords {
            KeywordSource::Inline(keywords) => keywords
                .iter()
                .map(|keyword| keyword.trim())
                .filter(|keyword| !keyword.is_empty())
                .map(str::to_string)
                .collect(),
            KeywordSource::File(path) => read_keywords(path).unwrap_or_else(|error| {
                warn!(path = %path.display(), %error, "continuing without keywords");
                BTreeSet::new()
            }),
        }
    }

    /// Names with at least one word character, trimmed.
    pub fn normalized_names(&self) -> Vec<String> {
        self.names
            .iter()
            .map(|name| name.trim())
            .filter(|name| !word_set(name).is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Splits on commas, trimming entries and dropping empty ones.
pub fn split_comma_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// One keyword per line; trailing whitespace is stripped and blank lines skipped.
pub fn read_keywords(path: &Path) -> Result<BTreeSet<String>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::KeywordFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(raw
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

use crate::error::LexiconError;
use crate::traits::ThesaurusLookup;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// Thesaurus that knows no words; synonym expansion becomes a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyThesaurus;

impl ThesaurusLookup for EmptyThesaurus {
    fn synonyms(&self, _word: &str) -> BTreeSet<String> {
        BTreeSet::new()
    }
}

/// A thesaurus entry: either a single synonym or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SynonymEntry {
    One(String),
    Many(Vec<String>),
}

impl SynonymEntry {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(synonym) => vec![synonym],
            Self::Many(synonyms) => synonyms,
        }
    }
}

/// User-maintained synonym table stored as `{"word": ["synonym", ...]}`.
/// A bare string stands for a one-element list.
///
/// Keys are matched case-insensitively; values are returned as written.
#[derive(Debug, Clone, Default)]
pub struct JsonThesaurus {
    entries: HashMap<String, BTreeSet<String>>,
}

impl JsonThesaurus {
    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        let raw = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, LexiconError> {
        let parsed: HashMap<String, SynonymEntry> = serde_json::from_str(raw)?;
        let mut entries: HashMap<String, BTreeSet<String>> = HashMap::new();

        for (word, synonyms) in parsed {
            entries
                .entry(word.trim().to_lowercase())
                .or_default()
                .extend(
                    synonyms
                        .into_vec()
                        .into_iter()
                        .map(|synonym| synonym.trim().to_string())
                        .filter(|synonym| !synonym.is_empty()),
                );
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ThesaurusLookup for JsonThesaurus {
    fn synonyms(&self, word: &str) -> BTreeSet<String> {
        self.entries
            .get(&word.trim().to_lowercase())
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn json_keys_are_case_insensitive() -> Result<(), Box<dyn std::error::Error>> {
        let thesaurus = JsonThesaurus::from_json_str(
            r#"{"Car": ["automobile", " auto ", ""], "car": ["motorcar"]}"#,
        )?;

        let synonyms = thesaurus.synonyms("CAR");
        assert_eq!(thesaurus.len(), 1);
        assert!(synonyms.contains("automobile"));
        assert!(synonyms.contains("auto"));
        assert!(synonyms.contains("motorcar"));
        assert!(!synonyms.contains(""));
        Ok(())
    }

    #[test]
    fn single_string_entries_are_accepted() -> Result<(), Box<dyn std::error::Error>> {
        let thesaurus =
            JsonThesaurus::from_json_str(r#"{"fast": "quick", "slow": ["sluggish", "leisurely"]}"#)?;

        assert_eq!(
            thesaurus.synonyms("fast"),
            BTreeSet::from(["quick".to_string()])
        );
        assert_eq!(thesaurus.synonyms("slow").len(), 2);
        assert!(matches!(
            JsonThesaurus::from_json_str(r#"{"fast": 3}"#),
            Err(LexiconError::Json(_))
        ));
        Ok(())
    }

    #[test]
    fn unknown_words_have_no_synonyms() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("thesaurus.json");
        fs::write(&path, r#"{"fast": ["quick"]}"#)?;

        let thesaurus = JsonThesaurus::from_path(&path)?;
        assert!(thesaurus.synonyms("slow").is_empty());
        assert!(EmptyThesaurus.synonyms("fast").is_empty());
        Ok(())
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            JsonThesaurus::from_json_str("[\"not\", \"a map\"]"),
            Err(LexiconError::Json(_))
        ));
    }
}

use crate::config::SearchConfig;
use crate::entities::extract_entities;
use crate::extractor::FileTextExtractor;
use crate::matcher::{compile_keywords, count_matches, KeywordPattern};
use crate::models::{DocumentFormat, FileMatch, SearchReport, SkippedFile};
use crate::preprocess::preprocess;
use crate::synonyms::expand_keywords;
use crate::traits::{EntityRecognizer, Lemmatizer, TextExtractor, ThesaurusLookup};
use crate::walker::discover_files;
use crate::{ExtractError, SearchError};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// Runs the extract → normalize → match → entity pipeline over a folder.
pub struct KeywordSearcher<L, T, R, X = FileTextExtractor> {
    lemmatizer: L,
    thesaurus: T,
    recognizer: R,
    extractor: X,
}

impl<L, T, R> KeywordSearcher<L, T, R, FileTextExtractor>
where
    L: Lemmatizer,
    T: ThesaurusLookup,
    R: EntityRecognizer,
{
    pub fn new(lemmatizer: L, thesaurus: T, recognizer: R) -> Self {
        Self {
            lemmatizer,
            thesaurus,
            recognizer,
            extractor: FileTextExtractor,
        }
    }
}

impl<L, T, R, X> KeywordSearcher<L, T, R, X>
where
    L: Lemmatizer,
    T: ThesaurusLookup,
    R: EntityRecognizer,
    X: TextExtractor,
{
    pub fn with_extractor<Y: TextExtractor>(self, extractor: Y) -> KeywordSearcher<L, T, R, Y> {
        KeywordSearcher {
            lemmatizer: self.lemmatizer,
            thesaurus: self.thesaurus,
            recognizer: self.recognizer,
            extractor,
        }
    }

    pub fn expand_keywords(&self, keywords: &BTreeSet<String>) -> BTreeSet<String> {
        let expanded = expand_keywords(keywords, &self.thesaurus);
        debug!(
            original = keywords.len(),
            expanded = expanded.len(),
            "expanded keywords with synonyms"
        );
        expanded
    }

    /// Resolves keywords and names from `config`, expands synonyms once, then walks.
    pub fn run(&self, config: &SearchConfig) -> Result<SearchReport, SearchError> {
        config
            .validate()
            .map_err(|error| SearchError::InvalidArgument(error.to_string()))?;

        let keywords = config.load_keywords();
        let keywords = if config.expand_synonyms {
            self.expand_keywords(&keywords)
        } else {
            keywords
        };

        self.search_directory(
            &config.directory,
            &config.extension,
            &keywords,
            &config.normalized_names(),
        )
    }

    /// Searches every qualifying file under `root`. `keywords` is used as
    /// given; expand it beforehand to include synonyms.
    pub fn search_directory(
        &self,
        root: &Path,
        extension: &str,
        keywords: &BTreeSet<String>,
        names: &[String],
    ) -> Result<SearchReport, SearchError> {
        let patterns = compile_keywords(keywords)?;
        let format = DocumentFormat::from_extension(extension);
        let mut report = SearchReport::default();

        for path in discover_files(root, extension)? {
            info!(path = %path.display(), "reading file");
            report.files_scanned += 1;

            let found = match self.search_file(&path, format, &patterns, names) {
                Ok(found) => found,
                Err(error) => {
                    warn!(path = %path.display(), %error, "text extraction failed; treating file as empty");
                    report.skipped_files.push(SkippedFile {
                        path: path.clone(),
                        reason: error.to_string(),
                    });
                    self.search_text(&path, "", &patterns, names)
                }
            };

            if !found.is_empty() {
                report.matches.push(found);
            }
        }

        Ok(report)
    }

    pub fn search_file(
        &self,
        path: &Path,
        format: DocumentFormat,
        patterns: &[KeywordPattern],
        names: &[String],
    ) -> Result<FileMatch, ExtractError> {
        let text = self.extractor.extract(path, format)?;
        Ok(self.search_text(path, &text, patterns, names))
    }

    /// Keyword counts come from normalized tokens; entities from the raw text.
    pub fn search_text(
        &self,
        path: &Path,
        text: &str,
        patterns: &[KeywordPattern],
        names: &[String],
    ) -> FileMatch {
        let tokens = preprocess(text, &self.lemmatizer);
        FileMatch {
            path: path.to_path_buf(),
            keyword_counts: count_matches(&tokens, patterns),
            entities: extract_entities(text, names, &self.recognizer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeywordSource;
    use crate::entities::PatternEntityRecognizer;
    use crate::lexicon::{EmptyThesaurus, JsonThesaurus, SuffixLemmatizer};
    use crate::models::RecognizedEntity;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    #[derive(Default)]
    struct FakeThesaurus {
        entries: HashMap<String, Vec<String>>,
    }

    impl ThesaurusLookup for FakeThesaurus {
        fn synonyms(&self, word: &str) -> BTreeSet<String> {
            self.entries
                .get(word)
                .map(|words| words.iter().cloned().collect())
                .unwrap_or_default()
        }
    }

    /// Reports every occurrence of a fixed span with a fixed label.
    struct FakeRecognizer {
        span: String,
        label: String,
    }

    impl EntityRecognizer for FakeRecognizer {
        fn recognize(&self, text: &str) -> Vec<RecognizedEntity> {
            text.match_indices(self.span.as_str())
                .map(|(start, found)| RecognizedEntity {
                    text: found.to_string(),
                    label: self.label.clone(),
                    start,
                    end: start + found.len(),
                })
                .collect()
        }
    }

    struct FailingExtractor;

    impl TextExtractor for FailingExtractor {
        fn extract(&self, path: &Path, _format: DocumentFormat) -> Result<String, ExtractError> {
            Err(ExtractError::PdfParse(format!("cannot parse {}", path.display())))
        }
    }

    fn keywords(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|word| word.to_string()).collect()
    }

    #[test]
    fn fox_sentence_counts_lemmatized_matches() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("fox.txt");
        fs::write(
            &path,
            "The Quick Brown Fox jumps over the lazy dog. Foxes are quick.",
        )?;

        let searcher = KeywordSearcher::new(SuffixLemmatizer, EmptyThesaurus, PatternEntityRecognizer);
        let expected = if SuffixLemmatizer.lemmatize("foxes") == "fox" { 2 } else { 1 };

        let report = searcher.search_directory(dir.path(), ".txt", &keywords(&["fox"]), &[])?;

        assert_eq!(report.files_scanned, 1);
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].path, path);
        assert_eq!(report.matches[0].keyword_counts.get("fox"), Some(&expected));
        assert!(report.matches[0].entities.is_empty());
        Ok(())
    }

    #[test]
    fn files_without_matches_are_dropped() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("hit.txt"), "a fox")?;
        fs::write(dir.path().join("miss.txt"), "a dog")?;

        let searcher = KeywordSearcher::new(SuffixLemmatizer, EmptyThesaurus, PatternEntityRecognizer);
        let report = searcher.search_directory(dir.path(), ".txt", &keywords(&["fox"]), &[])?;

        assert_eq!(report.files_scanned, 2);
        assert_eq!(report.matches.len(), 1);
        assert!(report.matches[0].path.ends_with("hit.txt"));
        Ok(())
    }

    #[test]
    fn synonym_expansion_only_adds_matches() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("cars.txt"), "The automobile passed two cars.")?;

        let thesaurus = FakeThesaurus {
            entries: HashMap::from([(
                "car".to_string(),
                vec!["automobile".to_string(), "motorcar".to_string()],
            )]),
        };
        let searcher = KeywordSearcher::new(SuffixLemmatizer, thesaurus, PatternEntityRecognizer);
        let original = keywords(&["car"]);

        let plain = searcher.search_directory(dir.path(), ".txt", &original, &[])?;
        let expanded = searcher.expand_keywords(&original);
        let widened = searcher.search_directory(dir.path(), ".txt", &expanded, &[])?;

        let plain_counts = &plain.matches[0].keyword_counts;
        let widened_counts = &widened.matches[0].keyword_counts;
        assert_eq!(plain_counts.get("car"), Some(&1));
        assert_eq!(widened_counts.get("car"), Some(&1));
        assert_eq!(widened_counts.get("automobile"), Some(&1));
        assert!(!widened_counts.contains_key("motorcar"));
        assert!(plain_counts
            .iter()
            .all(|(keyword, count)| widened_counts.get(keyword) >= Some(count)));
        Ok(())
    }

    #[test]
    fn entity_only_files_are_reported() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("memo.txt"), "Signed by Smith, John.")?;

        let recognizer = FakeRecognizer {
            span: "Smith, John".to_string(),
            label: "PERSON".to_string(),
        };
        let searcher = KeywordSearcher::new(SuffixLemmatizer, EmptyThesaurus, recognizer);
        let names = vec!["John Smith".to_string(), "John Q. Smith".to_string()];

        let report = searcher.search_directory(dir.path(), ".txt", &keywords(&["fox"]), &names)?;

        assert_eq!(report.matches.len(), 1);
        assert!(report.matches[0].keyword_counts.is_empty());
        assert_eq!(report.matches[0].entities.len(), 1);
        assert_eq!(report.matches[0].entities[0].text, "Smith, John");
        assert_eq!(report.matches[0].entities[0].label, "PERSON");
        Ok(())
    }

    #[test]
    fn extraction_failures_are_skipped_and_recorded() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("one.pdf"), b"%PDF-1.4\n%broken")?;
        fs::write(dir.path().join("two.pdf"), b"%PDF-1.4\n%broken")?;

        let searcher = KeywordSearcher::new(SuffixLemmatizer, EmptyThesaurus, PatternEntityRecognizer)
            .with_extractor(FailingExtractor);
        let report = searcher.search_directory(dir.path(), ".pdf", &keywords(&["fox"]), &[])?;

        assert_eq!(report.files_scanned, 2);
        assert!(report.matches.is_empty());
        assert_eq!(report.skipped_files.len(), 2);
        assert!(report.skipped_files[0].reason.contains("cannot parse"));
        Ok(())
    }

    #[test]
    fn run_resolves_config_and_expands_once() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("trip.txt"), "Our automobile broke down in Paris.")?;
        let keyword_file = dir.path().join("keywords.lst");
        fs::write(&keyword_file, "car\n")?;

        let thesaurus = JsonThesaurus::from_json_str(r#"{"car": ["automobile"]}"#)?;
        let searcher = KeywordSearcher::new(SuffixLemmatizer, thesaurus, PatternEntityRecognizer);
        let mut config = SearchConfig::new(dir.path(), ".txt")
            .with_keywords(KeywordSource::File(keyword_file))
            .with_names(vec!["paris".to_string(), " ".to_string()]);

        let report = searcher.run(&config)?;
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].keyword_counts.get("automobile"), Some(&1));
        assert_eq!(report.matches[0].entities[0].label, "GPE");

        config.expand_synonyms = false;
        config.names.clear();
        let report = searcher.run(&config)?;
        assert!(report.matches.is_empty());
        Ok(())
    }
}

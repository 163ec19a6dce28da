use crate::entities::PatternEntityRecognizer;
use crate::error::ToolkitError;
use crate::lexicon::{EmptyThesaurus, JsonThesaurus, SuffixLemmatizer, WordNet};
use crate::orchestrator::KeywordSearcher;
use crate::traits::{Lemmatizer, ThesaurusLookup};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct ToolkitOptions {
    /// WordNet `dict/` directory holding `index.*`, `data.*` and `*.exc`.
    pub wordnet_dir: Option<PathBuf>,
    /// JSON synonym table; takes precedence over WordNet for synonyms.
    pub thesaurus_path: Option<PathBuf>,
}

pub type DynKeywordSearcher =
    KeywordSearcher<Box<dyn Lemmatizer>, Box<dyn ThesaurusLookup>, PatternEntityRecognizer>;

/// Lexical resources for one run, loaded once before the walk starts.
pub struct NlpToolkit {
    pub lemmatizer: Box<dyn Lemmatizer>,
    pub thesaurus: Box<dyn ThesaurusLookup>,
    pub recognizer: PatternEntityRecognizer,
    pub lemmatizer_source: &'static str,
    pub thesaurus_source: &'static str,
}

impl NlpToolkit {
    pub fn load(options: &ToolkitOptions) -> Result<Self, ToolkitError> {
        let wordnet = match &options.wordnet_dir {
            Some(dir) => Some(Arc::new(WordNet::load(dir).map_err(|source| {
                ToolkitError::WordNet {
                    dir: dir.clone(),
                    source,
                }
            })?)),
            None => None,
        };

        let (lemmatizer, lemmatizer_source) = match &wordnet {
            Some(wordnet) => (Box::new(Arc::clone(wordnet)) as Box<dyn Lemmatizer>, "wordnet"),
            None => (Box::new(SuffixLemmatizer) as Box<dyn Lemmatizer>, "suffix-rules"),
        };

        let (thesaurus, thesaurus_source): (Box<dyn ThesaurusLookup>, &'static str) =
            match (&options.thesaurus_path, &wordnet) {
                (Some(path), _) => {
                    let thesaurus = JsonThesaurus::from_path(path).map_err(|source| {
                        ToolkitError::Thesaurus {
                            path: path.clone(),
                            source,
                        }
                    })?;
                    (Box::new(thesaurus) as Box<dyn ThesaurusLookup>, "json")
                }
                (None, Some(wordnet)) => (
                    Box::new(Arc::clone(wordnet)) as Box<dyn ThesaurusLookup>,
                    "wordnet",
                ),
                (None, None) => (Box::new(EmptyThesaurus) as Box<dyn ThesaurusLookup>, "none"),
            };

        info!(
            lemmatizer = lemmatizer_source,
            thesaurus = thesaurus_source,
            "nlp toolkit ready"
        );

        Ok(Self {
            lemmatizer,
            thesaurus,
            recognizer: PatternEntityRecognizer,
            lemmatizer_source,
            thesaurus_source,
        })
    }

    pub fn into_searcher(self) -> DynKeywordSearcher {
        KeywordSearcher::new(self.lemmatizer, self.thesaurus, self.recognizer)
    }
}

pub mod config;
pub mod entities;
pub mod error;
pub mod extractor;
pub mod lexicon;
pub mod matcher;
pub mod models;
pub mod orchestrator;
pub mod preprocess;
pub mod report;
pub mod synonyms;
pub mod toolkit;
pub mod traits;
pub mod walker;

pub use config::{read_keywords, split_comma_list, KeywordSource, SearchConfig};
pub use entities::{extract_entities, name_matches, PatternEntityRecognizer};
pub use error::{ConfigError, ExtractError, LexiconError, SearchError, ToolkitError};
pub use extractor::{extract_text, FileTextExtractor};
pub use lexicon::{EmptyThesaurus, JsonThesaurus, PartOfSpeech, SuffixLemmatizer, WordNet};
pub use matcher::{compile_keywords, count_keywords, KeywordPattern};
pub use models::{
    DocumentFormat, EntityMatch, FileMatch, RecognizedEntity, SearchReport, SkippedFile,
};
pub use orchestrator::KeywordSearcher;
pub use preprocess::{is_stop_word, preprocess, tokenize};
pub use report::{render_report, write_report, NO_RESULTS};
pub use synonyms::{expand_keywords, synonyms};
pub use toolkit::{DynKeywordSearcher, NlpToolkit, ToolkitOptions};
pub use traits::{EntityRecognizer, Lemmatizer, TextExtractor, ThesaurusLookup};
pub use walker::{discover_files, EXCLUDED_DIRS, TRANSIENT_FILE_PREFIX};

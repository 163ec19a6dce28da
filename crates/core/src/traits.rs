use crate::models::{DocumentFormat, RecognizedEntity};
use crate::ExtractError;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

/// Reduces a lowercase word to its dictionary base form.
pub trait Lemmatizer {
    fn lemmatize(&self, word: &str) -> String;
}

/// Synonym lookup against a lexical database.
pub trait ThesaurusLookup {
    /// All surface forms across every sense of `word`, or an empty set when unknown.
    fn synonyms(&self, word: &str) -> BTreeSet<String>;
}

pub trait EntityRecognizer {
    /// Entity spans in the order they appear in `text`.
    fn recognize(&self, text: &str) -> Vec<RecognizedEntity>;
}

pub trait TextExtractor {
    fn extract(&self, path: &Path, format: DocumentFormat) -> Result<String, ExtractError>;
}

impl<T: Lemmatizer + ?Sized> Lemmatizer for Box<T> {
    fn lemmatize(&self, word: &str) -> String {
        (**self).lemmatize(word)
    }
}

impl<T: ThesaurusLookup + ?Sized> ThesaurusLookup for Box<T> {
    fn synonyms(&self, word: &str) -> BTreeSet<String> {
        (**self).synonyms(word)
    }
}

impl<T: Lemmatizer + ?Sized> Lemmatizer for Arc<T> {
    fn lemmatize(&self, word: &str) -> String {
        (**self).lemmatize(word)
    }
}

impl<T: ThesaurusLookup + ?Sized> ThesaurusLookup for Arc<T> {
    fn synonyms(&self, word: &str) -> BTreeSet<String> {
        (**self).synonyms(word)
    }
}

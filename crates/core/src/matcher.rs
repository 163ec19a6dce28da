use crate::error::SearchError;
use regex::{Regex, RegexBuilder};
use std::collections::{BTreeMap, BTreeSet};

/// Whole-word, case-insensitive pattern for one keyword, compiled once per run.
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    keyword: String,
    regex: Regex,
}

impl KeywordPattern {
    pub fn new(keyword: &str) -> Result<Self, SearchError> {
        let regex = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(keyword)))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            keyword: keyword.to_string(),
            regex,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn count_in(&self, haystack: &str) -> usize {
        self.regex.find_iter(haystack).count()
    }
}

/// Compiles every non-empty keyword.
pub fn compile_keywords(keywords: &BTreeSet<String>) -> Result<Vec<KeywordPattern>, SearchError> {
    keywords
        .iter()
        .filter(|keyword| !keyword.trim().is_empty())
        .map(|keyword| KeywordPattern::new(keyword))
        .collect()
}

/// Counts keywords against the space-joined tokens; zero counts are left out.
pub fn count_matches(tokens: &[String], patterns: &[KeywordPattern]) -> BTreeMap<String, usize> {
    let joined = tokens.join(" ");
    patterns
        .iter()
        .filter_map(|pattern| {
            let count = pattern.count_in(&joined);
            (count > 0).then(|| (pattern.keyword.clone(), count))
        })
        .collect()
}

pub fn count_keywords(
    tokens: &[String],
    keywords: &BTreeSet<String>,
) -> Result<BTreeMap<String, usize>, SearchError> {
    Ok(count_matches(tokens, &compile_keywords(keywords)?))
}

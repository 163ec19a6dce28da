use crate::traits::Lemmatizer;

const IRREGULAR_NOUNS: [(&str, &str); 10] = [
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("men", "man"),
    ("mice", "mouse"),
    ("people", "person"),
    ("teeth", "tooth"),
    ("women", "woman"),
    ("series", "series"),
    ("species", "species"),
];

const KEEP_ENDINGS: [&str; 3] = ["ss", "us", "is"];

/// Dictionary-free noun lemmatizer for runs without a WordNet directory.
///
/// Applies the first matching plural rule; a word it produces never matches
/// another rule, so lemmatizing twice gives the same result.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixLemmatizer;

impl Lemmatizer for SuffixLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some((_, base)) = IRREGULAR_NOUNS.iter().find(|(plural, _)| *plural == word) {
            return (*base).to_string();
        }

        if word.chars().count() <= 3 {
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix("sses") {
            return format!("{stem}ss");
        }

        if word.len() > 4 {
            if let Some(stem) = word.strip_suffix("ies") {
                return format!("{stem}y");
            }
        }

        for ending in ["xes", "ches", "shes", "zzes"] {
            if word.ends_with(ending) {
                return word[..word.len() - 2].to_string();
            }
        }

        if KEEP_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
            return word.to_string();
        }

        match word.strip_suffix('s') {
            Some(stem) => stem.to_string(),
            None => word.to_string(),
        }
    }
}

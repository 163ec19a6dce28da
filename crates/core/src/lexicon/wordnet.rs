//! WordNet-backed lemmatizer and thesaurus.
//!
//! The dictionary itself is loaded by `wordnet-db`. This module adds the
//! `morphy` inflection rules on top of it, plus the `*.exc` irregular-form
//! lists that `wordnet-db` does not read.

use crate::error::LexiconError;
use crate::traits::{Lemmatizer, ThesaurusLookup};
use std::collections::{BTreeSet, HashMap};
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;
use wordnet_db::LoadMode;
use wordnet_types::{Pos, SynsetId};

pub use wordnet_types::Pos as PartOfSpeech;

const ALL_POS: [Pos; 4] = [Pos::Noun, Pos::Verb, Pos::Adj, Pos::Adv];

fn file_suffix(pos: Pos) -> &'static str {
    match pos {
        Pos::Noun => "noun",
        Pos::Verb => "verb",
        Pos::Adj => "adj",
        _ => "adv",
    }
}

fn substitutions(pos: Pos) -> &'static [(&'static str, &'static str)] {
    match pos {
        Pos::Noun => &[
            ("s", ""),
            ("ses", "s"),
            ("ves", "f"),
            ("xes", "x"),
            ("zes", "z"),
            ("ches", "ch"),
            ("shes", "sh"),
            ("men", "man"),
            ("ies", "y"),
        ],
        Pos::Verb => &[
            ("s", ""),
            ("ies", "y"),
            ("es", "e"),
            ("es", ""),
            ("ed", "e"),
            ("ed", ""),
            ("ing", "e"),
            ("ing", ""),
        ],
        Pos::Adj => &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")],
        _ => &[],
    }
}

pub struct WordNet {
    db: wordnet_db::WordNet,
    exceptions: HashMap<(Pos, String), Vec<String>>,
}

impl WordNet {
    pub fn load(dict_dir: &Path) -> Result<Self, LexiconError> {
        let db = wordnet_db::WordNet::load_with_mode(dict_dir, LoadMode::Owned)
            .map_err(LexiconError::Dictionary)?;

        let mut exceptions = HashMap::new();
        for pos in ALL_POS {
            let path = dict_dir.join(format!("{}.exc", file_suffix(pos)));
            let text = match std::fs::read_to_string(&path) {
                Ok(text) => text,
                Err(error) if error.kind() == ErrorKind::NotFound => continue,
                Err(source) => return Err(LexiconError::Io { path, source }),
            };
            for line in text.lines() {
                let mut words = line.split_whitespace();
                if let Some(inflected) = words.next() {
                    let bases = words.map(str::to_string).collect::<Vec<_>>();
                    if !bases.is_empty() {
                        exceptions.insert((pos, inflected.to_string()), bases);
                    }
                }
            }
        }

        debug!(
            synsets = db.synset_count(),
            lemmas = db.lemma_count(),
            exceptions = exceptions.len(),
            "loaded wordnet"
        );

        Ok(Self { db, exceptions })
    }

    pub fn contains(&self, pos: Pos, lemma: &str) -> bool {
        self.db.lemma_exists(pos, lemma)
    }

    /// Base forms of `form` known to the dictionary for `pos`, most direct first.
    pub fn morphy(&self, form: &str, pos: Pos) -> Vec<String> {
        let keep_known = |forms: &[String]| -> Vec<String> {
            let mut known: Vec<String> = Vec::new();
            for candidate in forms {
                if self.contains(pos, candidate) && !known.contains(candidate) {
                    known.push(candidate.clone());
                }
            }
            known
        };

        if let Some(bases) = self.exceptions.get(&(pos, form.to_string())) {
            let mut forms = vec![form.to_string()];
            forms.extend(bases.iter().cloned());
            return keep_known(&forms);
        }

        let mut forms = apply_substitutions(&[form.to_string()], pos);
        let mut first_pass = vec![form.to_string()];
        first_pass.extend(forms.iter().cloned());
        let known = keep_known(&first_pass);
        if !known.is_empty() {
            return known;
        }

        while !forms.is_empty() {
            forms = apply_substitutions(&forms, pos);
            let known = keep_known(&forms);
            if !known.is_empty() {
                return known;
            }
        }

        Vec::new()
    }

    /// Lemma names of one synset, adjective markers such as `(a)` removed.
    pub fn synset_lemmas(&self, id: SynsetId) -> Vec<String> {
        self.db
            .get_synset(id)
            .map(|synset| {
                synset
                    .words
                    .iter()
                    .map(|lemma| strip_adjective_marker(lemma.text).to_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Lemmatizer for WordNet {
    fn lemmatize(&self, word: &str) -> String {
        self.morphy(word, Pos::Noun)
            .into_iter()
            .reduce(|shortest, candidate| {
                if candidate.chars().count() < shortest.chars().count() {
                    candidate
                } else {
                    shortest
                }
            })
            .unwrap_or_else(|| word.to_string())
    }
}

impl ThesaurusLookup for WordNet {
    fn synonyms(&self, word: &str) -> BTreeSet<String> {
        let lookup = word.trim().to_lowercase().replace(' ', "_");
        let mut synonyms = BTreeSet::new();

        for pos in ALL_POS {
            let mut seen: Vec<SynsetId> = Vec::new();
            for base in self.morphy(&lookup, pos) {
                for id in self.db.synsets_for_lemma(pos, &base) {
                    if seen.contains(id) {
                        continue;
                    }
                    seen.push(*id);
                    synonyms.extend(
                        self.synset_lemmas(*id)
                            .into_iter()
                            .map(|lemma| lemma.replace('_', " ")),
                    );
                }
            }
        }

        synonyms
    }
}

fn apply_substitutions(forms: &[String], pos: Pos) -> Vec<String> {
    let mut produced = Vec::new();
    for form in forms {
        for (old, new) in substitutions(pos) {
            if let Some(stem) = form.strip_suffix(old) {
                let candidate = format!("{stem}{new}");
                if !candidate.is_empty() {
                    produced.push(candidate);
                }
            }
        }
    }
    produced
}

fn strip_adjective_marker(word: &str) -> &str {
    match word.find('(') {
        Some(position) if word.ends_with(')') => &word[..position],
        _ => word,
    }
}

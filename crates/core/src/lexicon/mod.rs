pub mod rules;
pub mod thesaurus;
pub mod wordnet;

pub use rules::SuffixLemmatizer;
pub use thesaurus::{EmptyThesaurus, JsonThesaurus};
pub use wordnet::{PartOfSpeech, WordNet};

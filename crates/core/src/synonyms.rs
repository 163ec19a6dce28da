use crate::traits::ThesaurusLookup;
use std::collections::BTreeSet;

pub fn synonyms<T: ThesaurusLookup + ?Sized>(keyword: &str, thesaurus: &T) -> BTreeSet<String> {
    thesaurus.synonyms(keyword)
}

/// The keywords plus every synonym of each. Never drops an original keyword.
pub fn expand_keywords<'a, I, T>(keywords: I, thesaurus: &T) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a String>,
    T: ThesaurusLookup + ?Sized,
{
    let mut expanded = BTreeSet::new();
    for keyword in keywords {
        expanded.insert(keyword.clone());
        expanded.extend(synonyms(keyword, thesaurus));
    }
    expanded
}

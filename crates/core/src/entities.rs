use crate::models::{EntityMatch, RecognizedEntity};
use crate::preprocess::is_stop_word;
use crate::traits::EntityRecognizer;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

static INVERTED_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\p{Lu}\p{Ll}+),[ \t]+(\p{Lu}\p{Ll}+)\b").unwrap());

static CAPITALIZED_RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:\p{Lu}\.|\p{Lu}[\w'&-]*)(?:(?:[ \t]+(?:of|de|van|von|&))?[ \t]+(?:\p{Lu}\.|\p{Lu}[\w'&-]*))*",
    )
    .unwrap()
});

const ORGANIZATION_WORDS: [&str; 26] = [
    "inc", "corp", "corporation", "ltd", "llc", "plc", "gmbh", "co", "company", "companies",
    "group", "holdings", "bank", "university", "college", "institute", "foundation",
    "association", "agency", "ministry", "department", "council", "committee", "court",
    "school", "hospital",
];

const PLACES: [&str; 48] = [
    "afghanistan", "argentina", "australia", "austria", "beijing", "berlin", "boston", "brazil",
    "california", "canada", "chicago", "china", "egypt", "england", "europe", "france",
    "germany", "india", "ireland", "italy", "japan", "kenya", "london", "los angeles", "madrid",
    "mexico", "moscow", "new york", "nigeria", "paris", "poland", "rome", "russia",
    "san francisco", "scotland", "seattle", "spain", "sweden", "sydney", "texas", "tokyo",
    "toronto", "turkey", "uk", "united kingdom", "united states", "usa", "washington",
];

const CALENDAR_WORDS: [&str; 19] = [
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "monday", "tuesday", "wednesday", "thursday", "friday",
    "saturday", "sunday",
];

/// Sentence adverbs and interjections that are capitalized only because they open a sentence.
const DISCOURSE_WORDS: [&str; 40] = [
    "accordingly", "additionally", "afterwards", "also", "anyway", "besides", "certainly",
    "clearly", "consequently", "currently", "dear", "finally", "first", "fortunately",
    "furthermore", "hello", "hence", "however", "indeed", "instead", "later", "meanwhile",
    "moreover", "nevertheless", "nonetheless", "now", "obviously", "otherwise", "overall",
    "please", "recently", "regardless", "similarly", "still", "thanks", "therefore", "thus",
    "today", "tomorrow", "yesterday",
];

/// Finite verbs that commonly follow a bare surname opening a sentence.
const FOLLOWING_VERBS: [&str; 24] = [
    "is", "was", "has", "had", "says", "said", "told", "met", "wrote", "went", "made", "will",
    "would", "can", "could", "did", "does", "gave", "took", "came", "saw", "sent", "left", "knew",
];

/// Capitalization-driven recognizer emitting `PERSON`, `ORG`, `GPE` and `DATE` spans.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternEntityRecognizer;

impl EntityRecognizer for PatternEntityRecognizer {
    fn recognize(&self, text: &str) -> Vec<RecognizedEntity> {
        let mut entities = Vec::new();

        for capture in INVERTED_NAME_RE.captures_iter(text) {
            let (Some(whole), Some(surname), Some(given)) =
                (capture.get(0), capture.get(1), capture.get(2))
            else {
                continue;
            };
            let opens_with_adverb = starts_sentence(text, whole.start())
                && is_discourse_word(&surname.as_str().to_lowercase());
            let is_name = !opens_with_adverb
                && [surname.as_str(), given.as_str()].iter().all(|part| {
                    let lowered = part.to_lowercase();
                    !is_place(&lowered) && !is_calendar_word(&lowered) && !is_stop_word(&lowered)
                });
            if is_name {
                entities.push(RecognizedEntity {
                    text: whole.as_str().to_string(),
                    label: "PERSON".to_string(),
                    start: whole.start(),
                    end: whole.end(),
                });
            }
        }

        let inverted = entities
            .iter()
            .map(|entity| (entity.start, entity.end))
            .collect::<Vec<_>>();

        for run in CAPITALIZED_RUN_RE.find_iter(text) {
            if inverted
                .iter()
                .any(|(start, end)| run.start() < *end && *start < run.end())
            {
                continue;
            }
            if let Some(entity) = classify_run(text, run.start(), run.as_str()) {
                entities.push(entity);
            }
        }

        entities.sort_by_key(|entity| entity.start);
        entities
    }
}

fn classify_run(text: &str, start: usize, run: &str) -> Option<RecognizedEntity> {
    let mut offset = 0;
    for word in run.split_whitespace() {
        let lowered = word.to_lowercase();
        if !is_stop_word(&lowered) && !is_discourse_word(&lowered) {
            break;
        }
        offset = run[offset..].find(word)? + offset + word.len();
        offset += run[offset..].len() - run[offset..].trim_start().len();
    }

    let trimmed = &run[offset..];
    let words = trimmed.split_whitespace().collect::<Vec<_>>();
    if words.is_empty() {
        return None;
    }

    let lowered = trimmed.to_lowercase();
    let first = words[0].to_lowercase();
    let span_start = start + offset;

    let label = if words.iter().any(|word| is_organization_word(word)) {
        "ORG"
    } else if is_place(&lowered) {
        "GPE"
    } else if is_calendar_word(&first) {
        "DATE"
    } else if words.len() == 1 && is_acronym(words[0]) {
        "ORG"
    } else if words.len() == 1
        && starts_sentence(text, span_start)
        && !followed_by_verb(text, span_start + trimmed.len())
    {
        return None;
    } else {
        "PERSON"
    };

    Some(RecognizedEntity {
        text: trimmed.to_string(),
        label: label.to_string(),
        start: span_start,
        end: span_start + trimmed.len(),
    })
}

fn starts_sentence(text: &str, start: usize) -> bool {
    let before = text[..start].trim_end_matches([' ', '\t']);
    before.is_empty()
        || before.ends_with(|c: char| matches!(c, '.' | '!' | '?' | ':' | '"' | '\n' | '\r'))
}

/// True when the next word after `end` is lowercase and reads like a finite verb.
fn followed_by_verb(text: &str, end: usize) -> bool {
    let rest = text[end..].trim_start_matches([' ', '\t']);
    let next = rest
        .split(|c: char| !c.is_alphabetic())
        .next()
        .unwrap_or_default();
    !next.is_empty()
        && next.chars().all(char::is_lowercase)
        && ((next.len() > 3 && next.ends_with("ed"))
            || FOLLOWING_VERBS.iter().any(|verb| *verb == next))
}

fn is_discourse_word(lowered: &str) -> bool {
    DISCOURSE_WORDS.iter().any(|word| *word == lowered)
}

fn is_place(lowered: &str) -> bool {
    PLACES.iter().any(|place| *place == lowered)
}

fn is_calendar_word(lowered: &str) -> bool {
    CALENDAR_WORDS.iter().any(|word| *word == lowered)
}

fn is_organization_word(word: &str) -> bool {
    let lowered = word.trim_end_matches('.').to_lowercase();
    ORGANIZATION_WORDS.iter().any(|org| *org == lowered)
}

fn is_acronym(word: &str) -> bool {
    word.chars().count() > 1 && word.chars().all(|c| !c.is_lowercase())
}

/// Lowercase `\w+` words of `text`.
pub fn word_set(text: &str) -> HashSet<String> {
    WORD_RE
        .find_iter(&text.to_lowercase())
        .map(|word| word.as_str().to_string())
        .collect()
}

/// True when every word of `name` appears among the words of `entity_text`.
pub fn name_matches(entity_text: &str, name: &str) -> bool {
    let entity_words = word_set(entity_text);
    word_set(name).iter().all(|word| entity_words.contains(word))
}

/// Recognized entities whose words cover one of `names`; an entity is listed once per matching name.
pub fn extract_entities<R: EntityRecognizer + ?Sized>(
    text: &str,
    names: &[String],
    recognizer: &R,
) -> Vec<EntityMatch> {
    if names.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    for entity in recognizer.recognize(text) {
        for name in names {
            if name_matches(&entity.text, name) {
                matches.push(EntityMatch {
                    text: entity.text.clone(),
                    label: entity.label.clone(),
                });
            }
        }
    }
    matches
}

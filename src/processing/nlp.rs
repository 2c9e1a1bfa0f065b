//! Language resources shared by normalization and entity extraction
//!
//! An [`NlpModel`] is built once per run and handed by reference to the
//! components that need it.

use crate::config::{NlpConfig, PersonRecognizerKind};
use crate::error::Result;
use crate::processing::lemmatizer::Lemmatizer;
use crate::processing::stopwords::StopwordList;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Finds person-name spans in raw text
pub trait PersonRecognizer: Send + Sync {
    fn person_spans(&self, text: &str) -> Vec<String>;
}

/// Characters allowed inside a single name word ("O'Brien", "Mary-Jane")
pub(crate) const NAME_JOINERS: &[char] = &['\'', '\u{2019}', '-'];

/// Contractions and possessives split off a word before filtering
const CLITICS: &[&str] = &[
    "n't", "n\u{2019}t", "'s", "\u{2019}s", "'re", "\u{2019}re", "'ll", "\u{2019}ll", "'ve", "\u{2019}ve",
    "'m", "\u{2019}m", "'d", "\u{2019}d",
];

pub struct NlpModel {
    stopwords: StopwordList,
    lemmatizer: Lemmatizer,
    person_recognizer: Box<dyn PersonRecognizer>,
}

impl NlpModel {
    pub fn english() -> Self {
        Self::from_config(&NlpConfig::default())
    }

    /// Build the model with the heuristic person recognizer
    pub fn from_config(config: &NlpConfig) -> Self {
        let stopwords = StopwordList::english().with_extra(&config.extra_stopwords);
        let recognizer = HeuristicPersonRecognizer::new(config.min_name_words, config.max_name_words);

        Self {
            stopwords,
            lemmatizer: Lemmatizer::new(),
            person_recognizer: Box::new(recognizer),
        }
    }

    /// Build the model with the person recognizer the configuration asks for.
    ///
    /// The rust-bert backend downloads its weights on first use and is only
    /// available in builds with the `ner` feature.
    pub fn load(config: &NlpConfig) -> Result<Self> {
        let model = Self::from_config(config);
        match config.person_recognizer {
            PersonRecognizerKind::Heuristic => Ok(model),
            PersonRecognizerKind::RustBert => Ok(model.with_person_recognizer(rust_bert_recognizer()?)),
        }
    }

    pub fn with_person_recognizer(mut self, recognizer: Box<dyn PersonRecognizer>) -> Self {
        self.person_recognizer = recognizer;
        self
    }

    /// Split text into words. Possessive and contracted endings ("'s", "n't")
    /// come out as separate tokens so the stem keeps its meaning.
    pub fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut tokens = Vec::new();
        for word in text.unicode_words() {
            match split_clitic(word) {
                Some((stem, clitic)) => {
                    tokens.push(stem);
                    tokens.push(clitic);
                }
                None => tokens.push(word),
            }
        }
        tokens
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn lemma(&self, word: &str) -> String {
        self.lemmatizer.lemmatize(word)
    }

    pub fn person_spans(&self, text: &str) -> Vec<String> {
        self.person_recognizer.person_spans(text)
    }
}

#[cfg(feature = "ner")]
fn rust_bert_recognizer() -> Result<Box<dyn PersonRecognizer>> {
    log::info!("Loading rust-bert NER model");
    Ok(Box::new(crate::processing::ner::RustBertPersonRecognizer::new()?))
}

#[cfg(not(feature = "ner"))]
fn rust_bert_recognizer() -> Result<Box<dyn PersonRecognizer>> {
    Err(crate::error::ResumeRankerError::Configuration(
        "The rust-bert person recognizer needs a build with `--features ner`".to_string(),
    ))
}

fn split_clitic(word: &str) -> Option<(&str, &str)> {
    CLITICS.iter().find_map(|clitic| {
        let split = word.len().checked_sub(clitic.len())?;
        if split == 0 || !word.is_char_boundary(split) || !word[split..].eq_ignore_ascii_case(clitic) {
            return None;
        }
        Some(word.split_at(split))
    })
}

/// Capitalization-based person recognizer.
///
/// Works line by line on whitespace-separated words. A name is a run of
/// capitalized words whose length falls within the configured bounds. Opening
/// or closing punctuation ends a run. A run that also holds a capitalized word
/// which cannot be part of a name ("Senior Data Scientist", "New York City")
/// is dropped whole.
pub struct HeuristicPersonRecognizer {
    min_words: usize,
    max_words: usize,
    stopwords: StopwordList,
    non_name_words: HashSet<&'static str>,
}

#[derive(Default)]
struct NameRun<'t> {
    words: Vec<&'t str>,
    rejected: bool,
}

impl Default for HeuristicPersonRecognizer {
    fn default() -> Self {
        Self::new(2, 3)
    }
}

impl HeuristicPersonRecognizer {
    pub fn new(min_words: usize, max_words: usize) -> Self {
        Self {
            min_words: min_words.max(1),
            max_words: max_words.max(min_words.max(1)),
            stopwords: StopwordList::english(),
            non_name_words: NON_NAME_WORDS.iter().copied().collect(),
        }
    }

    fn is_name_word(&self, word: &str) -> bool {
        if word.chars().count() < 2 {
            return false;
        }

        let segments: Vec<&str> = word.split(NAME_JOINERS).collect();
        if !segments.iter().all(|segment| is_capitalized(segment)) {
            return false;
        }

        // Single letters ("O" in "O'Brien") are not checked against the word lists
        !self.is_common_word(word)
            && segments
                .iter()
                .filter(|segment| segment.chars().count() > 1)
                .all(|segment| !self.is_common_word(segment))
    }

    fn is_common_word(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.stopwords.contains(&lower) || self.non_name_words.contains(lower.as_str())
    }

    fn flush(&self, run: &mut NameRun<'_>, spans: &mut Vec<String>) {
        let len = run.words.len();
        if !run.rejected && len >= self.min_words && len <= self.max_words {
            spans.push(run.words.join(" "));
        }
        *run = NameRun::default();
    }
}

impl PersonRecognizer for HeuristicPersonRecognizer {
    fn person_spans(&self, text: &str) -> Vec<String> {
        let mut spans = Vec::new();

        for line in text.lines() {
            let mut run = NameRun::default();

            for token in line.split_whitespace() {
                let opened = token.trim_start_matches(OPENING_PUNCTUATION);
                let word = opened.trim_end_matches(CLOSING_PUNCTUATION);
                if opened.len() != token.len() {
                    self.flush(&mut run, &mut spans);
                }

                if self.is_name_word(word) {
                    run.words.push(word);
                } else if word.chars().next().is_some_and(char::is_uppercase) {
                    run.rejected = true;
                } else {
                    self.flush(&mut run, &mut spans);
                }

                if word.len() != opened.len() {
                    self.flush(&mut run, &mut spans);
                }
            }

            self.flush(&mut run, &mut spans);
        }

        spans
    }
}

/// Title case ("Smith") or all caps ("SMITH"), letters only
fn is_capitalized(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {}
        _ => return false,
    }

    let rest: Vec<char> = chars.collect();
    rest.iter().all(|c| c.is_alphabetic())
        && (rest.iter().all(|c| c.is_lowercase()) || rest.iter().all(|c| c.is_uppercase()))
}

const OPENING_PUNCTUATION: &[char] = &['(', '[', '"', '\u{201C}'];
const CLOSING_PUNCTUATION: &[char] = &[',', ';', ':', '.', '!', '?', ')', ']', '"', '\u{201D}'];

const NON_NAME_WORDS: &[&str] = &[
    "resume", "curriculum", "vitae", "cv", "summary", "profile", "objective", "experience",
    "education", "skills", "skill", "projects", "project", "certifications", "certification",
    "languages", "language", "references", "contact", "email", "phone", "address", "linkedin",
    "github", "work", "professional", "technical", "employment", "history", "interests",
    "software", "engineer", "engineering", "developer", "development", "senior", "junior",
    "lead", "manager", "management", "scientist", "science", "data", "analyst", "specialist",
    "consultant", "intern", "internship", "director", "architect", "designer", "administrator",
    "university", "college", "institute", "school", "academy", "bachelor", "master", "masters",
    "degree", "phd", "inc", "llc", "ltd", "corp", "company", "group", "team", "street",
    "avenue", "road", "city", "state", "remote", "present", "january", "february", "march",
    "april", "may", "june", "july", "august", "september", "october", "november", "december",
    "python", "java", "rust", "javascript", "typescript", "sql", "machine", "learning",
    "deep", "natural", "processing", "nlp", "ml", "ai", "cloud", "aws", "azure", "google",
    "microsoft", "amazon", "web", "backend", "frontend", "full", "stack", "research",
];

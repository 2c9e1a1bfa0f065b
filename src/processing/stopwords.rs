//! Stopword filtering
//!
//! The English list comes from the `stop-words` crate. That list is broad
//! and includes words that carry meaning in job postings ("need", "work",
//! "years"), so those are kept as content words.

use std::collections::HashSet;
use stop_words::{get, LANGUAGE};

#[derive(Debug, Clone)]
pub struct StopwordList {
    words: HashSet<String>,
}

impl Default for StopwordList {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordList {
    pub fn english() -> Self {
        let mut words: HashSet<String> = get(LANGUAGE::English).iter().map(|s| s.to_string()).collect();
        for word in CONTENT_WORDS {
            words.remove(*word);
        }
        Self { words }
    }

    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in extra {
            self.words.insert(word.as_ref().to_lowercase());
        }
        self
    }

    /// Case-insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }
}

/// Words the crate list treats as stopwords that still describe a job
const CONTENT_WORDS: &[&str] = &[
    "need", "needed", "needing", "needs", "work", "worked", "working", "works", "year", "years",
    "experience", "experienced", "research", "researched", "system", "systems", "problem",
    "problems", "information", "program", "programs", "group", "groups", "interest",
    "interested", "interests", "present", "presented", "presenting", "area", "areas", "member",
    "members", "open", "opened", "opening", "show", "showed", "showing", "state", "states",
    "order", "ordered", "point", "points", "case", "cases", "general", "important", "large",
    "high", "higher", "highest", "number", "numbers", "part", "parts", "place", "placed",
    "world", "end", "ended", "ending", "ends", "turn", "turned", "face", "faces", "fact",
    "facts", "room", "new", "newer", "newest", "differ", "different", "help",
    "helped", "helping", "helps", "home", "line", "lines", "long", "longer", "longest",
];

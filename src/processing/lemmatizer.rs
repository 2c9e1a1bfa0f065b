//! Rule-based English lemmatizer
//!
//! Irregular forms come from a lookup table; regular plurals and `-ed`/`-ing`
//! verb forms are reduced by suffix rules. Input is expected lowercase.

use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Lemmatizer {
    irregular: HashMap<&'static str, &'static str>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Stem endings after which a dropped silent `e` is restored
/// ("required" -> "requir" -> "require").
const E_RESTORING_ENDINGS: &[&str] = &[
    "at", "bl", "iz", "yz", "ys", "ir", "ur", "ar", "uc", "ud", "ut", "iv", "ov", "ag", "os",
    "ac", "rg", "dg", "rv", "lv", "nc", "rc",
];

const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("was", "be"), ("were", "be"), ("is", "be"), ("are", "be"), ("been", "be"), ("am", "be"),
    ("has", "have"), ("had", "have"), ("did", "do"), ("done", "do"), ("does", "do"),
    ("went", "go"), ("gone", "go"), ("ran", "run"), ("led", "lead"), ("built", "build"),
    ("wrote", "write"), ("written", "write"), ("taught", "teach"), ("thought", "think"),
    ("bought", "buy"), ("brought", "bring"), ("made", "make"), ("got", "get"),
    ("gotten", "get"), ("began", "begin"), ("begun", "begin"), ("knew", "know"),
    ("known", "know"), ("grew", "grow"), ("grown", "grow"), ("took", "take"),
    ("taken", "take"), ("gave", "give"), ("given", "give"), ("spoke", "speak"),
    ("spoken", "speak"), ("chose", "choose"), ("chosen", "choose"), ("drove", "drive"),
    ("driven", "drive"), ("won", "win"), ("met", "meet"), ("held", "hold"), ("sold", "sell"),
    ("told", "tell"), ("found", "find"), ("kept", "keep"), ("left", "leave"), ("lost", "lose"),
    ("paid", "pay"), ("said", "say"), ("sent", "send"), ("spent", "spend"), ("stood", "stand"),
    ("understood", "understand"), ("children", "child"), ("men", "man"), ("women", "woman"),
    ("people", "person"), ("mice", "mouse"), ("feet", "foot"), ("teeth", "tooth"),
    ("geese", "goose"), ("criteria", "criterion"), ("analyses", "analysis"),
    ("indices", "index"), ("matrices", "matrix"), ("theses", "thesis"), ("bases", "basis"),
    ("series", "series"), ("species", "species"), ("news", "news"), ("physics", "physics"),
    ("mathematics", "mathematics"), ("economics", "economics"),
];

impl Lemmatizer {
    pub fn new() -> Self {
        Self {
            irregular: IRREGULAR_FORMS.iter().copied().collect(),
        }
    }

    /// Base form of a lowercase alphabetic word
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(base) = self.irregular.get(word) {
            return (*base).to_string();
        }

        if let Some(base) = Self::verb_base(word) {
            return base;
        }

        Self::noun_singular(word).unwrap_or_else(|| word.to_string())
    }

    fn verb_base(word: &str) -> Option<String> {
        let len = word.chars().count();

        if len > 4 && word.ends_with("ied") {
            return Some(format!("{}y", &word[..word.len() - 3]));
        }

        // "need", "speed", "agreed": leave -eed forms alone
        if len > 4 && word.ends_with("ed") && !word.ends_with("eed") {
            return Self::restore_stem(&word[..word.len() - 2]);
        }

        if len > 5 && word.ends_with("ing") {
            return Self::restore_stem(&word[..word.len() - 3]);
        }

        None
    }

    fn restore_stem(stem: &str) -> Option<String> {
        if stem.chars().count() < 3 || !stem.chars().any(is_vowel) {
            return None;
        }

        let chars: Vec<char> = stem.chars().collect();
        let last = chars[chars.len() - 1];
        let prev = chars[chars.len() - 2];

        // "planned" -> "plan", but "installed" keeps its double l
        if last == prev && !is_vowel(last) && !matches!(last, 'l' | 's' | 'z') {
            return Some(chars[..chars.len() - 1].iter().collect());
        }

        if E_RESTORING_ENDINGS.iter().any(|ending| stem.ends_with(ending)) {
            return Some(format!("{}e", stem));
        }

        Some(stem.to_string())
    }

    fn noun_singular(word: &str) -> Option<String> {
        let len = word.chars().count();
        if len <= 3 || !word.ends_with('s') {
            return None;
        }

        if ["ss", "us", "is", "ous"].iter().any(|suffix| word.ends_with(suffix)) {
            return None;
        }

        if len > 4 && word.ends_with("ies") {
            return Some(format!("{}y", &word[..word.len() - 3]));
        }

        if ["sses", "ches", "shes", "xes", "zzes"].iter().any(|suffix| word.ends_with(suffix)) {
            return Some(word[..word.len() - 2].to_string());
        }

        Some(word[..word.len() - 1].to_string())
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

//! Email and person-name extraction from raw text

use crate::processing::nlp::NlpModel;
use regex::Regex;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entities {
    pub emails: Vec<String>,
    pub names: Vec<String>,
}

pub struct EntityExtractor<'a> {
    model: &'a NlpModel,
    email_regex: Regex,
}

impl<'a> EntityExtractor<'a> {
    pub fn new(model: &'a NlpModel) -> Self {
        // Anything around an '@'; surrounding punctuation is kept as-is
        let email_regex = Regex::new(r"\S+@\S+").expect("Invalid email regex");
        Self { model, email_regex }
    }

    /// Emails and names in order of first appearance
    pub fn extract(&self, raw_text: &str) -> Entities {
        let emails = self
            .email_regex
            .find_iter(raw_text)
            .map(|m| m.as_str().to_string())
            .collect();

        Entities {
            emails,
            names: self.model.person_spans(raw_text),
        }
    }
}

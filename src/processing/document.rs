//! Job description and per-resume result records

use crate::processing::entities::Entities;
use crate::processing::text_processor::TextNormalizer;

#[derive(Debug, Clone, PartialEq)]
pub struct JobDescription {
    pub raw_text: String,
    pub normalized_text: String,
}

impl JobDescription {
    pub fn new(raw_text: impl Into<String>, normalizer: &TextNormalizer<'_>) -> Self {
        let raw_text = raw_text.into();
        let normalized_text = normalizer.normalize(&raw_text);
        Self {
            raw_text,
            normalized_text,
        }
    }
}

/// Outcome of scoring one resume
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeRecord {
    pub file_path: String,
    pub emails: Vec<String>,
    pub names: Vec<String>,
    pub similarity: f64,
    /// Set when the resume could not be processed and the batch continued
    pub failure: Option<String>,
}

impl ResumeRecord {
    pub fn scored(file_path: impl Into<String>, entities: Entities, similarity: f64) -> Self {
        Self {
            file_path: file_path.into(),
            emails: entities.emails,
            names: entities.names,
            similarity,
            failure: None,
        }
    }

    pub fn failed(file_path: impl Into<String>, failure: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            emails: Vec::new(),
            names: Vec::new(),
            similarity: 0.0,
            failure: Some(failure.into()),
        }
    }

    /// First name found, if any
    pub fn name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    /// First email found, if any
    pub fn email(&self) -> Option<&str> {
        self.emails.first().map(String::as_str)
    }
}

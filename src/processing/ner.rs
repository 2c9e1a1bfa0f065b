//! Person recognition backed by a rust-bert token classification model
//!
//! The model tags each word with a label such as `B-PER` or `I-PER`. Tagged
//! words are merged back into full names using their character offsets.

use crate::error::{Result, ResumeRankerError};
use crate::processing::nlp::{PersonRecognizer, NAME_JOINERS};
use log::debug;
use rust_bert::pipelines::ner::{Entity, NERModel};
use std::sync::Mutex;

pub struct RustBertPersonRecognizer {
    model: Mutex<NERModel>,
}

impl RustBertPersonRecognizer {
    /// Load the default English NER model. Weights are fetched on first use.
    pub fn new() -> Result<Self> {
        let model = NERModel::new(Default::default())
            .map_err(|e| ResumeRankerError::Ner(format!("Failed to load NER model: {}", e)))?;
        Ok(Self {
            model: Mutex::new(model),
        })
    }
}

impl PersonRecognizer for RustBertPersonRecognizer {
    fn person_spans(&self, text: &str) -> Vec<String> {
        let lines: Vec<&str> = text.lines().map(str::trim).filter(|line| !line.is_empty()).collect();
        if lines.is_empty() {
            return Vec::new();
        }

        let predictions = match self.model.lock() {
            Ok(model) => model.predict(&lines),
            Err(poisoned) => poisoned.into_inner().predict(&lines),
        };

        let spans: Vec<String> = lines
            .iter()
            .zip(predictions.iter())
            .flat_map(|(line, entities)| {
                let tokens: Vec<TaggedToken> = entities.iter().map(TaggedToken::from).collect();
                merge_person_tokens(line, &tokens)
            })
            .collect();
        debug!("NER found {} person spans", spans.len());
        spans
    }
}

/// One tagged word, with character offsets into its line
#[derive(Debug, Clone, PartialEq)]
struct TaggedToken {
    label: String,
    begin: usize,
    end: usize,
}

impl From<&Entity> for TaggedToken {
    fn from(entity: &Entity) -> Self {
        Self {
            label: entity.label.clone(),
            begin: entity.offset.begin as usize,
            end: entity.offset.end as usize,
        }
    }
}

/// Join consecutive person tokens into names, in order of appearance.
///
/// Tokens continue a name when only whitespace or a name joiner separates
/// them. A `B-` label always starts a new name.
fn merge_person_tokens(line: &str, tokens: &[TaggedToken]) -> Vec<String> {
    let byte_offsets: Vec<usize> = line.char_indices().map(|(idx, _)| idx).collect();
    let byte_at = |char_pos: usize| byte_offsets.get(char_pos).copied().unwrap_or(line.len());
    let slice = |(begin, end): (usize, usize)| line[byte_at(begin)..byte_at(end)].trim().to_string();

    let mut names = Vec::new();
    let mut current: Option<(usize, usize)> = None;

    for token in tokens {
        if !token.label.ends_with("PER") || token.begin >= token.end {
            if let Some(range) = current.take() {
                names.push(slice(range));
            }
            continue;
        }

        let continues = match current {
            Some((_, end)) if !token.label.starts_with("B-") && token.begin >= end => line
                [byte_at(end)..byte_at(token.begin)]
                .chars()
                .all(|c| c.is_whitespace() || NAME_JOINERS.contains(&c)),
            _ => false,
        };

        if continues {
            current = current.map(|(begin, _)| (begin, token.end));
        } else if let Some(range) = current.replace((token.begin, token.end)) {
            names.push(slice(range));
        }
    }

    if let Some(range) = current {
        names.push(slice(range));
    }
    names.retain(|name| !name.is_empty());
    names
}

//! Text normalization, entity extraction and similarity ranking

pub mod document;
pub mod entities;
pub mod lemmatizer;
#[cfg(feature = "ner")]
pub mod ner;
pub mod nlp;
pub mod ranker;
pub mod stopwords;
pub mod text_processor;
pub mod tfidf;

pub use document::{JobDescription, ResumeRecord};
pub use nlp::{NlpModel, PersonRecognizer};
pub use ranker::ResumeRanker;

//! Error handling for the resume ranker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeRankerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[cfg(feature = "ner")]
    #[error("NER model error: {0}")]
    Ner(String),

    #[error("Vectorization error: {0}")]
    Vectorization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to process resume '{path}': {source}")]
    Resume {
        path: String,
        #[source]
        source: Box<ResumeRankerError>,
    },
}

impl ResumeRankerError {
    /// Attribute an error to the resume it came from
    pub fn for_resume(path: impl Into<String>, source: ResumeRankerError) -> Self {
        ResumeRankerError::Resume {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, ResumeRankerError>;

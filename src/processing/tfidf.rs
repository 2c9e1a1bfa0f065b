//! TF-IDF vector space and cosine similarity
//!
//! Terms are runs of two or more word characters. IDF is smoothed,
//! `ln((1 + n) / (1 + df)) + 1`, term frequency is the raw count and every
//! vector is L2-normalized. Terms outside the fitted vocabulary are ignored.

use crate::error::{Result, ResumeRankerError};
use ndarray::Array1;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};

pub struct TfidfVectorizer {
    token_regex: Regex,
    vocabulary: BTreeMap<String, usize>,
    idf: Array1<f64>,
    fitted: bool,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self {
            token_regex: Regex::new(r"\b\w\w+\b").expect("Invalid token regex"),
            vocabulary: BTreeMap::new(),
            idf: Array1::zeros(0),
            fitted: false,
        }
    }

    fn terms<'t>(&self, document: &'t str) -> Vec<&'t str> {
        self.token_regex.find_iter(document).map(|m| m.as_str()).collect()
    }

    /// Learn vocabulary and IDF weights from `documents`.
    ///
    /// An empty vocabulary is allowed; every transformed vector is then empty.
    pub fn fit(&mut self, documents: &[&str]) -> &mut Self {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();

        for document in documents {
            let unique: HashSet<&str> = self.terms(document).into_iter().collect();
            for term in unique {
                *document_frequency.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        let n_documents = documents.len() as f64;
        self.vocabulary = document_frequency
            .keys()
            .enumerate()
            .map(|(index, term)| (term.clone(), index))
            .collect();
        self.idf = document_frequency
            .values()
            .map(|&df| ((1.0 + n_documents) / (1.0 + df as f64)).ln() + 1.0)
            .collect();
        self.fitted = true;
        self
    }

    pub fn fit_transform(&mut self, documents: &[&str]) -> Result<Vec<Array1<f64>>> {
        self.fit(documents);
        documents.iter().map(|document| self.transform(document)).collect()
    }

    pub fn transform(&self, document: &str) -> Result<Array1<f64>> {
        if !self.fitted {
            return Err(ResumeRankerError::Vectorization(
                "Vectorizer must be fitted before transform".to_string(),
            ));
        }

        let mut vector = Array1::<f64>::zeros(self.vocabulary.len());
        for term in self.terms(document) {
            if let Some(&index) = self.vocabulary.get(term) {
                vector[index] += 1.0;
            }
        }

        vector *= &self.idf;

        let norm = vector.dot(&vector).sqrt();
        if norm > 0.0 {
            vector /= norm;
        }
        Ok(vector)
    }

    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.vocabulary.keys().map(String::as_str)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Cosine of the angle between two vectors, 0 when either is all zeros
pub fn cosine_similarity(a: &Array1<f64>, b: &Array1<f64>) -> Result<f64> {
    if a.len() != b.len() {
        return Err(ResumeRankerError::Vectorization(format!(
            "Vector dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let norm_a = a.dot(a).sqrt();
    let norm_b = b.dot(b).sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok((a.dot(b) / (norm_a * norm_b)).clamp(0.0, 1.0))
}

//! Text normalization

use crate::processing::nlp::NlpModel;

pub struct TextNormalizer<'a> {
    model: &'a NlpModel,
}

impl<'a> TextNormalizer<'a> {
    pub fn new(model: &'a NlpModel) -> Self {
        Self { model }
    }

    /// Lowercase, keep alphabetic non-stopword tokens, lemmatize and rejoin
    /// with single spaces. Possessive endings are dropped, not their stems.
    /// Returns an empty string when nothing survives.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();

        self.model
            .tokenize(&lowered)
            .into_iter()
            .filter(|token| token.chars().all(char::is_alphabetic))
            .filter(|token| !self.model.is_stopword(token))
            .map(|token| self.model.lemma(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_job_description() {
        let model = NlpModel::english();
        let normalizer = TextNormalizer::new(&model);

        assert_eq!(normalizer.normalize("Python developer needed"), "python developer need");
        assert_eq!(
            normalizer.normalize("NLP Specialist: Develop and implement NLP algorithms."),
            "nlp specialist develop implement nlp algorithm"
        );
    }

    #[test]
    fn test_non_alphabetic_tokens_dropped() {
        let model = NlpModel::english();
        let normalizer = TextNormalizer::new(&model);

        assert_eq!(normalizer.normalize("Python3 in 2024, 5 years of Rust"), "year rust");
    }

    #[test]
    fn test_possessives_keep_their_stem() {
        let model = NlpModel::english();
        let normalizer = TextNormalizer::new(&model);

        assert_eq!(
            normalizer.normalize("Python developer's master's degree"),
            "python developer master degree"
        );
        assert_eq!(normalizer.normalize("Python developer\u{2019}s skills"), "python developer skill");
    }

    #[test]
    fn test_empty_and_stopword_only_input() {
        let model = NlpModel::english();
        let normalizer = TextNormalizer::new(&model);

        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("the and of it"), "");
    }
}

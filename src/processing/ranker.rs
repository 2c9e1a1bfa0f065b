//! Similarity ranking of resumes against a job description

use crate::config::FailurePolicy;
use crate::error::{Result, ResumeRankerError};
use crate::input::{utf8_path, InputManager};
use crate::processing::document::{JobDescription, ResumeRecord};
use crate::processing::entities::EntityExtractor;
use crate::processing::nlp::NlpModel;
use crate::processing::text_processor::TextNormalizer;
use crate::processing::tfidf::{cosine_similarity, TfidfVectorizer};
use log::{debug, info, warn};
use ndarray::Array1;
use std::path::{Path, PathBuf};

pub struct ResumeRanker<'a> {
    normalizer: TextNormalizer<'a>,
    entity_extractor: EntityExtractor<'a>,
    input_manager: InputManager,
    failure_policy: FailurePolicy,
}

/// Vector space fitted on a single job description
struct JobSpace {
    vectorizer: TfidfVectorizer,
    job_vector: Array1<f64>,
}

impl<'a> ResumeRanker<'a> {
    pub fn new(model: &'a NlpModel) -> Self {
        Self {
            normalizer: TextNormalizer::new(model),
            entity_extractor: EntityExtractor::new(model),
            input_manager: InputManager::new(),
            failure_policy: FailurePolicy::default(),
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Score every resume against `job_description` and sort by descending
    /// similarity. Equal scores keep their input order.
    ///
    /// Every path must be valid UTF-8, whatever the failure policy.
    pub fn rank(&mut self, job_description: &str, resume_paths: &[PathBuf]) -> Result<Vec<ResumeRecord>> {
        let file_paths = resume_paths
            .iter()
            .map(|path| utf8_path(path))
            .collect::<Result<Vec<&str>>>()?;

        let job = JobDescription::new(job_description, &self.normalizer);
        let space = Self::fit_job_space(&job)?;

        let mut records = Vec::with_capacity(resume_paths.len());
        for (path, file_path) in resume_paths.iter().zip(file_paths) {
            match self.score_resume(path, file_path, &space) {
                Ok(record) => {
                    debug!("{} scored {:.4}", file_path, record.similarity);
                    records.push(record);
                }
                Err(e) => match self.failure_policy {
                    FailurePolicy::FailFast => return Err(ResumeRankerError::for_resume(file_path, e)),
                    FailurePolicy::Isolate => {
                        warn!("Skipping {}: {}", file_path, e);
                        records.push(ResumeRecord::failed(file_path, e.to_string()));
                    }
                },
            }
        }

        records.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        info!("Ranked {} resumes", records.len());
        Ok(records)
    }

    fn fit_job_space(job: &JobDescription) -> Result<JobSpace> {
        // The job description is the only document in the fitting corpus
        let mut vectorizer = TfidfVectorizer::new();
        let job_vector = vectorizer
            .fit_transform(&[job.normalized_text.as_str()])?
            .pop()
            .ok_or_else(|| ResumeRankerError::Vectorization("Job description produced no vector".to_string()))?;

        if vectorizer.vocabulary_size() == 0 {
            warn!("Job description has no scorable terms; every resume will score 0");
        } else {
            debug!("Job vocabulary: {} terms", vectorizer.vocabulary_size());
        }

        Ok(JobSpace { vectorizer, job_vector })
    }

    fn score_resume(&mut self, path: &Path, file_path: &str, space: &JobSpace) -> Result<ResumeRecord> {
        let raw_text = self.input_manager.extract_text(path)?;
        let normalized_text = self.normalizer.normalize(&raw_text);
        let entities = self.entity_extractor.extract(&raw_text);

        let resume_vector = space.vectorizer.transform(&normalized_text)?;
        let similarity = cosine_similarity(&space.job_vector, &resume_vector)?;

        Ok(ResumeRecord::scored(file_path, entities, similarity))
    }
}

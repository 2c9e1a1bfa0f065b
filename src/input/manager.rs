//! Input manager for handling different file types

use crate::error::{Result, ResumeRankerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub fn extract_text(&mut self, path: &Path) -> Result<String> {
        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(path) {
                debug!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        let text = match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path)?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path)?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path)?
            }
            FileType::Unknown => {
                return Err(ResumeRankerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path.to_path_buf(), text.clone());
        }

        Ok(text)
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

/// Borrow a resume path as UTF-8. Paths are reported and written to CSV
/// verbatim, so a path that cannot be represented is rejected.
pub fn utf8_path(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| {
        ResumeRankerError::InvalidInput(format!("Resume path is not valid UTF-8: {}", path.display()))
    })
}

/// Expand the command-line inputs into an ordered list of resume files.
///
/// Files are kept in the order given. A directory is replaced by every
/// supported file beneath it, sorted by path.
pub fn collect_resume_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(input)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .map(|entry| entry.into_path())
                .filter(|path| FileType::from_path(path).is_supported())
                .collect();
            found.sort();

            if found.is_empty() {
                return Err(ResumeRankerError::InvalidInput(format!(
                    "Directory contains no supported resumes: {}",
                    input.display()
                )));
            }
            debug!("Found {} resumes under {}", found.len(), input.display());
            paths.extend(found);
        } else {
            paths.push(input.clone());
        }
    }

    for path in &paths {
        utf8_path(path)?;
    }

    if paths.is_empty() {
        return Err(ResumeRankerError::InvalidInput("No resume files given".to_string()));
    }

    Ok(paths)
}

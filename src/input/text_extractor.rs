//! Text extraction from various file formats

use crate::error::{Result, ResumeRankerError};
use log::debug;
use lopdf::Document;
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::fs;
use std::path::Path;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<String>;
}

/// Page-by-page PDF text extraction. Pages without a text layer are skipped.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path)?;
        self.extract_from_bytes(&bytes, path)
    }
}

impl PdfExtractor {
    pub fn extract_from_bytes(&self, bytes: &[u8], path: &Path) -> Result<String> {
        let doc = Document::load_mem(bytes).map_err(|e| {
            ResumeRankerError::PdfExtraction(format!("Failed to parse PDF '{}': {}", path.display(), e))
        })?;

        let mut text = String::new();
        for (page_num, _page_id) in doc.get_pages() {
            let page_text = doc.extract_text(&[page_num]).map_err(|e| {
                ResumeRankerError::PdfExtraction(format!(
                    "Failed to extract text from page {} of '{}': {}",
                    page_num,
                    path.display(),
                    e
                ))
            })?;

            if page_text.trim().is_empty() {
                debug!("Skipping page {} of {}: no extractable text", page_num, path.display());
                continue;
            }
            text.push_str(&page_text);
        }

        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path)?;
        Ok(Self::markdown_to_text(&markdown_content))
    }
}

impl MarkdownExtractor {
    pub fn markdown_to_text(markdown: &str) -> String {
        let parser = Parser::new(markdown);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        let text = html_output
            .replace("<br>", "\n")
            .replace("</p>", "\n\n")
            .replace("</li>", "\n")
            .replace("</h1>", "\n")
            .replace("</h2>", "\n")
            .replace("</h3>", "\n");

        let tag_regex = Regex::new(r"<[^>]*>").expect("Invalid tag regex");
        let stripped = tag_regex.replace_all(&text, "");

        let decoded = stripped
            .replace("&nbsp;", " ")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&");

        decoded
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

//! Console presentation of the ranked report

use crate::output::report::{RankedEntry, RankedReport};
use colored::Colorize;
use std::path::Path;

pub struct ConsoleFormatter {
    use_colors: bool,
    not_available: String,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, not_available: impl Into<String>) -> Self {
        Self {
            use_colors,
            not_available: not_available.into(),
        }
    }

    /// `Rank {n}: {name}, {email}, Similarity: {score}`
    pub fn format_entry(&self, entry: &RankedEntry) -> String {
        let mut line = format!(
            "Rank {}: {}, {}, Similarity: {}",
            entry.rank,
            entry.name_or(&self.not_available),
            entry.email_or(&self.not_available),
            entry.similarity_display()
        );

        if let Some(failure) = &entry.failure {
            let marker = format!(" [failed: {}]", failure);
            if self.use_colors {
                line.push_str(&marker.red().to_string());
            } else {
                line.push_str(&marker);
            }
        }
        line
    }

    pub fn format_report(&self, report: &RankedReport) -> String {
        report
            .entries
            .iter()
            .map(|entry| self.format_entry(entry))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn format_saved(&self, path: &Path) -> String {
        let line = format!("Ranking saved to {}", path.display());
        if self.use_colors {
            line.green().to_string()
        } else {
            line
        }
    }
}

//! Ranked report assembled from scored resume records

use crate::processing::document::ResumeRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    /// 1-based position in the report
    pub rank: usize,
    pub name: Option<String>,
    pub email: Option<String>,
    pub similarity: f64,
    pub file_path: String,
    pub failure: Option<String>,
}

impl RankedEntry {
    pub fn similarity_display(&self) -> String {
        format!("{:.4}", self.similarity)
    }

    pub fn name_or<'s>(&'s self, not_available: &'s str) -> &'s str {
        self.name.as_deref().unwrap_or(not_available)
    }

    pub fn email_or<'s>(&'s self, not_available: &'s str) -> &'s str {
        self.email.as_deref().unwrap_or(not_available)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedReport {
    pub entries: Vec<RankedEntry>,
}

impl RankedReport {
    /// Records must already be sorted; ranks follow their order.
    pub fn from_records(records: Vec<ResumeRecord>) -> Self {
        let entries = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| RankedEntry {
                rank: index + 1,
                name: record.name().map(str::to_string),
                email: record.email().map(str::to_string),
                similarity: record.similarity,
                file_path: record.file_path,
                failure: record.failure,
            })
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn failures(&self) -> impl Iterator<Item = &RankedEntry> {
        self.entries.iter().filter(|entry| entry.failure.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::entities::Entities;

    #[test]
    fn test_ranks_start_at_one() {
        let records = vec![
            ResumeRecord::scored(
                "a.pdf",
                Entities {
                    emails: vec!["a@x.io".to_string()],
                    names: vec![],
                },
                0.91234,
            ),
            ResumeRecord::failed("b.pdf", "unreadable"),
        ];
        let report = RankedReport::from_records(records);

        assert_eq!(report.len(), 2);
        assert_eq!(report.entries[0].rank, 1);
        assert_eq!(report.entries[1].rank, 2);
        assert_eq!(report.entries[0].similarity_display(), "0.9123");
        assert_eq!(report.entries[0].name_or("N/A"), "N/A");
        assert_eq!(report.entries[0].email_or("N/A"), "a@x.io");
        assert_eq!(report.failures().count(), 1);
    }
}

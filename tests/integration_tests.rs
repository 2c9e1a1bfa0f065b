//! Integration tests for the resume ranker

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use resume_ranker::config::FailurePolicy;
use resume_ranker::input::text_extractor::{PdfExtractor, TextExtractor};
use resume_ranker::input::InputManager;
use resume_ranker::output::{save_csv, ConsoleFormatter, RankedReport};
use resume_ranker::processing::{NlpModel, ResumeRanker};
use resume_ranker::ResumeRankerError;
use std::path::{Path, PathBuf};

/// Write a PDF with one page per entry; each page shows its lines of text.
/// A page with no lines has an empty content stream.
fn write_pdf(path: &Path, pages: &[&[&str]]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), Object::Integer(12)]));
            operations.push(Operation::new(
                "Td",
                vec![Object::Integer(72), Object::Integer(720 - 16 * i as i64)],
            ));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(count),
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(595),
                Object::Integer(842),
            ],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

fn fixture(name: &str) -> PathBuf {
    Path::new("tests/fixtures").join(name)
}

#[test]
fn test_pdf_pages_concatenated_and_blank_pages_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.pdf");
    write_pdf(&path, &[&["Jane Roe"], &[], &["Python developer"]]);

    let text = PdfExtractor.extract(&path).unwrap();
    let first = text.find("Jane Roe").expect("first page text");
    let last = text.find("Python developer").expect("last page text");
    assert!(first < last);
}

#[test]
fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let text = manager.extract_text(&fixture("sample_resume.txt")).unwrap();

    assert!(text.contains("Jane Roe"));
    assert!(text.contains("jane.roe@example.com"));
    assert_eq!(manager.cache_size(), 1);

    // Second read comes from the cache
    let again = manager.extract_text(&fixture("sample_resume.txt")).unwrap();
    assert_eq!(text, again);
    assert_eq!(manager.cache_size(), 1);
}

#[test]
fn test_unsupported_and_missing_files() {
    let mut manager = InputManager::new();
    let dir = tempfile::tempdir().unwrap();
    let odd = dir.path().join("resume.xyz");
    std::fs::write(&odd, "x").unwrap();

    assert!(matches!(
        manager.extract_text(&odd),
        Err(ResumeRankerError::UnsupportedFormat(_))
    ));
    assert!(matches!(
        manager.extract_text(&fixture("nonexistent.txt")),
        Err(ResumeRankerError::Io(ref e)) if e.kind() == std::io::ErrorKind::NotFound
    ));
}

#[test]
fn test_python_developer_scenario_with_pdfs() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.pdf");
    let b = dir.path().join("b.pdf");
    let c = dir.path().join("c.pdf");
    write_pdf(&a, &[&["Alice Walker", "alice@example.com", "Python developer needed for growth"]]);
    write_pdf(&b, &[&["Bob Stone", "Python developer"]]);
    write_pdf(&c, &[&["Carol Diaz", "Gardener"]]);

    let model = NlpModel::english();
    let mut ranker = ResumeRanker::new(&model);
    let records = ranker
        .rank("Python developer needed", &[c.clone(), b.clone(), a.clone()])
        .unwrap();
    let report = RankedReport::from_records(records);

    let paths: Vec<&str> = report.entries.iter().map(|e| e.file_path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            a.to_str().unwrap(),
            b.to_str().unwrap(),
            c.to_str().unwrap(),
        ]
    );
    assert_eq!(report.entries[0].name.as_deref(), Some("Alice Walker"));
    assert_eq!(report.entries[0].email.as_deref(), Some("alice@example.com"));
    assert_eq!(report.entries[1].email, None);
    assert_eq!(report.entries[2].similarity_display(), "0.0000");

    let formatter = ConsoleFormatter::new(false, "N/A");
    let console = formatter.format_report(&report);
    assert!(console.starts_with("Rank 1: Alice Walker, alice@example.com, Similarity: 1.0000"));
    assert!(console.contains("Rank 2: Bob Stone, N/A, Similarity:"));
}

#[test]
fn test_end_to_end_report_properties() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("nlp.pdf");
    write_pdf(
        &pdf,
        &[&["Priya Natarajan", "NLP algorithms, NLP libraries, Python, ML frameworks"]],
    );

    let job = InputManager::new().extract_text(&fixture("job_description.md")).unwrap();
    let inputs = vec![
        fixture("unrelated_resume.txt"),
        fixture("sample_resume.txt"),
        pdf.clone(),
    ];

    let model = NlpModel::english();
    let mut ranker = ResumeRanker::new(&model);
    let first = ranker.rank(&job, &inputs).unwrap();
    let second = ResumeRanker::new(&model).rank(&job, &inputs).unwrap();
    assert_eq!(first, second);

    for pair in first.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }
    for input in &inputs {
        let path = input.to_string_lossy();
        assert_eq!(first.iter().filter(|r| r.file_path == path).count(), 1);
    }
    assert_eq!(first.last().unwrap().file_path, fixture("unrelated_resume.txt").to_string_lossy());

    let report = RankedReport::from_records(first);
    let csv_path = dir.path().join("ranked_resumes.csv");
    save_csv(&report, &csv_path, "N/A").unwrap();

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), inputs.len() + 1);
    assert_eq!(lines[0], "Rank,Name,Email,Similarity,Resume File");
    assert!(lines[3].starts_with("3,Carlos Mendez,N/A,"));
}

#[test]
fn test_pdf_without_text_scores_zero() {
    let dir = tempfile::tempdir().unwrap();
    let blank = dir.path().join("scanned.pdf");
    write_pdf(&blank, &[&[], &[]]);

    let model = NlpModel::english();
    let records = ResumeRanker::new(&model)
        .rank("Python developer needed", &[blank])
        .unwrap();

    assert_eq!(records[0].similarity, 0.0);
    assert_eq!(records[0].name(), None);
    assert_eq!(records[0].email(), None);
    assert!(records[0].failure.is_none());
}

#[test]
fn test_empty_file_under_both_failure_policies() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("empty.pdf");
    std::fs::write(&empty, b"").unwrap();
    let good = fixture("sample_resume.txt");

    let model = NlpModel::english();

    let err = ResumeRanker::new(&model)
        .rank("Python developer", &[good.clone(), empty.clone()])
        .unwrap_err();
    assert!(err.to_string().contains("empty.pdf"));

    let records = ResumeRanker::new(&model)
        .with_failure_policy(FailurePolicy::Isolate)
        .rank("Python developer", &[empty.clone(), good])
        .unwrap();
    let report = RankedReport::from_records(records);

    let failed = &report.entries[1];
    assert_eq!(failed.file_path, empty.to_string_lossy());
    assert_eq!(failed.similarity_display(), "0.0000");
    assert_eq!(failed.name_or("N/A"), "N/A");
    assert_eq!(failed.email_or("N/A"), "N/A");
    assert!(failed.failure.is_some());
}

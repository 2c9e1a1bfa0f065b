//! CLI interface for the resume ranker

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-ranker")]
#[command(about = "Rank resumes against a job description by TF-IDF similarity")]
#[command(long_about = "Extract text from PDF resumes, score each one against a job description with TF-IDF cosine similarity, and write the ranking to a CSV file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank resumes against a job description
    #[command(group(ArgGroup::new("job_source").required(true).args(["job", "job_text"])))]
    Rank {
        /// Resume files (PDF, TXT, MD) or directories containing them
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Path to job description file (TXT, MD, PDF)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Job description given inline
        #[arg(long)]
        job_text: Option<String>,

        /// CSV file to write the ranking to
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep going when a resume cannot be read, marking it as failed
        #[arg(long)]
        isolate_failures: bool,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,

        /// Find candidate names with the rust-bert NER model
        #[arg(long)]
        ner: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Write the default configuration file
    Reset,

    /// Print the configuration file location
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_requires_a_job_source() {
        assert!(Cli::try_parse_from(["resume-ranker", "rank", "a.pdf"]).is_err());
        assert!(Cli::try_parse_from(["resume-ranker", "rank", "a.pdf", "--job", "j.txt", "--job-text", "x"]).is_err());
    }

    #[test]
    fn test_rank_arguments() {
        let cli = Cli::try_parse_from([
            "resume-ranker",
            "-v",
            "rank",
            "--job-text",
            "Python developer needed",
            "-o",
            "out.csv",
            "--isolate-failures",
            "--ner",
            "a.pdf",
            "resumes/",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Rank {
                inputs,
                job_text,
                output,
                isolate_failures,
                ner,
                ..
            } => {
                assert_eq!(inputs, vec![PathBuf::from("a.pdf"), PathBuf::from("resumes/")]);
                assert_eq!(job_text.as_deref(), Some("Python developer needed"));
                assert_eq!(output, Some(PathBuf::from("out.csv")));
                assert!(isolate_failures);
                assert!(ner);
            }
            _ => panic!("expected rank command"),
        }
    }
}

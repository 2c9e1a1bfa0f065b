//! Resume ranker: rank resumes against a job description by TF-IDF similarity

use clap::Parser;
use log::{error, info, warn};
use resume_ranker::cli::{Cli, Commands, ConfigAction};
use resume_ranker::config::{Config, FailurePolicy, PersonRecognizerKind};
use resume_ranker::input::{collect_resume_paths, InputManager};
use resume_ranker::output::{save_csv, ConsoleFormatter, RankedReport};
use resume_ranker::processing::{NlpModel, ResumeRanker};
use resume_ranker::{Result, ResumeRankerError};
use std::path::PathBuf;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Resetting must work even when the config file is missing or broken
    let resetting = matches!(cli.command, Commands::Config { action: Some(ConfigAction::Reset) });
    let loaded = if resetting {
        Ok(Config::default())
    } else {
        Config::load(cli.config.as_deref())
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Rank {
            inputs,
            job,
            job_text,
            output,
            isolate_failures,
            no_color,
            ner,
        } => {
            if let Some(output) = output {
                config.output.csv_path = output;
            }
            if isolate_failures {
                config.ranking.failure_policy = FailurePolicy::Isolate;
            }
            if no_color {
                config.output.color_output = false;
            }
            if ner {
                config.nlp.person_recognizer = PersonRecognizerKind::RustBert;
            }

            let job_description = match (job, job_text) {
                (Some(path), _) => {
                    info!("Reading job description from {}", path.display());
                    InputManager::new().extract_text(&path)?
                }
                (None, Some(text)) => text,
                (None, None) => {
                    return Err(ResumeRankerError::InvalidInput("No job description given".to_string()));
                }
            };

            let resume_paths = collect_resume_paths(&inputs)?;
            info!("Ranking {} resumes", resume_paths.len());

            let model = NlpModel::load(&config.nlp)?;
            let mut ranker = ResumeRanker::new(&model).with_failure_policy(config.ranking.failure_policy);
            let records = ranker.rank(&job_description, &resume_paths)?;
            let report = RankedReport::from_records(records);

            let formatter = ConsoleFormatter::new(config.output.color_output, config.output.not_available.clone());
            println!("{}", formatter.format_report(&report));

            save_csv(&report, &config.output.csv_path, &config.output.not_available)?;
            println!("\n{}", formatter.format_saved(&config.output.csv_path));

            let failed = report.failures().count();
            if failed > 0 {
                warn!("{} of {} resumes could not be processed", failed, report.len());
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let rendered = toml::to_string_pretty(&config).map_err(|e| {
                    ResumeRankerError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", rendered);
            }

            Some(ConfigAction::Reset) => {
                let path = Config::default().save(config_path.as_deref())?;
                println!("Configuration reset: {}", path.display());
            }

            Some(ConfigAction::Path) => {
                let path = config_path.unwrap_or_else(Config::config_path);
                println!("{}", path.display());
            }
        },
    }

    Ok(())
}

// src/cli.rs
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::app_log;
use crate::core::{CandidateRepository, ConfigManager, Database, FsOps};
use crate::export::export_to_file;
use crate::ingest::{ingest_resume, IngestSummary};
use crate::resume_analysis::{extract_text, FieldExtractor, JobDescription};
use crate::start_web_server;
use crate::types::{Candidate, SaveOutcome};

#[derive(Parser)]
#[command(name = "resume-ats")]
#[command(about = "Parse resumes into candidates, search them and match job descriptions")]
pub struct AtsCli {
    #[command(subcommand)]
    pub command: Option<AtsCommand>,

    #[arg(long, global = true, default_value = "config.yaml")]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum AtsCommand {
    /// Start the HTTP server (default)
    Serve,
    /// Copy resumes into the upload directory, parse and store them
    Import {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// List stored candidates
    List {
        /// Only candidates whose name, email or skills contain this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Show candidates matching a job description file
    Match { jd_file: PathBuf },
    /// Write all candidates to CSV
    Export {
        /// Defaults to candidates.csv in the upload directory
        output: Option<PathBuf>,
    },
    /// Delete every stored candidate (resume files are kept)
    Clear,
}

pub async fn handle_command(cli: AtsCli, config: ConfigManager) -> Result<()> {
    match cli.command.unwrap_or(AtsCommand::Serve) {
        AtsCommand::Serve => start_web_server(config).await,
        command => {
            let db = Database::new(&config.environment.database_path).await?;
            let result = run_offline(command, &config, &db).await;
            db.close().await;
            result
        }
    }
}

async fn run_offline(command: AtsCommand, config: &ConfigManager, db: &Database) -> Result<()> {
    let repo = CandidateRepository::new(db.pool());

    match command {
        AtsCommand::Serve => anyhow::bail!("serve does not run against an offline database"),

        AtsCommand::Import { files } => {
            let extractor = FieldExtractor::new(config.vocabulary.clone())?;
            let mut summary = IngestSummary::default();

            for file in files {
                let raw_name = file.to_string_lossy();
                let target = FsOps::upload_target(&config.environment.upload_path, &raw_name)?;
                if !FsOps::same_file(&file, &target).await {
                    FsOps::copy_file(&file, &target).await?;
                }

                let outcome = ingest_resume(&target, &extractor, &repo).await?;
                summary.record(&outcome);
                match outcome {
                    SaveOutcome::Inserted(candidate) => {
                        println!("stored   #{} {} <{}>", candidate.id, candidate.name, candidate.email)
                    }
                    SaveOutcome::Duplicate { email } => {
                        println!("skipped  {} (email {} already stored)", file.display(), email)
                    }
                }
            }

            app_log!(
                info,
                "Import finished: {} stored, {} duplicates skipped",
                summary.stored,
                summary.duplicates
            );
        }

        AtsCommand::List { search } => {
            let candidates = match search.as_deref() {
                Some(query) if !query.is_empty() => repo.find_by_fuzzy_text(query).await?,
                _ => repo.list_all().await?,
            };
            print_candidates(&candidates);
        }

        AtsCommand::Match { jd_file } => {
            let extractor = FieldExtractor::new(config.vocabulary.clone())?;
            let text = extract_text(&jd_file).await?;
            let job = JobDescription::from_text(text, &extractor);

            println!("Job description skills: [{}]", job.skills.join(", "));
            let matched = job.match_candidates(repo.list_all().await?);
            print_candidates(&matched);
        }

        AtsCommand::Export { output } => {
            let path = output.unwrap_or_else(|| config.export_path());
            let candidates = repo.list_all().await?;
            export_to_file(&path, &candidates).await?;
            println!("Exported {} candidates to {}", candidates.len(), path.display());
        }

        AtsCommand::Clear => {
            let removed = repo.clear().await?;
            println!("Removed {} candidates", removed);
        }
    }

    Ok(())
}

fn print_candidates(candidates: &[Candidate]) {
    if candidates.is_empty() {
        println!("No candidates found.");
        return;
    }

    println!("{:<5} {:<25} {:<30} {:<40}", "ID", "Name", "Email", "Skills");
    println!("{}", "-".repeat(100));
    for candidate in candidates {
        println!(
            "{:<5} {:<25} {:<30} {:<40}",
            candidate.id, candidate.name, candidate.email, candidate.skills
        );
    }
}

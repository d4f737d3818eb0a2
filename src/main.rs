//! resume-score: deterministic resume quality scoring and export

use clap::Parser;
use log::{error, info, warn};
use resume_score::cli::{self, Cli, Commands, ConfigAction, StoreAction};
use resume_score::input::{InputManager, ResumeStore};
use resume_score::output::formatter::ReportGenerator;
use resume_score::output::{generate_plain_text, get_export_warnings, QualityReport};
use resume_score::scoring::analyze_bullets;
use resume_score::{Config, ResumeRecord, ResumeScoreError, Result};
use std::path::{Path, PathBuf};
use std::process;

const RESUME_EXTENSIONS: &[&str] = &["json", "toml"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, cli.config, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config_path: Option<PathBuf>, config: Config) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            output,
            detailed,
            no_bullets,
            save,
        } => {
            let format = match output {
                Some(output) => cli::parse_output_format(&output).map_err(ResumeScoreError::InvalidInput)?,
                None => config.output.format,
            };
            let record = load_resume(&resume).await?;

            let mut report = QualityReport::build(&record, resume.to_string_lossy());
            if no_bullets || !config.output.include_bullet_guidance {
                report.bullet_feedback.clear();
            }
            info!("Scored {}: {}/{}", resume.display(), report.score.score, report.score.max_possible);

            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::new(use_colors, detailed || config.output.detailed);
            let content = generator.generate(&report, format)?;
            emit(&content, save.as_deref(), &generator)?;
        }

        Commands::Bullets { input, file } => {
            let text = if file {
                std::fs::read_to_string(&input)?
            } else {
                input
            };

            let analysis = analyze_bullets(&text);
            if analysis.is_empty() {
                println!("No bullet lines to check.");
            }
            for bullet in &analysis {
                let mark = if bullet.has_issues() { "✗" } else { "✓" };
                println!("{} {}", mark, bullet.line);
                for suggestion in &bullet.suggestions {
                    println!("    → {}", suggestion);
                }
            }
        }

        Commands::Export { resume, save } => {
            let record = load_resume(&resume).await?;
            for warning in get_export_warnings(&record) {
                warn!("{}", warning);
            }

            let text = generate_plain_text(&record);
            match save {
                Some(path) => {
                    std::fs::write(&path, format!("{}\n", text))?;
                    println!("Plain text written to {}", path.display());
                }
                None => println!("{}", text),
            }
        }

        Commands::Sample { save } => {
            let json = serde_json::to_string_pretty(&ResumeRecord::sample())?;
            match save {
                Some(path) => {
                    std::fs::write(&path, format!("{}\n", json))?;
                    println!("Sample resume written to {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Store { action } => {
            let store = ResumeStore::new(config.data_dir());
            let default_key = config.storage.default_key.as_str();

            match action {
                StoreAction::Save { resume, key } => {
                    let record = load_resume(&resume).await?;
                    let key = key.as_deref().unwrap_or(default_key);
                    let path = store.save(key, &record)?;
                    println!("Stored '{}' at {}", key, path.display());
                }

                StoreAction::Load { key } => {
                    let key = key.as_deref().unwrap_or(default_key);
                    let record = store
                        .load(key)?
                        .ok_or_else(|| ResumeScoreError::NotFound(format!("No resume stored under '{}'", key)))?;
                    println!("{}", serde_json::to_string_pretty(&record)?);
                }

                StoreAction::List => {
                    let keys = store.keys()?;
                    if keys.is_empty() {
                        println!("No stored resumes in {}", store.dir().display());
                    }
                    for key in keys {
                        println!("{}", key);
                    }
                }

                StoreAction::Remove { key } => {
                    if store.remove(&key)? {
                        println!("Removed '{}'", key);
                    } else {
                        println!("Nothing stored under '{}'", key);
                    }
                }
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("Output Format: {:?}", config.output.format);
                    println!("Detailed: {}", config.output.detailed);
                    println!("Bullet Guidance: {}", config.output.include_bullet_guidance);
                    println!("Colors: {}", config.output.color_output);
                    println!("Data Directory: {}", config.data_dir().display());
                    println!("Default Storage Key: {}", config.storage.default_key);
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }

                Some(ConfigAction::Reset) => {
                    Config::default().save_to(&path)?;
                    println!("Configuration reset: {}", path.display());
                }
            }
        }
    }

    Ok(())
}

async fn load_resume(path: &Path) -> Result<ResumeRecord> {
    cli::validate_file_extension(path, RESUME_EXTENSIONS)
        .map_err(|e| ResumeScoreError::InvalidInput(format!("Resume file: {}", e)))?;
    InputManager::new().load_resume(path).await
}

fn emit(content: &str, save: Option<&Path>, generator: &ReportGenerator) -> Result<()> {
    match save {
        Some(path) => {
            generator.save_report(content, path)?;
            println!("Report written to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

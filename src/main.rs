use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use gyeol::config::Config;
use gyeol::data::export;
use gyeol::data::loader::{self, MentorTable};
use gyeol::matching::score::Matcher;
use gyeol::output::terminal;
use gyeol::profile::models::MenteeProfile;
use gyeol::profile::vocab;

/// Gyeol: mentor recommendations from a mentee survey.
///
/// Scores every mentor in the mentor table against your survey answers and
/// shows the best matches with a per-signal breakdown.
#[derive(Parser)]
#[command(name = "gyeol", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend mentors for a mentee survey (JSON file)
    Recommend {
        /// Mentee survey answers as JSON
        mentee: PathBuf,

        /// Mentor table CSV (overrides GYEOL_MENTORS_CSV)
        #[arg(long)]
        mentors: Option<PathBuf>,

        /// How many mentors to recommend (overrides GYEOL_TOP_K)
        #[arg(long)]
        top: Option<usize>,

        /// Also export the recommended mentors as CSV. With no value, writes
        /// to GYEOL_EXPORT_PATH.
        #[arg(long, num_args = 0..=1)]
        export: Option<Option<PathBuf>>,

        /// Print the ranking as JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Show the full score breakdown against one mentor
    Score {
        /// Mentee survey answers as JSON
        mentee: PathBuf,

        /// Mentor name, as written in the mentor table
        name: String,

        /// Mentor table CSV (overrides GYEOL_MENTORS_CSV)
        #[arg(long)]
        mentors: Option<PathBuf>,
    },

    /// List the mentors in the mentor table
    Mentors {
        /// Mentor table CSV (overrides GYEOL_MENTORS_CSV)
        #[arg(long)]
        mentors: Option<PathBuf>,
    },

    /// Show the survey vocabularies (styles, majors, interests, ...)
    Vocab,

    /// Show the mentor table source and run scoring sanity checks
    Status {
        /// Mentor table CSV (overrides GYEOL_MENTORS_CSV)
        #[arg(long)]
        mentors: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gyeol=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let matcher = Matcher::default();

    match cli.command {
        Commands::Recommend {
            mentee,
            mentors,
            top,
            export,
            json,
        } => {
            let mentee = load_mentee(&mentee)?;
            let table = load_mentors(mentors.as_deref(), &config)?;
            let k = top.unwrap_or(config.top_k);

            info!(source = %table.source, mentors = table.mentors.len(), top = k, "Matching");
            let ranked = matcher.rank(&mentee, &table.mentors, k);

            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                println!("Mentor table: {} ({} mentors)", table.source, table.mentors.len());
                terminal::display_recommendations(&ranked);
            }

            if let Some(path) = export {
                let path = path.unwrap_or_else(|| config.export_path.clone());
                export::export_recommendations(&path, &ranked)?;
                if !json {
                    println!("Exported {} mentors to {}", ranked.len(), path.display());
                }
            }
        }

        Commands::Score {
            mentee,
            name,
            mentors,
        } => {
            let mentee = load_mentee(&mentee)?;
            let table = load_mentors(mentors.as_deref(), &config)?;

            let Some(mentor) = table.mentors.iter().find(|m| m.name.trim() == name.trim()) else {
                anyhow::bail!(
                    "No mentor named {:?} in {}.\nRun `gyeol mentors` to see the table.",
                    name,
                    table.source
                );
            };

            let breakdown = matcher.score(&mentee, mentor);
            terminal::display_score_detail(mentor, &breakdown);
        }

        Commands::Mentors { mentors } => {
            let table = load_mentors(mentors.as_deref(), &config)?;
            println!("Mentor table: {}", table.source);
            terminal::display_mentor_list(&table.mentors);
        }

        Commands::Vocab => {
            terminal::display_vocab();
            println!(
                "{}",
                "Multi-value mentor columns are separated with commas or semicolons.".dimmed()
            );
        }

        Commands::Status { mentors } => {
            let table = load_mentors(mentors.as_deref(), &config)?;
            gyeol::status::show(&table, &matcher);
        }
    }

    Ok(())
}

/// Load the mentor table from the `--mentors` flag, else the configured path.
fn load_mentors(flag: Option<&Path>, config: &Config) -> Result<MentorTable> {
    loader::load_mentor_table(flag.or(config.mentors_csv.as_deref()))
}

/// Read a mentee survey from a JSON file. Missing keys default to empty.
fn load_mentee(path: &Path) -> Result<MenteeProfile> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read mentee survey {}", path.display()))?;
    let mentee: MenteeProfile = serde_json::from_str(&json)
        .with_context(|| format!("Invalid mentee survey JSON in {}", path.display()))?;
    if !mentee.style.is_empty() && !vocab::is_known_style(&mentee.style) {
        warn!(style = %mentee.style, "Unknown communication style, only exact matches will score");
    }
    Ok(mentee)
}

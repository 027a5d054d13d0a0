use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::matching::rank::DEFAULT_TOP_K;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// flags take precedence over everything here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Mentor table to load (GYEOL_MENTORS_CSV). When unset, the loader
    /// searches its default paths and falls back to the built-in mentor.
    pub mentors_csv: Option<PathBuf>,
    /// How many recommendations to show (GYEOL_TOP_K, default 5)
    pub top_k: usize,
    /// Where `recommend --export` writes when no path is given
    pub export_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let top_k = match env::var("GYEOL_TOP_K") {
            Ok(raw) => parse_top_k(&raw)?,
            Err(_) => DEFAULT_TOP_K,
        };

        Ok(Self {
            mentors_csv: env::var("GYEOL_MENTORS_CSV")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            top_k,
            export_path: env::var("GYEOL_EXPORT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("gyeol_recommended_mentors.csv")),
        })
    }
}

/// Parse a top-K setting; it must be a positive integer.
pub fn parse_top_k(raw: &str) -> Result<usize> {
    let k: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("GYEOL_TOP_K must be a positive integer, got {raw:?}"))?;
    if k == 0 {
        anyhow::bail!("GYEOL_TOP_K must be at least 1");
    }
    Ok(k)
}

// Mentor table loader.
//
// Reads the mentor CSV into typed `MentorProfile` rows. Spreadsheet exports
// are messy, so the reader is lenient: header names are trimmed, unknown
// columns are ignored, missing columns and short rows fall back to empty
// fields, and spreadsheet "not available" markers read as empty cells.
//
// When no table can be found at all, a built-in single-mentor table keeps the
// rest of the flow runnable.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::profile::models::MentorProfile;

/// Where the default loader looks, in order, when no path is configured.
pub const DEFAULT_CSV_PATHS: &[&str] = &[
    "gyeol_dummy_mentors_20.csv",
    "data/gyeol_dummy_mentors_20.csv",
];

/// Cell values that spreadsheet tools write for a missing value.
const NA_MARKERS: &[&str] = &["nan", "NaN", "NA", "N/A", "n/a", "null", "NULL", "#N/A", "<NA>"];

/// Where a loaded mentor table came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MentorSource {
    File(PathBuf),
    /// No table was found; the built-in default row is in use
    Fallback,
}

impl fmt::Display for MentorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MentorSource::File(path) => write!(f, "{}", path.display()),
            MentorSource::Fallback => write!(f, "built-in default mentor"),
        }
    }
}

/// A loaded mentor table and its origin.
#[derive(Debug, Clone)]
pub struct MentorTable {
    pub mentors: Vec<MentorProfile>,
    pub source: MentorSource,
}

/// Parse mentor rows from any CSV reader.
pub fn read_mentors<R: Read>(input: R) -> Result<Vec<MentorProfile>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers =
        normalize_headers(reader.headers().context("Unable to read mentor CSV headers")?);
    reader.set_headers(headers.clone());

    let mut mentors = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let mut record =
            record.with_context(|| format!("Unable to read mentor CSV row {}", line + 1))?;
        if record.iter().all(|field| field.is_empty() || is_na(field)) {
            continue;
        }
        // Short rows read as empty trailing cells, extra cells are dropped
        while record.len() < headers.len() {
            record.push_field("");
        }
        record.truncate(headers.len());
        let mut mentor: MentorProfile = record
            .deserialize(Some(&headers))
            .with_context(|| format!("Malformed mentor CSV row {}", line + 1))?;
        clear_na_fields(&mut mentor);
        mentors.push(mentor);
    }

    Ok(mentors)
}

/// Load mentors from a CSV file on disk.
pub fn load_mentors_csv(path: &Path) -> Result<Vec<MentorProfile>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open mentor table {}", path.display()))?;
    let mentors = read_mentors(file)
        .with_context(|| format!("Failed to parse mentor table {}", path.display()))?;
    info!(path = %path.display(), mentors = mentors.len(), "Loaded mentor table");
    Ok(mentors)
}

/// Load the mentor table.
///
/// An explicit path must load. Without one, the default paths are tried in
/// order and the built-in fallback is used if none of them loads.
pub fn load_mentor_table(explicit: Option<&Path>) -> Result<MentorTable> {
    if let Some(path) = explicit {
        return Ok(MentorTable {
            mentors: load_mentors_csv(path)?,
            source: MentorSource::File(path.to_path_buf()),
        });
    }

    for candidate in DEFAULT_CSV_PATHS {
        let path = Path::new(candidate);
        if !path.exists() {
            continue;
        }
        match load_mentors_csv(path) {
            Ok(mentors) => {
                return Ok(MentorTable {
                    mentors,
                    source: MentorSource::File(path.to_path_buf()),
                })
            }
            Err(e) => warn!(path = candidate, error = %e, "Skipping unreadable mentor table"),
        }
    }

    warn!("No mentor table found, using the built-in default mentor");
    Ok(MentorTable {
        mentors: fallback_mentors(),
        source: MentorSource::Fallback,
    })
}

/// Single-row table used when no mentor file is available.
pub fn fallback_mentors() -> Vec<MentorProfile> {
    vec![MentorProfile {
        name: "김샘".to_string(),
        gender: "남".to_string(),
        age_band: "40–49".to_string(),
        occupation_major: "교육".to_string(),
        occupation_minor: "고등학교 교사".to_string(),
        comm_modes: "대면 만남, 일반 채팅".to_string(),
        comm_time: "오전, 오후".to_string(),
        comm_days: "월, 수, 금".to_string(),
        style: "연두부형".to_string(),
        interests: "독서, 인문학, 건강/웰빙".to_string(),
        purpose: "사회, 인생 경험 공유, 정서적 지지와 대화".to_string(),
        topic_prefs: "인생 경험·삶의 가치관, 건강·웰빙".to_string(),
        intro: "경청 중심의 상담을 합니다.".to_string(),
    }]
}

/// Trim header names, drop a leading BOM, and map `communication_style` to
/// `style` when the table has no `style` column.
///
/// A repeated column name keeps its first occurrence; later copies are renamed
/// `name.1`, `name.2`, ... and ignored.
fn normalize_headers(raw: &csv::StringRecord) -> csv::StringRecord {
    let mut names: Vec<String> = raw
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    if !names.iter().any(|h| h == "style") {
        if let Some(h) = names.iter_mut().find(|h| *h == "communication_style") {
            *h = "style".to_string();
        }
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    for name in names.iter_mut() {
        let count = seen.entry(name.clone()).or_insert(0);
        if *count > 0 && !name.is_empty() {
            let renamed = format!("{name}.{count}");
            warn!(
                column = %name,
                renamed = %renamed,
                "Duplicate mentor CSV column, keeping the first"
            );
            *name = renamed;
        }
        *count += 1;
    }

    csv::StringRecord::from(names)
}

fn is_na(field: &str) -> bool {
    NA_MARKERS.contains(&field.trim())
}

fn clear_na_fields(mentor: &mut MentorProfile) {
    for field in [
        &mut mentor.name,
        &mut mentor.gender,
        &mut mentor.age_band,
        &mut mentor.occupation_major,
        &mut mentor.occupation_minor,
        &mut mentor.comm_modes,
        &mut mentor.comm_time,
        &mut mentor.comm_days,
        &mut mentor.style,
        &mut mentor.interests,
        &mut mentor.purpose,
        &mut mentor.topic_prefs,
        &mut mentor.intro,
    ] {
        if is_na(field) {
            field.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_basic() {
        let data = "name,age_band,interests\n박멘토,30–39,\"독서, 여행\"\n";
        let mentors = read_mentors(data.as_bytes()).unwrap();
        assert_eq!(mentors.len(), 1);
        assert_eq!(mentors[0].name, "박멘토");
        assert_eq!(mentors[0].interests, "독서, 여행");
        assert!(mentors[0].style.is_empty());
    }

    #[test]
    fn test_communication_style_column() {
        let data = "name,communication_style\nA,댕댕이형\n";
        let mentors = read_mentors(data.as_bytes()).unwrap();
        assert_eq!(mentors[0].style, "댕댕이형");
    }

    #[test]
    fn test_style_column_wins() {
        let data = "name,style,communication_style\nA,연두부형,댕댕이형\n";
        let mentors = read_mentors(data.as_bytes()).unwrap();
        assert_eq!(mentors[0].style, "연두부형");
    }

    #[test]
    fn test_short_rows_and_blank_rows() {
        let data = "name,age_band,style\nA\n,,\nB,20–29,효율추구형\n";
        let mentors = read_mentors(data.as_bytes()).unwrap();
        assert_eq!(mentors.len(), 2);
        assert_eq!(mentors[0].name, "A");
        assert!(mentors[0].age_band.is_empty());
        assert_eq!(mentors[1].style, "효율추구형");
    }

    #[test]
    fn test_short_row_keeps_leading_fields() {
        let data = "name,age_band,style\n박멘토,30–39\n";
        let mentors = read_mentors(data.as_bytes()).unwrap();
        assert_eq!(mentors.len(), 1);
        assert_eq!(mentors[0].age_band, "30–39");
        assert!(mentors[0].style.is_empty());
    }

    #[test]
    fn test_long_row_extra_cells_ignored() {
        let data = "name,style\nA,댕댕이형,extra,cells\n";
        let mentors = read_mentors(data.as_bytes()).unwrap();
        assert_eq!(mentors[0].name, "A");
        assert_eq!(mentors[0].style, "댕댕이형");
    }

    #[test]
    fn test_duplicate_columns_keep_first() {
        let data = "name,interests,interests\nA,독서,여행\n";
        let mentors = read_mentors(data.as_bytes()).unwrap();
        assert_eq!(mentors.len(), 1);
        assert_eq!(mentors[0].interests, "독서");
    }

    #[test]
    fn test_duplicate_header_names_renamed() {
        let raw = csv::StringRecord::from(vec!["name", "style", "style", "style"]);
        let headers = normalize_headers(&raw);
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["name", "style", "style.1", "style.2"]
        );
    }

    #[test]
    fn test_na_markers_cleared() {
        let data = "name,intro,style\nA,NaN,N/A\n";
        let mentors = read_mentors(data.as_bytes()).unwrap();
        assert!(mentors[0].intro.is_empty());
        assert!(mentors[0].style.is_empty());
    }

    #[test]
    fn test_bom_and_padded_headers() {
        let data = "\u{feff}name , style\nA,연두부형\n";
        let mentors = read_mentors(data.as_bytes()).unwrap();
        assert_eq!(mentors[0].name, "A");
        assert_eq!(mentors[0].style, "연두부형");
    }

    #[test]
    fn test_fallback_is_single_row() {
        let mentors = fallback_mentors();
        assert_eq!(mentors.len(), 1);
        assert_eq!(mentors[0].occupation_major, "교육");
    }

    #[test]
    fn test_explicit_missing_path_errors() {
        let result = load_mentor_table(Some(Path::new("/nonexistent/mentors.csv")));
        assert!(result.is_err());
    }
}

// Recommendation export: the ranked mentors as a spreadsheet-friendly CSV.
//
// The file starts with a UTF-8 byte order mark so spreadsheet tools open the
// Korean text with the right encoding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::matching::rank::RankedMentor;
use crate::profile::models::MentorProfile;

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Exported columns, in order.
pub const EXPORT_COLUMNS: [&str; 13] = [
    "name",
    "gender",
    "age_band",
    "occupation_major",
    "occupation_minor",
    "comm_modes",
    "comm_time",
    "comm_days",
    "style",
    "interests",
    "purpose",
    "topic_prefs",
    "intro",
];

fn export_row(m: &MentorProfile) -> [&str; 13] {
    [
        m.name.as_str(),
        m.gender.as_str(),
        m.age_band.as_str(),
        m.occupation_major.as_str(),
        m.occupation_minor.as_str(),
        m.comm_modes.as_str(),
        m.comm_time.as_str(),
        m.comm_days.as_str(),
        m.style.as_str(),
        m.interests.as_str(),
        m.purpose.as_str(),
        m.topic_prefs.as_str(),
        m.intro.as_str(),
    ]
}

/// Write the BOM, header, and one row per ranked mentor in rank order.
pub fn write_recommendations<W: Write>(mut out: W, ranked: &[RankedMentor<'_>]) -> Result<()> {
    out.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(EXPORT_COLUMNS)?;
    for item in ranked {
        writer.write_record(export_row(item.mentor))?;
    }
    writer.flush()?;
    Ok(())
}

/// Export ranked mentors to a CSV file.
pub fn export_recommendations(path: &Path, ranked: &[RankedMentor<'_>]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create export file {}", path.display()))?;
    write_recommendations(BufWriter::new(file), ranked)
        .with_context(|| format!("Failed to write export file {}", path.display()))?;
    info!(path = %path.display(), rows = ranked.len(), "Exported recommendations");
    Ok(())
}

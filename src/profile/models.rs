// Profile models: the two sides of a match.
//
// A mentee profile arrives from the survey form as already-split sets. A
// mentor profile is one row of the mentor table, so its multi-value fields
// are still delimiter-joined strings; the matching engine runs them through
// `normalize::parse_token_set` at scoring time.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::normalize::parse_token_set;

/// The query side of matching, built once per survey submission.
///
/// Every field is optional in the input; absent sets deserialize to empty
/// sets and absent text to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenteeProfile {
    /// Mentoring goals (e.g. "진로 / 커리어 조언")
    pub purpose: BTreeSet<String>,
    /// Preferred discussion topics
    pub topics: BTreeSet<String>,
    /// Hobbies and interests, free tokens
    pub interests: BTreeSet<String>,
    pub comm_modes: BTreeSet<String>,
    pub time_slots: BTreeSet<String>,
    pub days: BTreeSet<String>,
    /// Communication-style category; empty when unset
    pub style: String,
    /// Desired mentor occupation categories
    pub wanted_majors: BTreeSet<String>,
    /// Desired mentor age bands
    pub wanted_mentor_ages: BTreeSet<String>,
    /// Short free-text request
    pub note: String,
}

/// One row of the mentor table.
///
/// Column names match the CSV headers. Any column may be missing, in which
/// case the field is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MentorProfile {
    pub name: String,
    pub gender: String,
    pub age_band: String,
    pub occupation_major: String,
    pub occupation_minor: String,
    /// Comma/semicolon separated
    pub comm_modes: String,
    pub comm_time: String,
    pub comm_days: String,
    pub style: String,
    pub interests: String,
    pub purpose: String,
    pub topic_prefs: String,
    pub intro: String,
}

/// Mentor-side fields after normalization, in the shape the scorer consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalMentor {
    pub comm_modes: BTreeSet<String>,
    pub comm_time: BTreeSet<String>,
    pub comm_days: BTreeSet<String>,
    pub interests: BTreeSet<String>,
    pub purpose: BTreeSet<String>,
    pub topic_prefs: BTreeSet<String>,
    pub style: String,
    pub occupation_major: String,
    pub age_band: String,
    pub intro: String,
}

impl MentorProfile {
    /// Split the delimiter-joined columns and trim the single-value ones.
    pub fn canonical(&self) -> CanonicalMentor {
        CanonicalMentor {
            comm_modes: parse_token_set(&self.comm_modes),
            comm_time: parse_token_set(&self.comm_time),
            comm_days: parse_token_set(&self.comm_days),
            interests: parse_token_set(&self.interests),
            purpose: parse_token_set(&self.purpose),
            topic_prefs: parse_token_set(&self.topic_prefs),
            style: self.style.trim().to_string(),
            occupation_major: self.occupation_major.trim().to_string(),
            age_band: self.age_band.trim().to_string(),
            intro: self.intro.trim().to_string(),
        }
    }

    /// Display name, with a placeholder for rows that have none.
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            "(unnamed)"
        } else {
            name
        }
    }
}

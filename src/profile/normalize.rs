// Normalization of raw spreadsheet and form values.
//
// Mentor tables come from hand-edited spreadsheets, so every function here is
// total: bad input degrades to an empty set or a pass-through label, never an
// error.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// Whole digit runs. Age labels are matched on complete numbers so that a
/// stray "1920" is not read as the 20s band.
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("number pattern is valid"));

/// Split a comma/semicolon joined field into a set of trimmed tokens.
///
/// Empty tokens are dropped and duplicates collapse, so `"독서, 여행; 음악"`
/// and `"음악;독서,,여행,독서"` produce the same set.
pub fn parse_token_set(raw: &str) -> BTreeSet<String> {
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// The fixed ordered scale of mentor/mentee age bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeBand {
    Teens,
    Twenties,
    Thirties,
    Forties,
    Fifties,
    Sixties,
    Seventies,
    Eighties,
    NinetyPlus,
}

impl AgeBand {
    /// All bands, youngest first. Adjacency is index distance in this slice.
    pub const ALL: [AgeBand; 9] = [
        AgeBand::Teens,
        AgeBand::Twenties,
        AgeBand::Thirties,
        AgeBand::Forties,
        AgeBand::Fifties,
        AgeBand::Sixties,
        AgeBand::Seventies,
        AgeBand::Eighties,
        AgeBand::NinetyPlus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::Teens => "13–19",
            AgeBand::Twenties => "20–29",
            AgeBand::Thirties => "30–39",
            AgeBand::Forties => "40–49",
            AgeBand::Fifties => "50–59",
            AgeBand::Sixties => "60–69",
            AgeBand::Seventies => "70–79",
            AgeBand::Eighties => "80–89",
            AgeBand::NinetyPlus => "90+",
        }
    }

    /// Position on the scale (0 = youngest).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Band containing an age in years, if the age is on the scale at all.
    pub fn from_age(age: u32) -> Option<Self> {
        match age {
            13..=19 => Some(AgeBand::Teens),
            20..=29 => Some(AgeBand::Twenties),
            30..=39 => Some(AgeBand::Thirties),
            40..=49 => Some(AgeBand::Forties),
            50..=59 => Some(AgeBand::Fifties),
            60..=69 => Some(AgeBand::Sixties),
            70..=79 => Some(AgeBand::Seventies),
            80..=89 => Some(AgeBand::Eighties),
            90..=120 => Some(AgeBand::NinetyPlus),
            _ => None,
        }
    }

    /// Parse a free-text age label ("만 30세~39세", "30대", "30-39", "90+").
    ///
    /// The first whole number that falls on the scale decides the band.
    /// Numbers off the scale (years, counts) are skipped.
    pub fn parse(label: &str) -> Option<Self> {
        NUMBER_RE
            .find_iter(label)
            .filter_map(|m| m.as_str().parse::<u32>().ok())
            .find_map(Self::from_age)
    }

    /// Absolute index distance between two bands.
    pub fn distance(&self, other: AgeBand) -> usize {
        self.index().abs_diff(other.index())
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Map an arbitrary age label to its canonical band label.
///
/// Labels with no usable number come back trimmed but otherwise unchanged.
pub fn normalize_age_band(label: &str) -> String {
    match AgeBand::parse(label) {
        Some(band) => band.label().to_string(),
        None => label.trim().to_string(),
    }
}
